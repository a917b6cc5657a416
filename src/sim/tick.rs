//! Fixed timestep integration
//!
//! One `step` advances the simulation by exactly one physics tick in the
//! required order: gravity, friction, integrate, collision pass against
//! the edges at this tick's rotation, then advance the rotation.

use crate::config::PhysicsConfig;
use crate::consts::OVERSHOOT;

use super::collision::{ball_edge_collision, reflect_velocity};
use super::state::SimState;

/// Advance the state by one fixed timestep
pub fn step(state: &mut SimState, config: &PhysicsConfig) {
    if state.is_degenerate() {
        return;
    }

    state.ball.vel.y += config.gravity * state.surface_scale;
    if config.friction < 1.0 {
        state.ball.vel *= config.friction;
    }
    state.ball.pos += state.ball.vel;

    // Collision must see the hexagon where it is THIS tick, so edges are
    // recomputed from the current rotation, never cached across ticks.
    // Fixed 0→5 order; a ball violating two edges near a corner is
    // corrected against each in sequence.
    let edges = state.edges();
    for edge in &edges {
        let result = ball_edge_collision(state.ball.pos, state.ball.radius, edge);
        if result.hit {
            state.ball.vel = reflect_velocity(state.ball.vel, result.normal) * config.restitution;
            state.ball.pos += result.normal * (result.penetration * OVERSHOOT);
        }
    }

    state.rotation += config.angular_speed;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::hexagon::apothem;
    use glam::Vec2;
    use proptest::prelude::*;
    use std::f32::consts::FRAC_PI_6;

    /// Config with no forces at all: pure reflection physics
    fn inert_config() -> PhysicsConfig {
        PhysicsConfig {
            gravity: 0.0,
            angular_speed: 0.0,
            restitution: 1.0,
            friction: 1.0,
            ..Default::default()
        }
        .sanitize()
    }

    fn state_with(config: &PhysicsConfig, seed: u64) -> SimState {
        SimState::new(400.0, 400.0, config, seed)
    }

    /// Containment tolerance from the ball radius
    fn containment_eps(state: &SimState) -> f32 {
        state.ball.radius * 1e-3
    }

    #[test]
    fn containment_invariant_default_config() {
        let config = PhysicsConfig::default();
        let mut state = state_with(&config, 42);
        for tick in 0..2000 {
            step(&mut state, &config);
            let eps = containment_eps(&state);
            for edge in state.edges() {
                assert!(
                    edge.distance_to(state.ball.pos) >= state.ball.radius - eps,
                    "penetration at tick {tick}"
                );
            }
        }
    }

    #[test]
    fn energy_bound_without_forces() {
        let config = inert_config();
        let mut state = state_with(&config, 11);
        let initial_speed = state.ball.vel.length();
        for _ in 0..5000 {
            step(&mut state, &config);
            assert!((state.ball.vel.length() - initial_speed).abs() < initial_speed * 1e-3);
        }
    }

    #[test]
    fn restitution_dissipates_energy_on_impact() {
        let config = PhysicsConfig {
            restitution: 0.8,
            ..inert_config()
        };
        let mut state = state_with(&config, 5);
        // Aim the ball straight at the flat right wall
        state.rotation = FRAC_PI_6;
        state.ball.pos = Vec2::ZERO;
        state.ball.vel = Vec2::new(3.0, 0.0);

        let mut bounced = false;
        let mut prev_speed = state.ball.vel.length();
        for _ in 0..200 {
            step(&mut state, &config);
            let speed = state.ball.vel.length();
            if speed < prev_speed - 1e-6 {
                // Post-collision speed strictly below pre-collision speed
                assert!((speed - prev_speed * 0.8).abs() < prev_speed * 1e-3);
                bounced = true;
                break;
            }
            prev_speed = speed;
        }
        assert!(bounced, "ball never reached the wall");
    }

    #[test]
    fn friction_decays_velocity_each_step() {
        let config = PhysicsConfig {
            friction: 0.99,
            ..inert_config()
        };
        let mut state = state_with(&config, 5);
        state.ball.pos = Vec2::ZERO;
        state.ball.vel = Vec2::new(1.0, 0.0);

        step(&mut state, &config);
        assert!((state.ball.vel.x - 0.99).abs() < 1e-5);
    }

    #[test]
    fn rotation_is_monotonic_and_exact() {
        let config = PhysicsConfig::default();
        let mut state = state_with(&config, 1);
        let initial = state.rotation;
        let mut previous = initial;
        for n in 1..=1000u32 {
            step(&mut state, &config);
            assert!(state.rotation > previous);
            previous = state.rotation;
            let expected = initial + n as f32 * config.angular_speed;
            assert!((state.rotation - expected).abs() < expected.abs() * 1e-3 + 1e-5);
        }
    }

    #[test]
    fn rotation_independent_of_ball() {
        let config = PhysicsConfig::default();
        let mut a = state_with(&config, 1);
        let mut b = state_with(&config, 999);
        for _ in 0..500 {
            step(&mut a, &config);
            step(&mut b, &config);
        }
        assert_eq!(a.rotation, b.rotation);
    }

    #[test]
    fn head_on_impact_negates_normal_component() {
        // Scenario: static hexagon with a flat wall facing +x, ball fired
        // straight at it. The normal (x) component must come back exactly
        // negated and the tangential (y) component must be untouched.
        let config = inert_config();
        let mut state = state_with(&config, 3);
        state.rotation = FRAC_PI_6;
        let wall = apothem(state.circumradius);
        state.ball.pos = Vec2::new(wall - state.ball.radius - 0.5, 0.0);
        state.ball.vel = Vec2::new(1.0, 0.0);

        step(&mut state, &config);

        assert!((state.ball.vel.x - (-1.0)).abs() < 1e-4);
        assert!(state.ball.vel.y.abs() < 1e-4);
        // Strictly separated after the correction
        let eps = containment_eps(&state);
        for edge in state.edges() {
            assert!(edge.distance_to(state.ball.pos) >= state.ball.radius - eps);
        }
    }

    #[test]
    fn oblique_impact_keeps_tangential_component() {
        let config = inert_config();
        let mut state = state_with(&config, 3);
        state.rotation = FRAC_PI_6;
        let wall = apothem(state.circumradius);
        state.ball.pos = Vec2::new(wall - state.ball.radius - 0.5, 0.0);
        state.ball.vel = Vec2::new(1.0, 0.4);

        step(&mut state, &config);

        assert!((state.ball.vel.x - (-1.0)).abs() < 1e-4);
        assert!((state.ball.vel.y - 0.4).abs() < 1e-4);
    }

    #[test]
    fn ball_never_escapes_circumcircle_over_long_run() {
        let config = PhysicsConfig::default();
        let mut state = state_with(&config, 1234);
        for tick in 0..10_000 {
            step(&mut state, &config);
            assert!(
                state.ball.pos.length() <= state.circumradius,
                "ball tunneled out at tick {tick}"
            );
        }
    }

    #[test]
    fn degenerate_state_skips_physics() {
        let config = PhysicsConfig::default();
        let mut state = SimState::new(0.0, 0.0, &config, 1);
        step(&mut state, &config);
        assert_eq!(state.rotation, 0.0);
        assert_eq!(state.ball.pos, Vec2::ZERO);
    }

    proptest! {
        /// Containment holds across random elasticities, spins, and seeds
        #[test]
        fn containment_invariant_random_configs(
            restitution in 0.5f32..=1.0,
            friction in 0.95f32..=1.0,
            angular_speed in -0.02f32..=0.02,
            seed in 0u64..1000,
        ) {
            let config = PhysicsConfig {
                restitution,
                friction,
                angular_speed,
                ..Default::default()
            }
            .sanitize();
            let mut state = state_with(&config, seed);
            for _ in 0..500 {
                step(&mut state, &config);
                let eps = containment_eps(&state);
                for edge in state.edges() {
                    prop_assert!(
                        edge.distance_to(state.ball.pos) >= state.ball.radius - eps
                    );
                }
            }
        }
    }
}
