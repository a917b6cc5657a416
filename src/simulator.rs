//! Fixed-timestep simulator
//!
//! Owns the configuration, the simulation state, and the time accumulator
//! that decouples physics ticks from display frames. Per-frame elapsed
//! time is capped so a backgrounded tab resuming does not trigger a burst
//! of catch-up steps.

use crate::config::PhysicsConfig;
use crate::consts::{MAX_FRAME_DELTA, MAX_SUBSTEPS, SIM_DT};
use crate::sim::{SimState, step};

/// One ball bouncing inside one rotating hexagon
#[derive(Debug, Clone)]
pub struct HexagonBallSimulator {
    config: PhysicsConfig,
    state: SimState,
    accumulator: f32,
    last_time_ms: Option<f64>,
}

impl HexagonBallSimulator {
    /// Build a simulator for a surface of the given pixel dimensions
    ///
    /// Construction never fails: the config is sanitized and a zero-area
    /// surface merely leaves the simulator idle until the first resize.
    pub fn new(width: f32, height: f32, config: PhysicsConfig, seed: u64) -> Self {
        let config = config.sanitize();
        let state = SimState::new(width, height, &config, seed);
        Self {
            config,
            state,
            accumulator: 0.0,
            last_time_ms: None,
        }
    }

    /// Advance to the given wall-clock timestamp (milliseconds)
    ///
    /// Runs a whole number of fixed steps out of the accumulated elapsed
    /// time and returns how many were run. The first call only anchors the
    /// clock.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let elapsed = match self.last_time_ms {
            Some(last) => (((now_ms - last) / 1000.0) as f32).clamp(0.0, MAX_FRAME_DELTA),
            None => 0.0,
        };
        self.last_time_ms = Some(now_ms);
        self.accumulator += elapsed;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            step(&mut self.state, &self.config);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        substeps
    }

    /// Run exactly `n` fixed steps, ignoring wall-clock time
    pub fn step_n(&mut self, n: u32) {
        for _ in 0..n {
            step(&mut self.state, &self.config);
        }
    }

    /// Adjust the hexagon rotation speed live (radians per step)
    ///
    /// Non-finite values are ignored; everything else about the config
    /// stays fixed for the simulator's lifetime.
    pub fn set_rotation_speed(&mut self, angular_speed: f32) {
        if angular_speed.is_finite() {
            self.config.angular_speed = angular_speed;
        }
    }

    /// The effective, sanitized configuration
    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Current simulation state (read-only; rendering must not mutate)
    pub fn state(&self) -> &SimState {
        &self.state
    }

    /// Rescale derived radii for new surface dimensions
    pub fn resize(&mut self, width: f32, height: f32) {
        log::debug!("surface resized to {width}x{height}");
        self.state.resize(width, height, &self.config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simulator() -> HexagonBallSimulator {
        HexagonBallSimulator::new(400.0, 400.0, PhysicsConfig::default(), 42)
    }

    #[test]
    fn first_advance_only_anchors_the_clock() {
        let mut sim = simulator();
        assert_eq!(sim.advance(1000.0), 0);
        let rotation = sim.state().rotation;
        assert_eq!(rotation, 0.0);
    }

    #[test]
    fn steady_frames_run_one_step_each() {
        let mut sim = simulator();
        sim.advance(0.0);
        let mut total = 0;
        for frame in 1..=60 {
            total += sim.advance(frame as f64 * 1000.0 / 60.0);
        }
        // 60 frames at 60 Hz accumulate almost exactly 60 steps
        assert!((59..=61).contains(&total));
    }

    #[test]
    fn long_stall_is_capped() {
        let mut sim = simulator();
        sim.advance(0.0);
        // Tab backgrounded for 10 seconds: delta capped at 50ms, substeps
        // capped per frame, so no catch-up burst
        let steps = sim.advance(10_000.0);
        assert!(steps <= crate::consts::MAX_SUBSTEPS);
    }

    #[test]
    fn rotation_speed_can_change_live() {
        let mut sim = simulator();
        sim.set_rotation_speed(0.02);
        assert_eq!(sim.config().angular_speed, 0.02);
        sim.step_n(10);
        assert!((sim.state().rotation - 0.2).abs() < 1e-4);

        sim.set_rotation_speed(f32::NAN);
        assert_eq!(sim.config().angular_speed, 0.02);
    }

    #[test]
    fn config_is_sanitized_at_construction() {
        let sim = HexagonBallSimulator::new(
            400.0,
            400.0,
            PhysicsConfig {
                restitution: 42.0,
                ..Default::default()
            },
            1,
        );
        assert_eq!(sim.config().restitution, 1.0);
    }

    #[test]
    fn resize_applies_before_the_next_step() {
        let mut sim = simulator();
        sim.step_n(5);
        let rotation = sim.state().rotation;

        sim.resize(800.0, 800.0);
        let config = sim.config().clone();
        assert!((sim.state().circumradius - 800.0 * config.hex_radius_ratio).abs() < 1e-3);
        assert_eq!(sim.state().rotation, rotation);

        sim.step_n(1);
        assert!(sim.state().rotation > rotation);
    }

    #[test]
    fn zero_area_surface_never_panics() {
        let mut sim = HexagonBallSimulator::new(0.0, 0.0, PhysicsConfig::default(), 7);
        sim.advance(0.0);
        sim.advance(16.7);
        assert!(sim.state().is_degenerate());

        sim.resize(300.0, 300.0);
        assert!(!sim.state().is_degenerate());
        sim.step_n(1);
        assert!(sim.state().rotation > 0.0);
    }
}