//! Simulation state
//!
//! Everything the integrator mutates lives here. State is derived from the
//! surface dimensions plus a seed; the same seed always produces the same
//! spawn, which keeps the whole run reproducible.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::PhysicsConfig;
use crate::polar_to_cartesian;
use crate::sim::hexagon;

/// The bouncing ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    /// Position relative to the hexagon center
    pub pos: Vec2,
    /// Velocity in surface units per step
    pub vel: Vec2,
    pub radius: f32,
}

/// Full simulation state for one hexagon + ball
#[derive(Debug, Clone)]
pub struct SimState {
    /// Hexagon rotation (radians, grows monotonically, never wrapped)
    pub rotation: f32,
    /// Hexagon circumradius in surface units
    pub circumradius: f32,
    /// min(width, height) of the drawing surface; 0 while degenerate
    pub surface_scale: f32,
    pub ball: Ball,
    rng: Pcg32,
    spawned: bool,
}

impl SimState {
    /// Build state for a surface of the given size
    ///
    /// A zero-area surface is tolerated: the state stays degenerate (and
    /// the integrator skips it) until a resize provides real dimensions.
    pub fn new(width: f32, height: f32, config: &PhysicsConfig, seed: u64) -> Self {
        let mut state = Self {
            rotation: 0.0,
            circumradius: 0.0,
            surface_scale: 0.0,
            ball: Ball {
                pos: Vec2::ZERO,
                vel: Vec2::ZERO,
                radius: 0.0,
            },
            rng: Pcg32::seed_from_u64(seed),
            spawned: false,
        };
        state.resize(width, height, config);
        state
    }

    /// Surface too small to derive radii from
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.surface_scale <= 0.0
    }

    /// Recompute derived radii for new surface dimensions
    ///
    /// Rotation, ball position and velocity are deliberately left alone:
    /// the ball keeps its absolute coordinates and effectively changes
    /// relative size after a resize.
    pub fn resize(&mut self, width: f32, height: f32, config: &PhysicsConfig) {
        let scale = width.min(height);
        if !scale.is_finite() || scale <= 0.0 {
            self.surface_scale = 0.0;
            return;
        }
        self.surface_scale = scale;
        self.circumradius = scale * config.hex_radius_ratio;
        self.ball.radius = self.circumradius * config.ball_radius_ratio;
        if !self.spawned {
            self.spawn_ball(config);
        }
    }

    /// Place the ball at a random point inside the hexagon
    ///
    /// Seeded by angle + distance within `circumradius - 2*ball_radius`,
    /// which keeps the spawn inside the polygon regardless of rotation
    /// phase. Velocity is a fixed magnitude with a random sign per axis.
    fn spawn_ball(&mut self, config: &PhysicsConfig) {
        let angle = self.rng.random_range(0.0..std::f32::consts::TAU);
        let max_distance = (self.circumradius - self.ball.radius * 2.0).max(0.0);
        let distance = self.rng.random_range(0.0..=max_distance);
        self.ball.pos = polar_to_cartesian(distance, angle);

        let speed = self.surface_scale * config.launch_speed;
        let sign_x = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let sign_y = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.ball.vel = Vec2::new(speed * sign_x, speed * sign_y);
        self.spawned = true;
    }

    /// Current hexagon edges at this tick's rotation
    pub fn edges(&self) -> [hexagon::HexEdge; crate::consts::EDGE_COUNT] {
        hexagon::hexagon_edges(self.rotation, self.circumradius)
    }
}
