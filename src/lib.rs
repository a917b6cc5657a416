//! Hex Bounce - a ball bouncing inside a rotating hexagon
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, collisions, integration)
//! - `simulator`: Fixed-timestep driver around the simulation
//! - `scheduler`: Frame scheduling abstraction (testable without a display)
//! - `runloop`: Update-then-render loop with clean cancellation
//! - `renderer`: Canvas 2D rendering (wasm only)
//! - `widget`: Browser widget boundary (wasm only)

pub mod config;
pub mod runloop;
pub mod scheduler;
pub mod sim;
pub mod simulator;

#[cfg(target_arch = "wasm32")]
pub mod renderer;
#[cfg(target_arch = "wasm32")]
pub mod widget;

pub use config::PhysicsConfig;
pub use simulator::HexagonBallSimulator;

use glam::Vec2;

/// Simulation constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one step per nominal display frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Cap on accumulated frame delta (seconds) after a backgrounded tab resumes
    pub const MAX_FRAME_DELTA: f32 = 0.05;

    /// Number of hexagon edges
    pub const EDGE_COUNT: usize = 6;
    /// Penetration correction multiplier, slightly above 1 so the ball
    /// separates strictly from a moving wall despite floating-point rounding
    pub const OVERSHOOT: f32 = 1.001;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
