//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Edges checked in a fixed order (0→5)
//! - No rendering or platform dependencies

pub mod collision;
pub mod hexagon;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, ball_edge_collision, reflect_velocity};
pub use hexagon::{HexEdge, hexagon_edges, hexagon_vertices};
pub use state::{Ball, SimState};
pub use tick::step;
