//! Canvas 2D rendering module
//!
//! Draws the hexagon outline and the ball from the current simulation
//! state. Rendering is strictly read-only with respect to the simulation.

pub mod canvas;

pub use canvas::CanvasRenderer;
