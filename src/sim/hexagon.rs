//! Rotated hexagon geometry
//!
//! The hexagon is never stored as vertices: it is fully described by a
//! rotation angle and a circumradius, and its edges are derived fresh each
//! tick so collision always sees the wall where it currently is.

use glam::Vec2;

use crate::consts::EDGE_COUNT;
use crate::polar_to_cartesian;

/// One edge of the hexagon, derived per tick
///
/// `normal` is the inward unit normal of the edge line; `offset` is the
/// signed offset of the line along that normal, so the inward distance of
/// a point `p` from the line is `p.dot(normal) - offset` (positive inside).
#[derive(Debug, Clone, Copy)]
pub struct HexEdge {
    pub start: Vec2,
    pub end: Vec2,
    pub normal: Vec2,
    pub offset: f32,
}

impl HexEdge {
    /// Signed inward distance from a point to this edge's infinite line
    #[inline]
    pub fn distance_to(&self, point: Vec2) -> f32 {
        point.dot(self.normal) - self.offset
    }
}

/// The 6 vertices of a regular hexagon at the given rotation
///
/// Vertices are spaced π/3 apart starting at `rotation`, in
/// counter-clockwise order.
pub fn hexagon_vertices(rotation: f32, circumradius: f32) -> [Vec2; EDGE_COUNT] {
    std::array::from_fn(|i| {
        let angle = rotation + i as f32 * std::f32::consts::FRAC_PI_3;
        polar_to_cartesian(circumradius, angle)
    })
}

/// The 6 edges of a regular hexagon at the given rotation
///
/// Edge `i` connects vertex `i` to vertex `(i + 1) % 6`. With vertices in
/// counter-clockwise order the left-hand perpendicular of each edge points
/// inward, toward the hexagon center.
pub fn hexagon_edges(rotation: f32, circumradius: f32) -> [HexEdge; EDGE_COUNT] {
    let vertices = hexagon_vertices(rotation, circumradius);
    std::array::from_fn(|i| {
        let start = vertices[i];
        let end = vertices[(i + 1) % EDGE_COUNT];
        let edge = end - start;
        let normal = Vec2::new(-edge.y, edge.x).normalize();
        HexEdge {
            start,
            end,
            normal,
            offset: start.dot(normal),
        }
    })
}

/// Distance from the hexagon center to each edge line
#[inline]
pub fn apothem(circumradius: f32) -> f32 {
    circumradius * 3.0_f32.sqrt() / 2.0
}
