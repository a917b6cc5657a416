//! Collision detection and response against the hexagon walls
//!
//! A wall is an infinite line carrying an inward unit normal. The ball
//! penetrates when its inward signed distance drops below the ball radius;
//! the response reflects velocity across the normal and pushes the center
//! back out along it.

use glam::Vec2;

use super::hexagon::HexEdge;

/// Result of a ball/edge collision check
#[derive(Debug, Clone, Copy)]
pub struct CollisionResult {
    /// Whether the ball penetrates the edge line
    pub hit: bool,
    /// Inward unit normal of the edge
    pub normal: Vec2,
    /// How far the ball center sits inside the forbidden band
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Check a ball against one edge of the hexagon
///
/// The edge is treated as an infinite line: the angular extent does not
/// matter because the six lines of a regular hexagon jointly bound the
/// interior, and the ball never leaves it.
pub fn ball_edge_collision(ball_pos: Vec2, ball_radius: f32, edge: &HexEdge) -> CollisionResult {
    let distance = edge.distance_to(ball_pos);
    if distance < ball_radius {
        CollisionResult {
            hit: true,
            normal: edge.normal,
            penetration: ball_radius - distance,
        }
    } else {
        CollisionResult::miss()
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}
