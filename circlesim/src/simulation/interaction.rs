//! Point queries and click interaction
//!
//! The normal returned by [`closest_edge_and_normal`] is an interaction
//! heuristic, not a surface normal: its y component is pinned upward so a
//! click always launches the body up, whatever side was clicked. The
//! geometric contact normal used by the collision resolver lives in
//! `collision`.

use super::states::{Body, NVec2};

/// Fixed y component of the kick direction before renormalizing
pub const UPWARD_BIAS: f64 = -0.7;

/// Where a click meets a body and which way to kick it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeHit {
    pub edge: NVec2, // point on the circumference toward the click
    pub normal: NVec2, // unit kick direction, always pointing up
}

/// Index of the first body whose circle contains `point`.
pub fn find_body_at(bodies: &[Body], point: NVec2) -> Option<usize> {
    bodies.iter().position(|b| b.contains(point))
}

/// Edge point toward `point` and the upward-biased kick direction.
///
/// A click exactly on the center has no direction; it is treated as a
/// click straight above the center.
pub fn closest_edge_and_normal(body: &Body, point: NVec2) -> EdgeHit {
    let offset = point - body.x;
    let distance = offset.norm();
    let dir = if distance > 0.0 {
        offset / distance
    } else {
        NVec2::new(0.0, -1.0)
    };

    let edge = body.x + dir * body.radius();
    let normal = NVec2::new(dir.x, UPWARD_BIAS).normalize();

    EdgeHit { edge, normal }
}
