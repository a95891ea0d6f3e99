//! Axis-aligned box collision
//!
//! Entities are top-left anchored squares. The overlap test is open-interval
//! on all four sides, and each box carries its own size.

use glam::Vec2;

/// Do two axis-aligned square boxes overlap?
///
/// Strict inequalities: boxes that merely touch along an edge do not
/// collide.
#[inline]
pub fn boxes_overlap(a: Vec2, a_size: f32, b: Vec2, b_size: f32) -> bool {
    a.x < b.x + b_size && a.x + a_size > b.x && a.y < b.y + b_size && a.y + a_size > b.y
}
