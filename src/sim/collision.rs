//! Collision detection between the avatar circle and obstacle rectangles
//!
//! Each obstacle pair is two axis-aligned rectangles spanning the pair's
//! width: the top one from the ceiling down to `top_height`, the bottom one
//! from `bottom_y` down to the floor. The avatar is a circle; a hit needs
//! strict horizontal overlap plus the circle's vertical extent crossing
//! into the rectangle.

use glam::Vec2;

use super::state::{HitCause, ObstaclePair};

/// Whether the circle's horizontal extent strictly overlaps `[x, x + width]`
#[inline]
pub fn overlaps_horizontally(center_x: f32, radius: f32, x: f32, width: f32) -> bool {
    center_x + radius > x && center_x - radius < x + width
}

/// Check the avatar circle against one obstacle pair.
///
/// Returns which rectangle was hit; the top rectangle is tested first.
pub fn circle_pair_collision(
    center: Vec2,
    radius: f32,
    pair: &ObstaclePair,
    width: f32,
) -> Option<HitCause> {
    if !overlaps_horizontally(center.x, radius, pair.x, width) {
        return None;
    }
    if center.y - radius < pair.top_height {
        return Some(HitCause::TopObstacle);
    }
    if center.y + radius > pair.bottom_y {
        return Some(HitCause::BottomObstacle);
    }
    None
}
