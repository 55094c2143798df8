#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::geom::{Point, Size};

/// Test whether `pt` lands on a sprite of `size` centred at `center`.
///
/// The test is against the sprite's rendered rectangle, edges inclusive.
/// Transparent pixels inside the rectangle still count as a hit.
#[must_use]
pub fn hit_test(pt: Point, center: Point, size: Size) -> bool {
    (pt.x - center.x).abs() <= size.width / 2.0 && (pt.y - center.y).abs() <= size.height / 2.0
}
