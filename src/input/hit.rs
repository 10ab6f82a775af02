//! Click hit-testing against the grid of circular dots
//!
//! Dots are circles of diameter `dot_size` laid out on a square pitch of
//! `dot_size + gap_size`, with each dot's center at `cell * pitch + radius`.
//! A pointer position is on a dot only when it is strictly inside the circle,
//! not merely inside the bounding cell.

use crate::render::DotLayout;

/// Map a surface-local pointer position to the grid dot it lands on.
///
/// Returns `None` when the candidate cell is outside the grid or the
/// position falls in the gap around the dot. At most one dot can contain a
/// given point, so the first (and only) bounding match is returned.
pub fn hit_test(
    px: f64,
    py: f64,
    layout: DotLayout,
    width: u32,
    height: u32,
) -> Option<(i32, i32)> {
    let pitch = layout.pitch();
    let radius = layout.radius();

    let gx = (px / pitch).floor();
    let gy = (py / pitch).floor();
    if gx < 0.0 || gx >= width as f64 || gy < 0.0 || gy >= height as f64 {
        return None;
    }

    let cx = gx * pitch + radius;
    let cy = gy * pitch + radius;
    let dx = cx - px;
    let dy = cy - py;
    // Strictly inside: distance exactly equal to the radius misses.
    if dx * dx + dy * dy < radius * radius {
        Some((gx as i32, gy as i32))
    } else {
        None
    }
}
