//! Inlier association against a candidate line.

use crate::core::Line;

use super::buffer::PointBuffer;

/// Move every active point within `proximity_epsilon` of `line` into the
/// consumed region.
///
/// The active region is scanned from its highest index down, so removals never
/// disturb points still waiting to be tested. Closeness uses
/// [`Line::scaled_distance_squared`] against `proximity_epsilon²`.
///
/// Returns the number of points associated.
pub fn associate_inliers(buffer: &mut PointBuffer, line: &Line, proximity_epsilon: f32) -> usize {
    let threshold = proximity_epsilon * proximity_epsilon;
    let start_size = buffer.size();

    for i in (0..start_size).rev() {
        let p = buffer.get(i);
        if line.scaled_distance_squared(p.x, p.y) <= threshold {
            buffer.remove(i);
        }
    }

    start_size - buffer.size()
}
