//! Seed group sampling.
//!
//! A trial starts from one random reference point and grows a seed group from
//! its immediate neighbours in buffer order, alternating left and right and
//! wrapping around the ends. Neighbours more than `sample_deviation` radians
//! away from the reference are skipped and stay active.

use rand::Rng;

use super::buffer::PointBuffer;

/// Move a seed group from the active region into the consumed region.
///
/// Draws the reference index uniformly from `[0, size)`, then examines
/// `sample_size` neighbours: even steps look at the circular predecessor of
/// the reference, odd steps at its circular successor, always modulo the
/// current (shrinking) active size. Accepted neighbours are removed, and the
/// reference is removed last.
///
/// On return the seed group occupies `[size, size_before)`. Returns the number
/// of points moved (reference included), which is 0 only for an empty active
/// region.
pub fn sample_seed_group<R: Rng + ?Sized>(
    buffer: &mut PointBuffer,
    rng: &mut R,
    sample_size: usize,
    sample_deviation: f32,
) -> usize {
    let start_size = buffer.size();
    if start_size == 0 {
        return 0;
    }

    let mut reference = rng.random_range(0..start_size);
    let reference_angle = buffer.get(reference).angle;

    for i in 0..sample_size {
        let size = buffer.size();
        let pick = if i % 2 == 0 {
            (reference + size - 1) % size
        } else {
            (reference + 1) % size
        };

        if pick != reference && (buffer.get(pick).angle - reference_angle).abs() <= sample_deviation
        {
            buffer.remove(pick);
            // Keep pointing at the same point after the left shift
            if pick < reference {
                reference -= 1;
            }
        }
    }

    buffer.remove(reference);
    start_size - buffer.size()
}
