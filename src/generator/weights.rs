use rand::Rng;

use super::CLOSED;
use crate::grid::Grid;

/// Smallest weight a candidate edge can draw.
pub const WEIGHT_MIN: i32 = 1;
/// Largest weight a candidate edge can draw.
pub const WEIGHT_MAX: i32 = 499;

/// Assigns a random weight to every candidate edge of the half-resolution
/// wall buffer.
///
/// A slot with exactly one odd coordinate is a real edge between two wall
/// junctions and draws a weight in `WEIGHT_MIN..=WEIGHT_MAX`. Slots with both
/// coordinates odd carry no edge and are closed outright; junction slots (both
/// coordinates even) are left untouched.
pub fn populate_edges<R: Rng>(walls: &mut Grid, rng: &mut R) {
    for x in 0..walls.rows() {
        for y in 0..walls.cols() {
            if x % 2 == 1 && y % 2 == 1 {
                walls[(x, y)] = CLOSED;
            } else if (x % 2 == 1) ^ (y % 2 == 1) {
                walls[(x, y)] = rng.random_range(WEIGHT_MIN..=WEIGHT_MAX);
            }
        }
    }
}
