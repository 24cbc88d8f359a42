//! Randomized per-unit vertical policies applied on move steps.

use rand::Rng;

use onslaught_core::constants::{LUNGE_RANDOM_CHANCE, Y_SPEED};

/// Pick the column whose bottom unit lunges downward this move step.
///
/// Usually a uniformly random column; otherwise the last one. Index
/// draws are uniform over `[0, column_count)` — a single column is
/// picked outright, and an empty grid yields no target.
pub fn pick_lunge_column<R: Rng>(rng: &mut R, column_count: usize) -> Option<usize> {
    match column_count {
        0 => None,
        1 => Some(0),
        _ => {
            if rng.gen_bool(LUNGE_RANDOM_CHANCE) {
                Some(rng.gen_range(0..column_count))
            } else {
                Some(column_count - 1)
            }
        }
    }
}

/// Randomized downward speed for a lunging or sole-survivor unit,
/// drawn from `[Y_SPEED, 2 * Y_SPEED)`.
pub fn descent_burst<R: Rng>(rng: &mut R) -> i32 {
    rng.gen_range(Y_SPEED..Y_SPEED * 2)
}
