//! Per-tick formation movement.
//!
//! Recomputes the pacing cadence from the population, advances the
//! accumulator, and on a move step runs the direction FSM, applies the
//! bulk displacement, sweeps destroyed units out of their columns, and
//! applies the per-unit vertical policies.

use glam::IVec2;
use rand::Rng;

use onslaught_core::config::FormationConfig;
use onslaught_core::constants::{SETTLE_DRIFT, SOLE_SURVIVOR_CLIMB};
use onslaught_core::types::Playfield;

use onslaught_motion::fsm::{self, BoundarySense, MotionContext, MotionState};
use onslaught_motion::{jitter, pacing};

use crate::grid::FormationGrid;

/// Advance motion by one tick. Returns true when a move step fired.
pub fn run<R: Rng>(
    grid: &mut FormationGrid,
    motion: &mut MotionState,
    config: &FormationConfig,
    playfield: &Playfield,
    rng: &mut R,
) -> bool {
    motion.ticks_per_move =
        pacing::ticks_per_move(grid.population(), grid.capacity(), config.base_speed);
    motion.accumulator += 1;
    if motion.accumulator < motion.ticks_per_move {
        return false;
    }
    motion.accumulator = 0;

    let sense = BoundarySense::measure(grid.origin(), grid.width(), grid.height(), playfield);
    let update = fsm::evaluate(&MotionContext {
        direction: motion.direction,
        previous: motion.previous,
        sense,
    });
    if update.turned {
        log::debug!("formation now moving {:?}", update.direction);
    }
    motion.direction = update.direction;
    motion.previous = update.previous;

    grid.shift_origin(update.displacement);
    grid.sweep_destroyed();

    if grid.is_sole_survivor() {
        move_sole_survivor(grid, &sense, update.displacement, rng);
    } else {
        move_ranks(grid, &sense, update.displacement, rng);
    }
    true
}

/// The last unit standing bounces: a strong climb when pressed against
/// the bottom region, otherwise a randomized dive.
fn move_sole_survivor<R: Rng>(
    grid: &mut FormationGrid,
    sense: &BoundarySense,
    displacement: IVec2,
    rng: &mut R,
) {
    let vertical = if !sense.at_top {
        -SOLE_SURVIVOR_CLIMB
    } else if !sense.at_bottom {
        jitter::descent_burst(rng)
    } else {
        displacement.y
    };
    for column in grid.columns_mut() {
        for unit in column.iter_mut() {
            unit.translate(IVec2::new(displacement.x, vertical));
        }
    }
}

/// Regular ranks: one lunge column's bottom unit dives, everyone else
/// settles downward by one pixel. At the bottom the vertical play
/// stops and the bulk displacement applies unchanged.
fn move_ranks<R: Rng>(
    grid: &mut FormationGrid,
    sense: &BoundarySense,
    displacement: IVec2,
    rng: &mut R,
) {
    if sense.at_bottom {
        for column in grid.columns_mut() {
            for unit in column.iter_mut() {
                unit.translate(displacement);
            }
        }
        return;
    }

    let lunge = jitter::pick_lunge_column(rng, grid.column_count());
    for (col_idx, column) in grid.columns_mut().iter_mut().enumerate() {
        let bottom = column.len().saturating_sub(1);
        for (row_idx, unit) in column.iter_mut().enumerate() {
            let vertical = if lunge == Some(col_idx) && row_idx == bottom {
                jitter::descent_burst(rng)
            } else {
                SETTLE_DRIFT
            };
            unit.translate(IVec2::new(displacement.x, vertical));
        }
    }
}
