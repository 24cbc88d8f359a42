//! Visual-state refresh.
//!
//! Each move step, every live unit's tag is recomputed as a pure
//! function of (lives, sole-survivor, pulse-selected) rather than
//! mutated incrementally.

use rand::Rng;

use onslaught_core::enums::VisualState;
use onslaught_core::types::UnitId;
use onslaught_core::unit::Unit;

use crate::grid::FormationGrid;

/// Refresh all live units' visual tags for this move step.
pub fn run<R: Rng>(grid: &mut FormationGrid, rng: &mut R) {
    let sole = grid.is_sole_survivor();
    let pulse = if grid.population() > grid.rows() {
        pick_pulse(grid, rng)
    } else {
        None
    };

    for column in grid.columns_mut() {
        for unit in column.iter_mut().filter(|unit| unit.is_alive()) {
            let pulsed = pulse == Some(unit.id);
            let next = state_for(unit, sole, pulsed);
            unit.visual = next;
        }
    }
}

/// One random unit across the whole grid gets the pulse highlight.
fn pick_pulse<R: Rng>(grid: &FormationGrid, rng: &mut R) -> Option<UnitId> {
    let columns = grid.columns();
    if columns.is_empty() {
        return None;
    }
    let column = &columns[rng.gen_range(0..columns.len())];
    if column.is_empty() {
        return None;
    }
    Some(column[rng.gen_range(0..column.len())].id)
}

fn state_for(unit: &Unit, sole: bool, pulsed: bool) -> VisualState {
    if sole {
        VisualState::SoleSurvivor
    } else if unit.is_worn() {
        VisualState::LowLife
    } else if pulsed {
        VisualState::Pulse
    } else {
        VisualState::Normal
    }
}
