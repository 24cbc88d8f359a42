//! Destruction handling: marking units destroyed and maintaining the
//! population counter and shooter roster.

use onslaught_core::events::AudioEvent;
use onslaught_core::types::UnitId;

use crate::grid::FormationGrid;
use crate::roster::ShooterRoster;

/// Destroy a unit: mark it, decrement the population, notify the audio
/// collaborator, and reassign its column's roster slot. No-op for
/// unknown or already-destroyed units.
pub fn destroy(
    grid: &mut FormationGrid,
    roster: &mut ShooterRoster,
    target: UnitId,
    audio: &mut Vec<AudioEvent>,
) {
    let Some((col_idx, row_idx)) = grid.locate(target) else {
        log::debug!("destroy request for unknown unit {:?}", target);
        return;
    };
    let Some(unit) = grid.unit_mut(target) else {
        return;
    };
    if unit.destroyed {
        return;
    }
    unit.destroyed = true;
    unit.lives = 0;
    let class = unit.class;

    grid.decrement_population();
    audio.push(AudioEvent::Explosion {
        unit: target,
        class,
    });
    log::info!(
        "destroyed unit {:?} at ({col_idx},{row_idx}), {} remain",
        target,
        grid.population()
    );

    roster.reassign(target, grid.column(col_idx));
}

/// Take one life from a unit, destroying it when none remain. No-op
/// for unknown or already-destroyed units.
pub fn damage(
    grid: &mut FormationGrid,
    roster: &mut ShooterRoster,
    target: UnitId,
    audio: &mut Vec<AudioEvent>,
) {
    let Some(unit) = grid.unit_mut(target) else {
        return;
    };
    if unit.destroyed {
        return;
    }
    unit.lives = unit.lives.saturating_sub(1);
    if unit.lives == 0 {
        destroy(grid, roster, target, audio);
    }
}
