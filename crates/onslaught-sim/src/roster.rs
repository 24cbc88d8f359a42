//! Shooter roster: one fire-eligible unit per surviving column.

use rand::Rng;

use onslaught_core::types::UnitId;
use onslaught_core::unit::Unit;

use crate::grid::FormationGrid;

/// Ordered list of the units currently allowed to fire — the
/// bottom-most live unit of each surviving column ("closest to the
/// player fires"). Shrinks as columns empty out; never grows.
pub struct ShooterRoster {
    entries: Vec<UnitId>,
}

impl ShooterRoster {
    /// Initial roster: the bottom unit of every column.
    pub fn from_grid(grid: &FormationGrid) -> Self {
        let entries = grid
            .columns()
            .iter()
            .filter_map(|column| column.last().map(|unit| unit.id))
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[UnitId] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Uniformly random roster entry, or None when no column can fire.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> Option<UnitId> {
        if self.entries.is_empty() {
            return None;
        }
        Some(self.entries[rng.gen_range(0..self.entries.len())])
    }

    /// Maintain the roster after a unit is destroyed: if the unit held
    /// a roster slot, hand the slot to the bottom-most survivor of its
    /// column, or drop the slot when the column is exhausted.
    pub fn reassign(&mut self, destroyed: UnitId, column: &[Unit]) {
        let Some(slot) = self.entries.iter().position(|&id| id == destroyed) else {
            return;
        };
        match column.iter().rev().find(|unit| unit.is_alive()) {
            Some(next) => self.entries[slot] = next.id,
            None => {
                let _ = self.entries.remove(slot);
                log::debug!("shooter roster reduced to {} members", self.entries.len());
            }
        }
    }
}
