//! The formation grid: ordered columns of units and their aggregate
//! geometry.
//!
//! Column order is left to right and never changes; units within a
//! column are ordered top to bottom by creation, so the last element
//! is the bottom of the column. Geometry is recomputed from live units
//! only.

use glam::IVec2;

use onslaught_core::config::FormationConfig;
use onslaught_core::constants::{SEPARATION_DISTANCE, UNIT_HEIGHT, UNIT_WIDTH};
use onslaught_core::types::UnitId;
use onslaught_core::unit::{class_for_row, Unit};

/// Ordered collection of unit columns with derived bounding geometry.
pub struct FormationGrid {
    columns: Vec<Vec<Unit>>,
    origin: IVec2,
    width: i32,
    height: i32,
    unit_width: i32,
    unit_height: i32,
    /// Count of non-destroyed units. Mutated only by the destruction
    /// system.
    population: u32,
    /// Original width * height of the formation.
    capacity: u32,
    /// Original number of rows.
    rows: u32,
}

impl FormationGrid {
    /// Build the initial grid: `formation_width` columns of
    /// `formation_height` units, spaced on the separation grid, with
    /// unit classes assigned by row depth.
    pub fn new(config: &FormationConfig) -> Self {
        let mut columns = Vec::with_capacity(config.formation_width as usize);
        let mut next_id = 0u32;
        for col in 0..config.formation_width {
            let mut column = Vec::with_capacity(config.formation_height as usize);
            for row in 0..config.formation_height {
                let offset = IVec2::new(
                    col as i32 * SEPARATION_DISTANCE,
                    row as i32 * SEPARATION_DISTANCE,
                );
                column.push(Unit::new(
                    UnitId(next_id),
                    config.initial_position + offset,
                    class_for_row(row, config.formation_height),
                ));
                next_id += 1;
            }
            columns.push(column);
        }

        let capacity = config.capacity();
        let mut grid = Self {
            columns,
            origin: config.initial_position,
            width: 0,
            height: 0,
            unit_width: UNIT_WIDTH,
            unit_height: UNIT_HEIGHT,
            population: capacity,
            capacity,
            rows: config.formation_height,
        };
        grid.cleanup();
        grid
    }

    /// Prune columns with no live unit and recompute the bounding
    /// geometry from the live units that remain. Idempotent on an
    /// unchanged grid; an empty grid collapses to zero dimensions.
    pub fn cleanup(&mut self) {
        let before = self.columns.len();
        self.columns.retain(|column| column.iter().any(Unit::is_alive));
        if self.columns.len() < before {
            log::debug!(
                "removed {} exhausted column(s), {} remain",
                before - self.columns.len(),
                self.columns.len()
            );
        }

        if self.columns.is_empty() {
            self.width = 0;
            self.height = 0;
            return;
        }

        let mut top = i32::MAX;
        for column in &self.columns {
            if let Some(first) = column.iter().find(|unit| unit.is_alive()) {
                top = top.min(first.position.y);
            }
        }

        // Every retained column has a live unit; columns are in
        // left-to-right order.
        let left = self.column_x(0);
        let right = self.column_x(self.columns.len() - 1);
        self.width = right - left + self.unit_width;

        let mut height = 0;
        for column in &self.columns {
            if let Some(bottom) = column.iter().rev().find(|unit| unit.is_alive()) {
                height = height.max(bottom.position.y - top + self.unit_height);
            }
        }
        self.height = height;
        self.origin = IVec2::new(left, top);
    }

    /// Remove destroyed units from their columns. Runs on move steps;
    /// columns emptied here linger until the next `cleanup`.
    pub fn sweep_destroyed(&mut self) {
        for (col_idx, column) in self.columns.iter_mut().enumerate() {
            let before = column.len();
            column.retain(Unit::is_alive);
            if column.len() < before {
                log::debug!(
                    "swept {} destroyed unit(s) from column {col_idx}",
                    before - column.len()
                );
            }
        }
    }

    /// Whether the given unit currently sits at the top of a column.
    pub fn breaches_first_row(&self, unit: UnitId) -> bool {
        self.columns
            .iter()
            .any(|column| column.first().map_or(false, |u| u.id == unit))
    }

    /// Live units in column order, top to bottom within each column.
    pub fn live_units(&self) -> impl Iterator<Item = &Unit> {
        self.columns
            .iter()
            .flat_map(|column| column.iter().filter(|unit| unit.is_alive()))
    }

    /// Locate a unit by id: (column index, row index).
    pub fn locate(&self, id: UnitId) -> Option<(usize, usize)> {
        for (col_idx, column) in self.columns.iter().enumerate() {
            if let Some(row_idx) = column.iter().position(|unit| unit.id == id) {
                return Some((col_idx, row_idx));
            }
        }
        None
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.columns
            .iter()
            .flat_map(|column| column.iter())
            .find(|unit| unit.id == id)
    }

    pub(crate) fn unit_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.columns
            .iter_mut()
            .flat_map(|column| column.iter_mut())
            .find(|unit| unit.id == id)
    }

    pub(crate) fn column(&self, index: usize) -> &[Unit] {
        &self.columns[index]
    }

    pub(crate) fn columns(&self) -> &[Vec<Unit>] {
        &self.columns
    }

    pub(crate) fn columns_mut(&mut self) -> &mut [Vec<Unit>] {
        &mut self.columns
    }

    pub(crate) fn shift_origin(&mut self, delta: IVec2) {
        self.origin += delta;
    }

    pub(crate) fn decrement_population(&mut self) {
        self.population -= 1;
    }

    pub fn origin(&self) -> IVec2 {
        self.origin
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn unit_width(&self) -> i32 {
        self.unit_width
    }

    pub fn unit_height(&self) -> i32 {
        self.unit_height
    }

    pub fn population(&self) -> u32 {
        self.population
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.population == 0
    }

    pub fn is_sole_survivor(&self) -> bool {
        self.population == 1
    }

    /// X position of a column, read from its topmost unit (all units
    /// in a column share one x).
    fn column_x(&self, index: usize) -> i32 {
        self.columns[index]
            .iter()
            .find(|unit| unit.is_alive())
            .map_or(self.origin.x, |unit| unit.position.x)
    }
}
