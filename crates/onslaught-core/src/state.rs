//! Formation snapshot — a serializable view of the visible state,
//! built on demand for frontends and determinism tests.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::enums::{Direction, UnitClass, VisualState};
use crate::types::UnitId;

/// Complete visible state of the formation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormationSnapshot {
    pub direction: Direction,
    /// Count of non-destroyed units.
    pub population: u32,
    /// Top-left corner of the bounding box.
    pub origin: IVec2,
    /// Bounding width over live units.
    pub width: i32,
    /// Bounding height over live units.
    pub height: i32,
    /// Live units in column order, top to bottom within a column.
    pub units: Vec<UnitView>,
}

/// One live unit as seen by a renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitView {
    pub id: UnitId,
    pub position: IVec2,
    pub class: UnitClass,
    pub lives: u32,
    pub visual: VisualState,
}
