//! Unit data model.
//!
//! Units are plain data; movement, destruction, and visual-state logic
//! live in the simulation systems, not here.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{CLASS_A_LIVES, CLASS_B_LIVES, CLASS_C_LIVES};
use crate::enums::{UnitClass, VisualState};
use crate::types::UnitId;

/// One enemy unit within the formation. Owned exclusively by its
/// column in the grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    /// Top-left corner in playfield pixels.
    pub position: IVec2,
    pub class: UnitClass,
    /// Remaining lives. Reaching zero destroys the unit.
    pub lives: u32,
    pub destroyed: bool,
    pub visual: VisualState,
}

impl Unit {
    pub fn new(id: UnitId, position: IVec2, class: UnitClass) -> Self {
        Self {
            id,
            position,
            class,
            lives: starting_lives(class),
            destroyed: false,
            visual: VisualState::default(),
        }
    }

    pub fn is_alive(&self) -> bool {
        !self.destroyed
    }

    /// Whether the unit has taken damage without being destroyed.
    pub fn is_worn(&self) -> bool {
        self.lives < starting_lives(self.class)
    }

    pub fn translate(&mut self, delta: IVec2) {
        self.position += delta;
    }
}

/// Starting lives for a unit class.
pub fn starting_lives(class: UnitClass) -> u32 {
    match class {
        UnitClass::A => CLASS_A_LIVES,
        UnitClass::B => CLASS_B_LIVES,
        UnitClass::C => CLASS_C_LIVES,
    }
}

/// Unit class for a row, by its proportional depth in the formation.
/// The top rows are class C, the band below class B, the rest class A.
pub fn class_for_row(row: u32, rows: u32) -> UnitClass {
    let depth = row as f64 / rows.max(1) as f64;
    if depth < crate::constants::PROPORTION_C {
        UnitClass::C
    } else if depth < crate::constants::PROPORTION_C + crate::constants::PROPORTION_B {
        UnitClass::B
    } else {
        UnitClass::A
    }
}
