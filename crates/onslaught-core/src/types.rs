//! Fundamental simulation types.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::enums::ProjectileHeading;

/// Stable handle to a unit, assigned at formation construction.
///
/// Ids outlive column pruning and destroyed-unit sweeps; operations
/// given an id that no longer resolves are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u32);

/// Playfield bounds the formation moves within (pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: i32,
    pub height: i32,
}

impl Playfield {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// A request for the surrounding game to spawn one enemy projectile.
///
/// The projectile's own motion and collision are external concerns;
/// this carries only the launch parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectileRequest {
    /// Launch position: shooter's horizontal center, top edge.
    pub position: IVec2,
    /// Downward speed in pixels per projectile step.
    pub speed: i32,
    pub heading: ProjectileHeading,
}
