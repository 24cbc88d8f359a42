//! Events emitted by the simulation for the surrounding game's audio
//! system. One-way notifications; the formation never waits on them.

use serde::{Deserialize, Serialize};

use crate::enums::{FirePattern, UnitClass};
use crate::types::UnitId;

/// Audio events for the frontend sound system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A unit fired.
    Shot { pattern: FirePattern },
    /// A unit was destroyed.
    Explosion { unit: UnitId, class: UnitClass },
}
