//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Unit tier, fixed at creation. Determines the visual class and
/// starting lives; point values are the surrounding game's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitClass {
    /// Common unit, bottom rows.
    A,
    /// Mid-tier unit, middle rows.
    B,
    /// Rare unit, top rows. Takes two hits.
    C,
}

/// Direction the formation is moving in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward the right edge of the playfield.
    #[default]
    Right,
    /// Movement toward the left edge of the playfield.
    Left,
    /// Descent toward the bottom of the playfield.
    Down,
}

/// Presentation tag attached to each unit, recomputed every move tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisualState {
    #[default]
    Normal,
    /// Unit has lost lives and is one hit from destruction.
    LowLife,
    /// The single randomly pulsed unit this tick.
    Pulse,
    /// Highlight for the last unit standing.
    SoleSurvivor,
}

/// Heading of an emitted projectile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileHeading {
    /// Straight down.
    #[default]
    Straight,
    /// Angled down-left.
    SlantLeft,
    /// Angled down-right.
    SlantRight,
}

/// Shape of one firing action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirePattern {
    /// One straight-down projectile at base speed.
    Single,
    /// Two straight-down projectiles, base and double speed.
    Heavy,
    /// One projectile per slant heading, both at base speed.
    Spread,
    /// Sole-survivor barrage: all three headings at both speeds.
    Omni,
}
