//! Simulation constants and tuning parameters.

// --- Formation layout ---

/// Distance between neighboring units, both axes (pixels).
pub const SEPARATION_DISTANCE: i32 = 40;

/// Width of one unit (pixels).
pub const UNIT_WIDTH: i32 = 24;

/// Height of one unit (pixels).
pub const UNIT_HEIGHT: i32 = 16;

/// Proportion of rows holding class C units, counted from the top.
pub const PROPORTION_C: f64 = 0.2;

/// Proportion of rows holding class B units, below the C rows.
pub const PROPORTION_B: f64 = 0.4;

// --- Lives ---

/// Starting lives for class A units.
pub const CLASS_A_LIVES: u32 = 1;

/// Starting lives for class B units.
pub const CLASS_B_LIVES: u32 = 1;

/// Starting lives for class C units.
pub const CLASS_C_LIVES: u32 = 2;

// --- Movement ---

/// Lateral displacement per move step (pixels).
pub const X_SPEED: i32 = 8;

/// Downward displacement per move step (pixels).
pub const Y_SPEED: i32 = 4;

/// Margin kept clear on both sides of the playfield (pixels).
pub const SIDE_MARGIN: i32 = 20;

/// Margin kept clear at the bottom of the playfield (pixels).
pub const BOTTOM_MARGIN: i32 = 80;

/// Vertical distance of one descent pass; direction reversals happen
/// only on exact multiples of this (pixels).
pub const DESCENT_DISTANCE: i32 = 20;

/// Floor added to the population speed law (ticks between moves).
pub const MINIMUM_SPEED_FLOOR: i32 = 10;

/// Vertical drift applied to non-lunging units on a move tick (pixels).
pub const SETTLE_DRIFT: i32 = 1;

/// Probability that the lunge targets a random column rather than the
/// last one.
pub const LUNGE_RANDOM_CHANCE: f64 = 0.7;

/// Upward jump of a sole survivor pressed against the bottom (pixels).
pub const SOLE_SURVIVOR_CLIMB: i32 = 30;

// --- Firing ---

/// Base projectile speed (pixels per projectile step).
pub const PROJECTILE_SPEED: i32 = 4;

/// Pattern roll at or below this fires the heavy pattern.
pub const HEAVY_PATTERN_MAX: f64 = 0.4;

/// Pattern roll strictly below this (and above the heavy cut) fires
/// the spread pattern.
pub const SPREAD_PATTERN_MAX: f64 = 0.7;
