//! Formation engine for ONSLAUGHT.
//!
//! `Formation` owns the column grid, shooter roster, cooldown, and
//! RNG, runs the motion and visual systems once per tick, and exposes
//! the firing and destruction operations to the surrounding game.
//! Completely headless, enabling deterministic testing.

pub mod cooldown;
pub mod formation;
pub mod grid;
pub mod roster;
pub mod systems;
pub mod traits;

pub use formation::Formation;
pub use onslaught_core as core;

#[cfg(test)]
mod tests;
