//! Population-driven pacing law.

use onslaught_core::constants::MINIMUM_SPEED_FLOOR;

/// Ticks between move steps for the current population:
/// `floor((population / capacity)^2 * base_speed) + floor`.
///
/// The output shrinks as the swarm thins, so a depleted formation
/// moves more often. The floor keeps the cadence bounded below.
pub fn ticks_per_move(population: u32, capacity: u32, base_speed: i32) -> i32 {
    let remaining = population as f64 / capacity.max(1) as f64;
    (remaining.powi(2) * base_speed as f64) as i32 + MINIMUM_SPEED_FLOOR
}
