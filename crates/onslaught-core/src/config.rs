//! Formation configuration supplied by the surrounding game.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Configuration for building a formation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormationConfig {
    /// Number of columns.
    pub formation_width: u32,
    /// Number of rows.
    pub formation_height: u32,
    /// Base interval between shots, in ticks.
    pub shot_interval_ticks: u32,
    /// Variance of the shot interval, as a proportion of the base.
    pub shot_variance: f64,
    /// Base movement speed fed to the population speed law
    /// (ticks between moves at full strength, before the floor).
    pub base_speed: i32,
    /// Initial top-left corner of the formation.
    pub initial_position: IVec2,
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for FormationConfig {
    fn default() -> Self {
        Self {
            formation_width: 5,
            formation_height: 4,
            shot_interval_ticks: 120,
            shot_variance: 0.2,
            base_speed: 60,
            initial_position: IVec2::new(20, 100),
            seed: 42,
        }
    }
}

impl FormationConfig {
    /// Total unit capacity of the configured formation.
    pub fn capacity(&self) -> u32 {
        self.formation_width * self.formation_height
    }
}
