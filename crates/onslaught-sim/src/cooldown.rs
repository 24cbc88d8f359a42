//! Tick-based firing cooldown with random variance.

use rand::Rng;

/// Timer gating how often the formation may fire. Each reset draws a
/// fresh duration in `base ± variance` ticks; `tick` counts it down
/// once per formation update.
pub struct Cooldown {
    base_ticks: u32,
    variance_ticks: u32,
    remaining: u32,
}

impl Cooldown {
    /// `variance` is a proportion of the base interval.
    pub fn new(base_ticks: u32, variance: f64) -> Self {
        Self {
            base_ticks,
            variance_ticks: (base_ticks as f64 * variance) as u32,
            remaining: 0,
        }
    }

    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        let variance = self.variance_ticks as i64;
        let offset = if variance > 0 {
            rng.gen_range(-variance..=variance)
        } else {
            0
        };
        self.remaining = (self.base_ticks as i64 + offset).max(0) as u32;
    }

    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn finished(&self) -> bool {
        self.remaining == 0
    }
}
