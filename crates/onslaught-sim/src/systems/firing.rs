//! Firing system: shooter selection, cooldown gating, and pattern
//! emission.

use glam::IVec2;
use rand::Rng;

use onslaught_core::constants::{HEAVY_PATTERN_MAX, PROJECTILE_SPEED, SPREAD_PATTERN_MAX};
use onslaught_core::enums::{FirePattern, ProjectileHeading};
use onslaught_core::events::AudioEvent;
use onslaught_core::types::ProjectileRequest;

use crate::cooldown::Cooldown;
use crate::grid::FormationGrid;
use crate::roster::ShooterRoster;
use crate::traits::ProjectileSink;

/// Attempt one firing action. No-op on an empty roster or an
/// unfinished cooldown; a successful fire resets the cooldown and
/// emits one pattern of projectile requests into the sink.
pub fn run<S, R>(
    grid: &FormationGrid,
    roster: &ShooterRoster,
    cooldown: &mut Cooldown,
    rng: &mut R,
    sink: &mut S,
    audio: &mut Vec<AudioEvent>,
) where
    S: ProjectileSink + ?Sized,
    R: Rng,
{
    let Some(shooter_id) = roster.pick(rng) else {
        return;
    };
    if !cooldown.finished() {
        return;
    }
    let Some(shooter) = grid.unit(shooter_id) else {
        return;
    };
    cooldown.reset(rng);

    let muzzle = IVec2::new(
        shooter.position.x + grid.unit_width() / 2,
        shooter.position.y,
    );
    let pattern = if grid.is_sole_survivor() {
        FirePattern::Omni
    } else {
        select_pattern(pattern_roll(rng))
    };
    audio.push(AudioEvent::Shot { pattern });
    log::debug!("unit {:?} firing {:?}", shooter_id, pattern);
    emit(pattern, muzzle, sink);
}

/// Uniform draw over [0, 1] rounded to one decimal.
pub fn pattern_roll<R: Rng>(rng: &mut R) -> f64 {
    (rng.gen::<f64>() * 10.0).round() / 10.0
}

/// Pattern for a roll: heavy up to and including 0.4, spread strictly
/// below 0.7, single otherwise.
pub fn select_pattern(roll: f64) -> FirePattern {
    if roll <= HEAVY_PATTERN_MAX {
        FirePattern::Heavy
    } else if roll < SPREAD_PATTERN_MAX {
        FirePattern::Spread
    } else {
        FirePattern::Single
    }
}

fn emit<S: ProjectileSink + ?Sized>(pattern: FirePattern, muzzle: IVec2, sink: &mut S) {
    let base = PROJECTILE_SPEED;
    match pattern {
        FirePattern::Single => {
            sink.push(request(muzzle, base, ProjectileHeading::Straight));
        }
        FirePattern::Heavy => {
            sink.push(request(muzzle, base, ProjectileHeading::Straight));
            sink.push(request(muzzle, base * 2, ProjectileHeading::Straight));
        }
        FirePattern::Spread => {
            sink.push(request(muzzle, base, ProjectileHeading::SlantLeft));
            sink.push(request(muzzle, base, ProjectileHeading::SlantRight));
        }
        FirePattern::Omni => {
            for heading in [
                ProjectileHeading::Straight,
                ProjectileHeading::SlantLeft,
                ProjectileHeading::SlantRight,
            ] {
                sink.push(request(muzzle, base, heading));
                sink.push(request(muzzle, base * 2, heading));
            }
        }
    }
}

fn request(position: IVec2, speed: i32, heading: ProjectileHeading) -> ProjectileRequest {
    ProjectileRequest {
        position,
        speed,
        heading,
    }
}
