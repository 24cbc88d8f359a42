//! Tests for the formation engine: construction, determinism, motion,
//! firing, destruction, and roster maintenance.

use glam::IVec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use onslaught_core::config::FormationConfig;
use onslaught_core::constants::*;
use onslaught_core::enums::*;
use onslaught_core::events::AudioEvent;
use onslaught_core::types::{Playfield, ProjectileRequest, UnitId};

use crate::cooldown::Cooldown;
use crate::formation::Formation;
use crate::grid::FormationGrid;
use crate::systems::firing::select_pattern;

fn playfield() -> Playfield {
    Playfield::new(448, 520)
}

/// Small, fast-moving config for motion tests: the pacing law floor
/// gives one move step every MINIMUM_SPEED_FLOOR ticks.
fn quick_config() -> FormationConfig {
    FormationConfig {
        base_speed: 0,
        ..FormationConfig::default()
    }
}

/// The §8 scenario formation: 2 columns x 3 rows, base speed 4.
fn two_by_three() -> FormationConfig {
    FormationConfig {
        formation_width: 2,
        formation_height: 3,
        base_speed: 4,
        shot_interval_ticks: 2,
        shot_variance: 0.0,
        ..FormationConfig::default()
    }
}

fn advance(formation: &mut Formation, ticks: u32) {
    for _ in 0..ticks {
        formation.update();
    }
}

// ---- Construction ----

#[test]
fn test_construction() {
    let formation = Formation::new(FormationConfig::default());
    assert_eq!(formation.population(), 20);
    assert!(!formation.is_empty());
    assert!(!formation.is_sole_survivor());
    assert_eq!(formation.units().count(), 20);
    assert_eq!(formation.direction(), Direction::Right);

    let snap = formation.snapshot();
    assert_eq!(snap.origin, IVec2::new(20, 100));
    assert_eq!(snap.width, 4 * SEPARATION_DISTANCE + UNIT_WIDTH);
    assert_eq!(snap.height, 3 * SEPARATION_DISTANCE + UNIT_HEIGHT);

    // floor((20/20)^2 * 60) + floor
    assert_eq!(formation.ticks_per_move(), 60 + MINIMUM_SPEED_FLOOR);
}

#[test]
fn test_units_iterate_in_column_order() {
    let formation = Formation::new(FormationConfig::default());
    let ids: Vec<u32> = formation.units().map(|unit| unit.id.0).collect();
    assert_eq!(&ids[..5], &[0, 1, 2, 3, 4]);
    assert_eq!(ids.len(), 20);
}

#[test]
fn test_initial_roster_is_bottom_row() {
    let formation = Formation::new(FormationConfig::default());
    let entries: Vec<u32> = formation.roster().entries().iter().map(|id| id.0).collect();
    assert_eq!(entries, vec![3, 7, 11, 15, 19]);
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let config = FormationConfig {
        base_speed: 0,
        shot_interval_ticks: 4,
        seed: 12345,
        ..FormationConfig::default()
    };
    let mut formation_a = Formation::new(config.clone());
    let mut formation_b = Formation::new(config);
    formation_a.attach(playfield());
    formation_b.attach(playfield());

    let mut shots_a: Vec<ProjectileRequest> = Vec::new();
    let mut shots_b: Vec<ProjectileRequest> = Vec::new();

    for tick in 0..300 {
        if tick == 50 {
            formation_a.destroy(UnitId(3));
            formation_b.destroy(UnitId(3));
        }
        formation_a.update();
        formation_b.update();
        formation_a.fire(&mut shots_a);
        formation_b.fire(&mut shots_b);

        let json_a = serde_json::to_string(&formation_a.snapshot()).unwrap();
        let json_b = serde_json::to_string(&formation_b.snapshot()).unwrap();
        assert_eq!(json_a, json_b, "snapshots diverged with same seed");
    }
    assert_eq!(shots_a, shots_b, "projectiles diverged with same seed");
}

#[test]
fn test_determinism_different_seeds() {
    let mut formation_a = Formation::new(FormationConfig {
        seed: 111,
        base_speed: 0,
        ..FormationConfig::default()
    });
    let mut formation_b = Formation::new(FormationConfig {
        seed: 222,
        base_speed: 0,
        ..FormationConfig::default()
    });
    formation_a.attach(playfield());
    formation_b.attach(playfield());

    // The per-unit descent policies draw from the RNG on every move
    // step, so different seeds drift apart within a few steps.
    let mut diverged = false;
    for _ in 0..300 {
        formation_a.update();
        formation_b.update();
        let json_a = serde_json::to_string(&formation_a.snapshot()).unwrap();
        let json_b = serde_json::to_string(&formation_b.snapshot()).unwrap();
        if json_a != json_b {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "different seeds should produce divergent output");
}

// ---- Population & destruction ----

#[test]
fn test_population_tracks_destroys() {
    let mut formation = Formation::new(FormationConfig::default());
    let ids: Vec<UnitId> = formation.units().map(|unit| unit.id).collect();

    let mut last = formation.population();
    for id in ids {
        formation.destroy(id);
        let population = formation.population();
        assert!(population <= last, "population is non-increasing");
        assert_eq!(
            population as usize,
            formation.units().count(),
            "population equals the live unit count after every destroy"
        );
        last = population;
    }
    assert!(formation.is_empty());
}

#[test]
fn test_double_destroy_is_noop() {
    let mut formation = Formation::new(FormationConfig::default());
    formation.destroy(UnitId(3));
    assert_eq!(formation.population(), 19);
    formation.destroy(UnitId(3));
    assert_eq!(formation.population(), 19, "second destroy must not recount");
}

#[test]
fn test_destroy_unknown_unit_is_noop() {
    let mut formation = Formation::new(FormationConfig::default());
    formation.destroy(UnitId(999));
    assert_eq!(formation.population(), 20);
    assert!(formation.take_audio_events().is_empty());
}

#[test]
fn test_destroy_emits_explosion_event() {
    let mut formation = Formation::new(FormationConfig::default());
    formation.destroy(UnitId(0));
    let events = formation.take_audio_events();
    assert!(matches!(
        events.as_slice(),
        [AudioEvent::Explosion {
            unit: UnitId(0),
            class: UnitClass::C,
        }]
    ));
    assert!(formation.take_audio_events().is_empty(), "take drains");
}

#[test]
fn test_damage_wears_then_destroys() {
    let mut formation = Formation::new(quick_config());

    // Unit 0 is class C: two lives.
    formation.damage(UnitId(0));
    assert_eq!(formation.population(), 20, "damaged unit survives");
    assert!(formation.take_audio_events().is_empty());

    formation.attach(playfield());
    advance(&mut formation, MINIMUM_SPEED_FLOOR as u32);
    let snap = formation.snapshot();
    let worn = snap.units.iter().find(|unit| unit.id == UnitId(0)).unwrap();
    assert_eq!(worn.visual, VisualState::LowLife);
    assert_eq!(worn.lives, 1);

    formation.damage(UnitId(0));
    assert_eq!(formation.population(), 19);
    assert!(formation
        .take_audio_events()
        .iter()
        .any(|event| matches!(event, AudioEvent::Explosion { .. })));
}

// ---- Roster maintenance ----

#[test]
fn test_bottom_destroy_reassigns_upward() {
    let mut formation = Formation::new(FormationConfig::default());

    formation.destroy(UnitId(3));
    assert_eq!(formation.roster().entries()[0], UnitId(2));
    formation.destroy(UnitId(2));
    assert_eq!(formation.roster().entries()[0], UnitId(1));
    formation.destroy(UnitId(1));
    formation.destroy(UnitId(0));
    assert_eq!(formation.roster().len(), 4, "exhausted column loses its slot");

    // The emptied column is pruned on the next cleanup.
    formation.update();
    let snap = formation.snapshot();
    assert_eq!(snap.origin, IVec2::new(60, 100));
    assert_eq!(snap.width, 3 * SEPARATION_DISTANCE + UNIT_WIDTH);
    assert_eq!(formation.grid().column_count(), 4);
}

#[test]
fn test_roster_invariants_after_destroys() {
    let mut formation = Formation::new(FormationConfig::default());
    for id in [3, 2, 7, 19, 18, 17, 16] {
        formation.destroy(UnitId(id));
    }

    let surviving_columns = formation
        .grid()
        .columns()
        .iter()
        .filter(|column| column.iter().any(|unit| unit.is_alive()))
        .count();
    assert!(formation.roster().len() <= surviving_columns);
    assert_eq!(formation.roster().len(), 4);
    for &entry in formation.roster().entries() {
        let unit = formation.grid().unit(entry).unwrap();
        assert!(unit.is_alive(), "roster entries are never destroyed units");
    }
}

#[test]
fn test_bottom_row_destroyed_reassigns_and_shrinks_height() {
    let mut formation = Formation::new(FormationConfig::default());
    for id in [3, 7, 11, 15, 19] {
        formation.destroy(UnitId(id));
    }
    let entries: Vec<u32> = formation.roster().entries().iter().map(|id| id.0).collect();
    assert_eq!(entries, vec![2, 6, 10, 14, 18]);

    formation.update();
    let snap = formation.snapshot();
    assert_eq!(snap.height, 2 * SEPARATION_DISTANCE + UNIT_HEIGHT);
    assert_eq!(snap.width, 4 * SEPARATION_DISTANCE + UNIT_WIDTH);
    assert_eq!(snap.population, 15);
}

// ---- First-row breach ----

#[test]
fn test_first_row_breach() {
    let mut formation = Formation::new(FormationConfig::default());
    formation.destroy(UnitId(0));
    assert!(formation.breaches_first_row(UnitId(0)));
    formation.destroy(UnitId(3));
    assert!(!formation.breaches_first_row(UnitId(3)));
    assert!(!formation.breaches_first_row(UnitId(999)));
}

// ---- Geometry ----

#[test]
fn test_cleanup_idempotent() {
    let config = FormationConfig::default();
    let mut grid = FormationGrid::new(&config);
    if let Some(unit) = grid.unit_mut(UnitId(3)) {
        unit.destroyed = true;
    }
    grid.cleanup();
    let first = (grid.origin(), grid.width(), grid.height());
    grid.cleanup();
    let second = (grid.origin(), grid.width(), grid.height());
    assert_eq!(first, second, "repeated cleanup must not change geometry");
}

#[test]
fn test_empty_grid_collapses_without_failure() {
    let mut formation = Formation::new(two_by_three());
    let ids: Vec<UnitId> = formation.units().map(|unit| unit.id).collect();
    for id in ids {
        formation.destroy(id);
    }
    assert!(formation.is_empty());

    formation.attach(playfield());
    formation.update();
    formation.update();
    let snap = formation.snapshot();
    assert_eq!(snap.width, 0);
    assert_eq!(snap.height, 0);
    assert_eq!(snap.population, 0);
    assert!(snap.units.is_empty());
}

// ---- Motion ----

#[test]
fn test_move_step_applies_bulk_and_jitter() {
    let mut formation = Formation::new(quick_config());
    formation.attach(playfield());
    let before = formation.snapshot();

    advance(&mut formation, MINIMUM_SPEED_FLOOR as u32);
    let after = formation.snapshot();

    assert_eq!(after.origin.x, before.origin.x + X_SPEED);
    assert_eq!(after.direction, Direction::Right);

    let mut bursts = 0;
    for unit_after in &after.units {
        let unit_before = before
            .units
            .iter()
            .find(|unit| unit.id == unit_after.id)
            .unwrap();
        assert_eq!(
            unit_after.position.x,
            unit_before.position.x + X_SPEED,
            "all units share the horizontal bulk move"
        );
        let dy = unit_after.position.y - unit_before.position.y;
        if dy == SETTLE_DRIFT {
            continue;
        }
        assert!(
            (Y_SPEED..Y_SPEED * 2).contains(&dy),
            "vertical offset {dy} is neither drift nor a lunge burst"
        );
        bursts += 1;
    }
    assert_eq!(bursts, 1, "exactly one bottom unit lunges per move step");
}

#[test]
fn test_right_edge_starts_descent() {
    let mut formation = Formation::new(quick_config());
    // 5 columns at 40 px spacing = 184 px wide; have the right margin
    // almost touching so the first move step senses the edge.
    formation.attach(Playfield::new(224, 520));
    advance(&mut formation, MINIMUM_SPEED_FLOOR as u32);
    assert_eq!(formation.direction(), Direction::Down);
}

#[test]
fn test_at_bottom_reverses_without_descent() {
    // A 2x1 formation already past the bottom margin ping-pongs
    // horizontally; at the bottom the vertical play stops entirely, so
    // the walk is fully deterministic.
    let config = FormationConfig {
        formation_width: 2,
        formation_height: 1,
        base_speed: 0,
        ..FormationConfig::default()
    };
    let mut formation = Formation::new(config);
    formation.attach(Playfield::new(120, 180));

    let start_y: Vec<i32> = formation.units().map(|unit| unit.position.y).collect();
    let mut directions = vec![formation.direction()];
    for _ in 0..200 {
        formation.update();
        if directions.last() != Some(&formation.direction()) {
            directions.push(formation.direction());
        }
    }

    assert!(
        !directions.contains(&Direction::Down),
        "no descent once the bottom is reached"
    );
    assert_eq!(&directions[..3], &[Direction::Right, Direction::Left, Direction::Right]);

    let end_y: Vec<i32> = formation.units().map(|unit| unit.position.y).collect();
    assert_eq!(start_y, end_y, "at the bottom, units only move sideways");
}

// ---- Visual state ----

#[test]
fn test_pulse_highlights_single_unit() {
    let mut formation = Formation::new(quick_config());
    formation.attach(playfield());
    advance(&mut formation, MINIMUM_SPEED_FLOOR as u32);

    let snap = formation.snapshot();
    let pulsed = snap
        .units
        .iter()
        .filter(|unit| unit.visual == VisualState::Pulse)
        .count();
    let normal = snap
        .units
        .iter()
        .filter(|unit| unit.visual == VisualState::Normal)
        .count();
    assert_eq!(pulsed, 1);
    assert_eq!(normal, snap.units.len() - 1);
}

#[test]
fn test_no_pulse_at_or_below_one_column_worth() {
    // 1x4 formation: population never exceeds one column's worth.
    let config = FormationConfig {
        formation_width: 1,
        formation_height: 4,
        base_speed: 0,
        ..FormationConfig::default()
    };
    let mut formation = Formation::new(config);
    formation.attach(playfield());
    advance(&mut formation, MINIMUM_SPEED_FLOOR as u32);

    let snap = formation.snapshot();
    assert!(snap
        .units
        .iter()
        .all(|unit| unit.visual == VisualState::Normal));
}

#[test]
fn test_sole_survivor_highlight() {
    let mut formation = Formation::new(two_by_three());
    for id in 0..5 {
        formation.destroy(UnitId(id));
    }
    assert!(formation.is_sole_survivor());

    formation.attach(playfield());
    advance(&mut formation, MINIMUM_SPEED_FLOOR as u32);

    let snap = formation.snapshot();
    assert_eq!(snap.units.len(), 1);
    assert_eq!(snap.units[0].visual, VisualState::SoleSurvivor);
}

// ---- Firing ----

#[test]
fn test_fire_before_first_update_is_noop() {
    let mut formation = Formation::new(two_by_three());
    let mut shots: Vec<ProjectileRequest> = Vec::new();
    formation.fire(&mut shots);
    assert!(shots.is_empty(), "no cooldown exists before the first update");
}

#[test]
fn test_fire_is_cooldown_gated() {
    let config = FormationConfig {
        shot_interval_ticks: 5,
        shot_variance: 0.0,
        ..FormationConfig::default()
    };
    let mut formation = Formation::new(config);
    let mut shots: Vec<ProjectileRequest> = Vec::new();

    formation.update();
    formation.fire(&mut shots);
    assert!(shots.is_empty(), "cooldown still running");

    advance(&mut formation, 4);
    formation.fire(&mut shots);
    assert!(!shots.is_empty(), "cooldown finished");
    assert!(shots.len() <= 2, "regular patterns emit one or two projectiles");
    assert!(formation
        .take_audio_events()
        .iter()
        .any(|event| matches!(event, AudioEvent::Shot { .. })));

    let fired = shots.len();
    formation.fire(&mut shots);
    assert_eq!(shots.len(), fired, "a successful fire resets the cooldown");
}

#[test]
fn test_fire_with_empty_roster_emits_nothing() {
    let mut formation = Formation::new(two_by_three());
    let ids: Vec<UnitId> = formation.units().map(|unit| unit.id).collect();
    for id in ids {
        formation.destroy(id);
    }
    let _ = formation.take_audio_events();

    advance(&mut formation, 10);
    let mut shots: Vec<ProjectileRequest> = Vec::new();
    formation.fire(&mut shots);
    assert!(shots.is_empty(), "an empty roster never emits");
    assert!(formation.take_audio_events().is_empty());
}

#[test]
fn test_sole_survivor_fires_omni_pattern() {
    let mut formation = Formation::new(two_by_three());
    assert_eq!(
        formation.ticks_per_move(),
        4 + MINIMUM_SPEED_FLOOR,
        "initial cadence is floor((6/6)^2 * 4) + floor"
    );

    for id in 0..5 {
        formation.destroy(UnitId(id));
    }
    assert!(formation.is_sole_survivor());

    // Run the cooldown down; no playfield is needed for firing.
    advance(&mut formation, 5);
    let mut shots: Vec<ProjectileRequest> = Vec::new();
    formation.fire(&mut shots);

    assert_eq!(shots.len(), 6, "omni pattern is three headings x two speeds");
    for heading in [
        ProjectileHeading::Straight,
        ProjectileHeading::SlantLeft,
        ProjectileHeading::SlantRight,
    ] {
        for speed in [PROJECTILE_SPEED, PROJECTILE_SPEED * 2] {
            assert!(
                shots
                    .iter()
                    .any(|shot| shot.heading == heading && shot.speed == speed),
                "missing {heading:?} at speed {speed}"
            );
        }
    }

    // Survivor is unit 5 at (60, 180); all shots leave its top center.
    let muzzle = IVec2::new(60 + UNIT_WIDTH / 2, 180);
    assert!(shots.iter().all(|shot| shot.position == muzzle));
}

#[test]
fn test_pattern_selection_boundaries() {
    assert_eq!(select_pattern(0.0), FirePattern::Heavy);
    assert_eq!(select_pattern(0.4), FirePattern::Heavy, "0.4 is heavy-inclusive");
    assert_eq!(select_pattern(0.5), FirePattern::Spread);
    assert_eq!(select_pattern(0.6), FirePattern::Spread);
    assert_eq!(select_pattern(0.7), FirePattern::Single, "0.7 is spread-exclusive");
    assert_eq!(select_pattern(1.0), FirePattern::Single);
}

// ---- Cooldown ----

#[test]
fn test_cooldown_without_variance() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut cooldown = Cooldown::new(3, 0.0);
    assert!(cooldown.finished(), "a fresh cooldown has nothing pending");

    cooldown.reset(&mut rng);
    assert!(!cooldown.finished());
    cooldown.tick();
    cooldown.tick();
    assert!(!cooldown.finished());
    cooldown.tick();
    assert!(cooldown.finished());
}

#[test]
fn test_cooldown_variance_bounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let mut cooldown = Cooldown::new(100, 0.2);
    for _ in 0..200 {
        cooldown.reset(&mut rng);
        let mut ticks = 0;
        while !cooldown.finished() {
            cooldown.tick();
            ticks += 1;
        }
        assert!(
            (80..=120).contains(&ticks),
            "duration {ticks} outside base +/- 20% variance"
        );
    }
}

// ---- Draw ----

#[test]
fn test_draw_visits_live_units_in_order() {
    struct Recorder {
        ids: Vec<u32>,
    }
    impl crate::traits::UnitRenderer for Recorder {
        fn draw_unit(&mut self, unit: &onslaught_core::unit::Unit) {
            self.ids.push(unit.id.0);
        }
    }

    let mut formation = Formation::new(FormationConfig::default());
    formation.destroy(UnitId(0));
    let mut recorder = Recorder { ids: Vec::new() };
    formation.draw(&mut recorder);
    assert_eq!(recorder.ids.len(), 19, "destroyed units are not drawn");
    assert_eq!(&recorder.ids[..4], &[1, 2, 3, 4]);
}
