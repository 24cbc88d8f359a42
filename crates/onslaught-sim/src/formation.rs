//! The formation engine — ties the grid, roster, motion state, and
//! cooldown together behind the public per-tick API.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use onslaught_core::config::FormationConfig;
use onslaught_core::enums::Direction;
use onslaught_core::events::AudioEvent;
use onslaught_core::state::{FormationSnapshot, UnitView};
use onslaught_core::types::{Playfield, UnitId};
use onslaught_core::unit::Unit;

use onslaught_motion::fsm::MotionState;
use onslaught_motion::pacing;

use crate::cooldown::Cooldown;
use crate::grid::FormationGrid;
use crate::roster::ShooterRoster;
use crate::systems;
use crate::traits::{ProjectileSink, UnitRenderer};

/// A swarm of enemy units moving as one body. One `update` per frame
/// tick; `fire` is invoked separately, in whatever order the caller
/// prefers within a frame. Single-threaded by design.
pub struct Formation {
    config: FormationConfig,
    grid: FormationGrid,
    motion: MotionState,
    roster: ShooterRoster,
    /// Created lazily on the first update, lives for the formation's
    /// lifetime.
    cooldown: Option<Cooldown>,
    playfield: Option<Playfield>,
    rng: ChaCha8Rng,
    audio_events: Vec<AudioEvent>,
}

impl Formation {
    pub fn new(config: FormationConfig) -> Self {
        log::info!(
            "initializing {}x{} formation at ({},{})",
            config.formation_width,
            config.formation_height,
            config.initial_position.x,
            config.initial_position.y
        );

        let grid = FormationGrid::new(&config);
        let roster = ShooterRoster::from_grid(&grid);
        let motion = MotionState {
            ticks_per_move: pacing::ticks_per_move(
                grid.population(),
                grid.capacity(),
                config.base_speed,
            ),
            ..MotionState::default()
        };
        let rng = ChaCha8Rng::seed_from_u64(config.seed);

        Self {
            config,
            grid,
            motion,
            roster,
            cooldown: None,
            playfield: None,
            rng,
            audio_events: Vec::new(),
        }
    }

    /// Supply the playfield bounds used for boundary checks. Until
    /// this is called, movement is skipped.
    pub fn attach(&mut self, playfield: Playfield) {
        self.playfield = Some(playfield);
    }

    /// Advance the simulation by one tick: cooldown, grid cleanup,
    /// then motion and the visual refresh on move steps.
    pub fn update(&mut self) {
        if self.cooldown.is_none() {
            let mut cooldown =
                Cooldown::new(self.config.shot_interval_ticks, self.config.shot_variance);
            cooldown.reset(&mut self.rng);
            self.cooldown = Some(cooldown);
        }
        if let Some(cooldown) = self.cooldown.as_mut() {
            cooldown.tick();
        }

        self.grid.cleanup();

        let Some(playfield) = self.playfield else {
            return;
        };
        let moved = systems::motion::run(
            &mut self.grid,
            &mut self.motion,
            &self.config,
            &playfield,
            &mut self.rng,
        );
        if moved {
            systems::visual::run(&mut self.grid, &mut self.rng);
        }
    }

    /// Hand every live unit to the renderer, in column order.
    pub fn draw(&self, renderer: &mut impl UnitRenderer) {
        for unit in self.grid.live_units() {
            renderer.draw_unit(unit);
        }
    }

    /// Attempt one firing action into the given projectile sink.
    /// No-op until the first update has created the cooldown.
    pub fn fire(&mut self, sink: &mut impl ProjectileSink) {
        let Some(cooldown) = self.cooldown.as_mut() else {
            return;
        };
        systems::firing::run(
            &self.grid,
            &self.roster,
            cooldown,
            &mut self.rng,
            sink,
            &mut self.audio_events,
        );
    }

    /// Destroy a unit. No-op if the id no longer resolves.
    pub fn destroy(&mut self, unit: UnitId) {
        systems::destruction::destroy(
            &mut self.grid,
            &mut self.roster,
            unit,
            &mut self.audio_events,
        );
    }

    /// Take one life from a unit, destroying it when none remain.
    pub fn damage(&mut self, unit: UnitId) {
        systems::destruction::damage(
            &mut self.grid,
            &mut self.roster,
            unit,
            &mut self.audio_events,
        );
    }

    /// True when every unit has been destroyed.
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// True when exactly one unit remains.
    pub fn is_sole_survivor(&self) -> bool {
        self.grid.is_sole_survivor()
    }

    /// Live units in column order.
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.grid.live_units()
    }

    /// Whether the given (typically just-destroyed) unit sat at the
    /// top of its column.
    pub fn breaches_first_row(&self, unit: UnitId) -> bool {
        self.grid.breaches_first_row(unit)
    }

    /// Drain pending audio notifications for the audio collaborator.
    pub fn take_audio_events(&mut self) -> Vec<AudioEvent> {
        std::mem::take(&mut self.audio_events)
    }

    /// Serializable view of the current formation state.
    pub fn snapshot(&self) -> FormationSnapshot {
        FormationSnapshot {
            direction: self.motion.direction,
            population: self.grid.population(),
            origin: self.grid.origin(),
            width: self.grid.width(),
            height: self.grid.height(),
            units: self
                .grid
                .live_units()
                .map(|unit| UnitView {
                    id: unit.id,
                    position: unit.position,
                    class: unit.class,
                    lives: unit.lives,
                    visual: unit.visual,
                })
                .collect(),
        }
    }

    pub fn population(&self) -> u32 {
        self.grid.population()
    }

    /// Current ticks-between-moves value from the pacing law.
    pub fn ticks_per_move(&self) -> i32 {
        self.motion.ticks_per_move
    }

    pub fn direction(&self) -> Direction {
        self.motion.direction
    }

    /// Read-only grid access for collaborators needing geometry.
    pub fn grid(&self) -> &FormationGrid {
        &self.grid
    }

    #[cfg(test)]
    pub(crate) fn roster(&self) -> &ShooterRoster {
        &self.roster
    }
}
