#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Frame orchestrator that sequences every system once per host frame.
//!
//! A [`Simulation`] owns the world and one instance of each system. Hosts call
//! [`Simulation::start_run`] once, then [`Simulation::step`] on every frame with
//! the current timestamp and controls. When the player levels up, stepping
//! pauses until the host answers the offer through
//! [`Simulation::choose_upgrade`]. After the game-over event the simulation
//! ignores further steps until a new run is started.

use std::time::Duration;

use horde_core::{Command, Difficulty, Event, FrameInput, RunSummary, UpgradeId, UpgradeOffer};
use horde_system_combat::Combat;
use horde_system_movement::Movement;
use horde_system_progression::{is_defeated, Progression};
use horde_system_spawning::{self as spawning, Spawning};
use horde_system_weapons::{self as weapons, Arsenal};
use horde_world::{self as world, query, World, WorldConfig};
use rand::{rngs::OsRng, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace};

mod clock;
mod config;
mod error;
mod offer;

pub use clock::FrameClock;
pub use config::SimulationConfig;
pub use error::SimulationError;

/// Lifecycle phase of the simulation.
#[derive(Clone, Debug, PartialEq)]
pub enum Phase {
    /// No run has been started yet.
    Idle,
    /// Frames advance the run.
    Playing,
    /// Waiting for the host to pick one of the offered upgrades.
    AwaitingUpgrade(UpgradeOffer),
    /// The player died; the run is over.
    GameOver(RunSummary),
}

/// Owns the world and every system of a run.
#[derive(Debug)]
pub struct Simulation {
    world: World,
    spawning: Spawning,
    arsenal: Arsenal,
    movement: Movement,
    combat: Combat,
    progression: Progression,
    offer_rng: ChaCha8Rng,
    stats_interval: u64,
    phase: Phase,
    pending_level_ups: u32,
    carried: Vec<Event>,
}

impl Simulation {
    /// Creates an idle simulation from the provided configuration.
    #[must_use]
    pub fn new(config: SimulationConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| OsRng.gen());
        debug!(seed, "simulation created");
        let viewport = config.viewport();
        Self {
            world: World::new(WorldConfig::new(
                config.world_width,
                config.world_height,
                seed,
            )),
            spawning: Spawning::new(spawning::Config::new(viewport, seed.wrapping_add(1))),
            arsenal: Arsenal::new(weapons::Config::new(viewport, seed.wrapping_add(2))),
            movement: Movement::new(),
            combat: Combat::new(),
            progression: Progression::new(),
            offer_rng: ChaCha8Rng::seed_from_u64(seed.wrapping_add(3)),
            stats_interval: config.stats_interval_frames.max(1),
            phase: Phase::Idle,
            pending_level_ups: 0,
            carried: Vec::new(),
        }
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Read-only access to the simulated world.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access to the world for scripted setups.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Starts a fresh run at host timestamp `now`, discarding any previous run.
    pub fn start_run(&mut self, difficulty: Difficulty, now: Duration) -> Vec<Event> {
        let mut events = Vec::new();
        world::apply(
            &mut self.world,
            Command::StartRun {
                difficulty,
                started_at: now,
            },
            &mut events,
        );
        events.push(Event::StatsUpdated {
            stats: query::stats(&self.world),
        });
        self.phase = Phase::Playing;
        self.pending_level_ups = 0;
        self.carried = events.clone();
        events
    }

    /// Advances the run by one frame at host timestamp `now`.
    ///
    /// Returns every event produced during the frame. Outside of
    /// [`Phase::Playing`] the call does nothing and returns no events.
    pub fn step(&mut self, now: Duration, input: &FrameInput) -> Vec<Event> {
        if self.phase != Phase::Playing {
            return Vec::new();
        }
        let carried = std::mem::take(&mut self.carried);
        let mut events = Vec::new();
        let mut commands = Vec::new();

        {
            let mut parts = self.world.parts_mut();
            parts.run.begin_frame(now);
            self.progression.regenerate(&carried, &mut parts);
            self.movement.steer(input, &mut parts);
        }

        self.arsenal
            .handle(&carried, input, &self.world, &mut commands);
        self.spawning.handle(&carried, &self.world, &mut commands);
        for command in commands.drain(..) {
            world::apply(&mut self.world, command, &mut events);
        }

        {
            let mut parts = self.world.parts_mut();
            self.movement.integrate(&mut parts);
            self.combat.resolve(&mut parts, &mut events);
            self.progression.collect_experience(&mut parts, &mut events);
            self.progression.contact_damage(&mut parts, &mut events);
        }

        let run = query::run(&self.world);
        let frame = run.frame();
        if frame % self.stats_interval == 0 {
            events.push(Event::StatsUpdated {
                stats: query::stats(&self.world),
            });
        }
        trace!(
            frame,
            zombies = query::zombies(&self.world).len(),
            bullets = query::bullets(&self.world).len(),
            "frame simulated"
        );

        if is_defeated(query::player(&self.world)) {
            let summary = query::summary(&self.world);
            info!(
                score = summary.score,
                kills = summary.kills,
                wave = summary.wave,
                level = summary.level,
                "game over"
            );
            self.phase = Phase::GameOver(summary.clone());
            events.push(Event::GameOver { summary });
            return events;
        }

        let level_ups = events
            .iter()
            .filter(|event| matches!(event, Event::LevelUp { .. }))
            .count();
        self.pending_level_ups += u32::try_from(level_ups).unwrap_or(u32::MAX);
        self.offer_next(&mut events);
        events
    }

    /// Applies the chosen upgrade from the pending offer and resumes or re-offers.
    pub fn choose_upgrade(&mut self, upgrade: UpgradeId) -> Result<Vec<Event>, SimulationError> {
        let Phase::AwaitingUpgrade(offer) = &self.phase else {
            return Err(SimulationError::NoOfferPending);
        };
        if !offer.contains(upgrade) {
            return Err(SimulationError::NotOffered(upgrade));
        }

        let mut events = Vec::new();
        world::apply(&mut self.world, Command::ApplyUpgrade { upgrade }, &mut events);
        self.pending_level_ups = self.pending_level_ups.saturating_sub(1);
        self.phase = Phase::Playing;
        self.offer_next(&mut events);
        Ok(events)
    }

    fn offer_next(&mut self, events: &mut Vec<Event>) {
        if self.pending_level_ups == 0 {
            return;
        }
        let offer = offer::draw(query::run(&self.world).inventory(), &mut self.offer_rng);
        if offer.is_empty() {
            debug!(
                skipped = self.pending_level_ups,
                "every upgrade evolved; level-ups acknowledged"
            );
            self.pending_level_ups = 0;
            return;
        }
        self.phase = Phase::AwaitingUpgrade(offer.clone());
        events.push(Event::UpgradeOffered { offer });
    }
}
