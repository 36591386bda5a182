#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Spawning system responsible for emitting zombie spawn commands.
//!
//! Zombies appear in bursts on a ring just outside the visible area around the
//! player. The burst cadence, burst size and zombie toughness follow the run's
//! difficulty tier and wave, and the archetype of each zombie is drawn from a
//! wave-banded probability table.

use std::f32::consts::TAU;

use horde_core::{Command, Cooldown, Event, Rect, Vec2, ZombieKind};
use horde_world::{query, World};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::trace;

/// Distance beyond the half-viewport at which zombies appear.
const RING_MARGIN: f32 = 150.0;
/// Minimum distance between a spawn point and the world edge.
const EDGE_MARGIN: f32 = 50.0;

/// Configuration parameters required to construct the spawning system.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    viewport: Vec2,
    rng_seed: u64,
}

impl Config {
    /// Creates a new configuration for the provided viewport size and seed.
    #[must_use]
    pub const fn new(viewport: Vec2, rng_seed: u64) -> Self {
        Self { viewport, rng_seed }
    }
}

/// System that emits zombie spawn commands while a run is active.
#[derive(Debug)]
pub struct Spawning {
    ring_distance: f32,
    cooldown: Cooldown,
    rng: ChaCha8Rng,
}

impl Spawning {
    /// Creates a new spawning system using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            ring_distance: config.viewport.max_element() / 2.0 + RING_MARGIN,
            cooldown: Cooldown::new(),
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed),
        }
    }

    /// Consumes events and the current world to emit spawn commands.
    pub fn handle(&mut self, events: &[Event], world: &World, out: &mut Vec<Command>) {
        if events
            .iter()
            .any(|event| matches!(event, Event::RunStarted { .. }))
        {
            self.cooldown.reset();
        }

        let run = query::run(world);
        let params = run.params();
        let wave = run.wave();
        if !self.cooldown.try_trigger(run.now(), params.spawn_interval(wave)) {
            return;
        }

        let centre = query::player(world).position;
        let bounds = query::bounds(world);
        let batch = params.spawn_batch(wave);
        trace!(wave, batch, "spawning burst");
        for _ in 0..batch {
            let position = self.spawn_point(centre, bounds);
            let kind = choose_kind(wave, self.rng.gen());
            let stats = kind.stats();
            out.push(Command::SpawnZombie {
                kind,
                position,
                max_hp: params.enemy_hp(stats.hp, wave),
                speed: params.enemy_speed(stats.speed),
            });
        }
    }

    fn spawn_point(&mut self, centre: Vec2, bounds: Rect) -> Vec2 {
        let angle = self.rng.gen::<f32>() * TAU;
        let point = centre + Vec2::from_angle(angle) * self.ring_distance;
        bounds.clamp_inset(point, EDGE_MARGIN)
    }
}

/// Picks a zombie archetype for the wave from a uniform roll in `0.0..1.0`.
///
/// Each band checks its thresholds from the rarest archetype down and falls
/// back to [`ZombieKind::Normal`].
#[must_use]
pub fn choose_kind(wave: u32, roll: f32) -> ZombieKind {
    let band: &[(f32, ZombieKind)] = match wave {
        0..=2 => &[(0.9, ZombieKind::Fast)],
        3..=5 => &[(0.8, ZombieKind::Wolf), (0.7, ZombieKind::Fast)],
        6..=10 => &[
            (0.95, ZombieKind::Giant),
            (0.8, ZombieKind::Wolf),
            (0.7, ZombieKind::Parasite),
            (0.6, ZombieKind::Crawler),
        ],
        _ => &[
            (0.9, ZombieKind::Giant),
            (0.75, ZombieKind::Tank),
            (0.6, ZombieKind::Parasite),
            (0.4, ZombieKind::Wolf),
            (0.3, ZombieKind::Crawler),
        ],
    };
    band.iter()
        .find(|(threshold, _)| roll > *threshold)
        .map_or(ZombieKind::Normal, |(_, kind)| *kind)
}
