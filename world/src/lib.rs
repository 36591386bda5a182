#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for the Horde survival simulation.

use horde_core::{resolver, Command, Event, Rect, Vec2, WORLD_HEIGHT, WORLD_WIDTH};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

pub mod run;
pub mod store;

pub use run::{KillOutcome, RunState};
pub use store::{
    nearest, Bullet, EntityStore, Minion, Particle, Player, XpOrb, Zombie, XP_ORB_RADIUS,
};

/// Angle added to an idle minion each time it finds nothing to shoot.
const IDLE_SPIN: f32 = 0.1;

/// Parameters required to construct a world.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldConfig {
    size: Vec2,
    seed: u64,
}

impl WorldConfig {
    /// Creates a configuration for a world of the given size seeded with `seed`.
    #[must_use]
    pub const fn new(width: f32, height: f32, seed: u64) -> Self {
        Self {
            size: Vec2::new(width, height),
            seed,
        }
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self::new(WORLD_WIDTH, WORLD_HEIGHT, 0)
    }
}

/// Represents the authoritative simulation world.
#[derive(Debug)]
pub struct World {
    bounds: Rect,
    store: EntityStore,
    run: RunState,
    rng: ChaCha8Rng,
}

/// Disjoint mutable borrows of the world handed to integration systems.
#[derive(Debug)]
pub struct WorldParts<'a> {
    /// Entity collections.
    pub store: &'a mut EntityStore,
    /// Run counters and inventory.
    pub run: &'a mut RunState,
    /// Shared random source.
    pub rng: &'a mut ChaCha8Rng,
    /// World rectangle.
    pub bounds: Rect,
}

impl World {
    /// Creates a new world with the player waiting at its centre.
    #[must_use]
    pub fn new(config: WorldConfig) -> Self {
        let bounds = Rect::new(Vec2::ZERO, config.size);
        Self {
            store: EntityStore::new(bounds.origin + bounds.size * 0.5),
            run: RunState::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            bounds,
        }
    }

    /// Splits the world into independently borrowable parts.
    pub fn parts_mut(&mut self) -> WorldParts<'_> {
        WorldParts {
            store: &mut self.store,
            run: &mut self.run,
            rng: &mut self.rng,
            bounds: self.bounds,
        }
    }

    fn centre(&self) -> Vec2 {
        self.bounds.origin + self.bounds.size * 0.5
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(WorldConfig::default())
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::StartRun {
            difficulty,
            started_at,
        } => {
            world.store = EntityStore::new(world.centre());
            world.run = RunState::new(difficulty, started_at);
            debug!(%difficulty, "run started");
            out_events.push(Event::RunStarted { difficulty });
        }
        Command::ApplyUpgrade { upgrade } => {
            let level = match world.run.inventory_mut().increment(upgrade) {
                Ok(level) => level,
                Err(error) => {
                    warn!(%error, "upgrade ignored");
                    return;
                }
            };
            let inventory = *world.run.inventory();
            let player = &mut world.store.player;
            let max_hp = resolver::max_hp(&inventory);
            if max_hp > player.max_hp {
                player.hp += max_hp - player.max_hp;
            }
            player.max_hp = max_hp;
            world.store.sync_minions(&inventory);
            debug!(upgrade = upgrade.key(), level, "upgrade applied");
            out_events.push(Event::UpgradeApplied { upgrade, level });
        }
        Command::SpawnZombie {
            kind,
            position,
            max_hp,
            speed,
        } => {
            let zombie = world.store.spawn_zombie(kind, position, max_hp, speed);
            out_events.push(Event::ZombieSpawned { zombie, kind });
        }
        Command::SpawnBullet { bullet } => {
            world.store.bullets.push(Bullet::from(bullet));
        }
        Command::ReplaceOrbitals { orbitals } => {
            world.store.replace_orbitals(orbitals);
        }
        Command::StrikeZombie { zombie, damage } => {
            if let Some(target) = world.store.zombie_mut(zombie) {
                target.hp -= damage;
            }
        }
        Command::SpawnBurst { burst } => {
            world.store.burst(&mut world.rng, burst);
        }
        Command::RetargetMinion { minion, target } => {
            if let Some(entry) = world.store.minions.iter_mut().find(|m| m.id == minion) {
                entry.target = target;
            }
        }
        Command::MinionFired { minion, angle, at } => {
            if let Some(entry) = world.store.minions.iter_mut().find(|m| m.id == minion) {
                entry.angle = angle;
                entry.last_fire = Some(at);
            }
        }
        Command::IdleMinion { minion } => {
            if let Some(entry) = world.store.minions.iter_mut().find(|m| m.id == minion) {
                entry.target = None;
                entry.angle += IDLE_SPIN;
            }
        }
        Command::EmitCue { cue } => {
            out_events.push(Event::Cue { cue });
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use horde_core::{resolver, RunSummary, StatsSnapshot, Vec2, ZombieId};

    use super::{Bullet, Minion, Particle, Player, Rect, RunState, World, XpOrb, Zombie};

    /// Rectangle of the simulated world.
    #[must_use]
    pub fn bounds(world: &World) -> Rect {
        world.bounds
    }

    /// The player of the current run.
    #[must_use]
    pub fn player(world: &World) -> &Player {
        &world.store.player
    }

    /// Live zombies in spawn order.
    #[must_use]
    pub fn zombies(world: &World) -> &[Zombie] {
        &world.store.zombies
    }

    /// Looks up a zombie by identifier; stale identifiers yield `None`.
    #[must_use]
    pub fn zombie(world: &World, id: ZombieId) -> Option<&Zombie> {
        world.store.zombie(id)
    }

    /// Nearest zombie strictly closer than `max_distance` to `point`.
    #[must_use]
    pub fn nearest_zombie(world: &World, point: Vec2, max_distance: f32) -> Option<&Zombie> {
        world.store.nearest_zombie(point, max_distance)
    }

    /// Live projectiles.
    #[must_use]
    pub fn bullets(world: &World) -> &[Bullet] {
        &world.store.bullets
    }

    /// Companion minions.
    #[must_use]
    pub fn minions(world: &World) -> &[Minion] {
        &world.store.minions
    }

    /// Uncollected experience orbs.
    #[must_use]
    pub fn xp_orbs(world: &World) -> &[XpOrb] {
        &world.store.xp_orbs
    }

    /// Cosmetic particles.
    #[must_use]
    pub fn particles(world: &World) -> &[Particle] {
        &world.store.particles
    }

    /// Run counters and inventory.
    #[must_use]
    pub fn run(world: &World) -> &RunState {
        &world.run
    }

    /// Visible window of the given size, centred on the player and clamped to the world.
    #[must_use]
    pub fn camera(world: &World, viewport: Vec2) -> Rect {
        let bounds = world.bounds;
        let max = (bounds.origin + bounds.size - viewport).max(bounds.origin);
        let origin = (world.store.player.position - viewport * 0.5).clamp(bounds.origin, max);
        Rect::new(origin, viewport)
    }

    /// Experience pull radius for the current inventory.
    #[must_use]
    pub fn magnet_radius(world: &World) -> f32 {
        resolver::magnet_radius(world.run.inventory())
    }

    /// Display snapshot of the player's progress.
    #[must_use]
    pub fn stats(world: &World) -> StatsSnapshot {
        let player = &world.store.player;
        StatsSnapshot {
            hp: player.hp.max(0.0),
            max_hp: player.max_hp,
            score: world.run.score(),
            wave: world.run.wave(),
            kills: world.run.kills(),
            xp: player.xp,
            next_level_xp: player.next_level_xp,
            level: player.level,
        }
    }

    /// Summary of the run as it stands.
    #[must_use]
    pub fn summary(world: &World) -> RunSummary {
        RunSummary {
            score: world.run.score(),
            kills: world.run.kills(),
            wave: world.run.wave(),
            time_survived: world.run.elapsed(),
            level: world.store.player.level,
            inventory: *world.run.inventory(),
            difficulty: world.run.difficulty(),
        }
    }
}
