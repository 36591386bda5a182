#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Weapon system that turns the upgrade inventory into projectile commands.
//!
//! Every weapon family is an independently timed component sharing the
//! [`Weapon::try_fire`] contract. The [`Arsenal`] owns one component per family
//! and dispatches them in a fixed order each frame: primary gun, minions,
//! missile, lightning, mine, axe and finally the orbital ring.

use std::time::Duration;

use horde_core::{Command, Event, FrameInput, Inventory, Rect, Vec2};
use horde_world::{query, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

mod gun;
mod lightning;
mod minions;
mod ordnance;
mod orbitals;

pub use gun::Gun;
pub use lightning::Lightning;
pub use minions::Minions;
pub use ordnance::{Axe, Mine, Missile};
pub use orbitals::Orbitals;

/// Read-only inputs available to a weapon while it decides whether to fire.
#[derive(Clone, Copy, Debug)]
pub struct FireContext<'a> {
    /// World being simulated.
    pub world: &'a World,
    /// Controls reported for this frame.
    pub input: &'a FrameInput,
    /// Upgrade levels of the run.
    pub inventory: &'a Inventory,
    /// Visible window around the player.
    pub camera: Rect,
    /// Host timestamp of the frame.
    pub now: Duration,
}

/// Closed set of weapon components.
#[derive(Clone, Debug)]
pub enum Weapon {
    /// Manually aimed primary gun.
    Gun(Gun),
    /// Drone and dragon companions.
    Minions(Minions),
    /// Homing missile launcher.
    Missile(Missile),
    /// Random lightning strikes.
    Lightning(Lightning),
    /// Proximity mines.
    Mine(Mine),
    /// Returning axe.
    Axe(Axe),
    /// Orbiting energy ring.
    Orbitals(Orbitals),
}

impl Weapon {
    /// Emits the commands produced by this weapon for the current frame.
    pub fn try_fire(
        &mut self,
        context: &FireContext<'_>,
        rng: &mut ChaCha8Rng,
        out: &mut Vec<Command>,
    ) {
        match self {
            Weapon::Gun(gun) => gun.try_fire(context, rng, out),
            Weapon::Minions(minions) => minions.try_fire(context, rng, out),
            Weapon::Missile(missile) => missile.try_fire(context, rng, out),
            Weapon::Lightning(lightning) => lightning.try_fire(context, rng, out),
            Weapon::Mine(mine) => mine.try_fire(context, out),
            Weapon::Axe(axe) => axe.try_fire(context, out),
            Weapon::Orbitals(orbitals) => orbitals.try_fire(context, out),
        }
    }

    fn reset(&mut self) {
        match self {
            Weapon::Gun(gun) => gun.reset(),
            Weapon::Minions(_) => {}
            Weapon::Missile(missile) => missile.reset(),
            Weapon::Lightning(lightning) => lightning.reset(),
            Weapon::Mine(mine) => mine.reset(),
            Weapon::Axe(axe) => axe.reset(),
            Weapon::Orbitals(orbitals) => orbitals.reset(),
        }
    }
}

/// Configuration parameters required to construct the arsenal.
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

/// Owns every weapon component and fires them in a fixed order.
#[derive(Debug)]
pub struct Arsenal {
    viewport: Vec2,
    weapons: Vec<Weapon>,
    rng: ChaCha8Rng,
}

impl Arsenal {
    /// Creates an arsenal with every weapon ready to fire.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            viewport: config.viewport,
            weapons: vec![
                Weapon::Gun(Gun::default()),
                Weapon::Minions(Minions),
                Weapon::Missile(Missile::default()),
                Weapon::Lightning(Lightning::default()),
                Weapon::Mine(Mine::default()),
                Weapon::Axe(Axe::default()),
                Weapon::Orbitals(Orbitals::default()),
            ],
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed),
        }
    }

    /// Consumes events, controls and the current world to emit weapon commands.
    pub fn handle(
        &mut self,
        events: &[Event],
        input: &FrameInput,
        world: &World,
        out: &mut Vec<Command>,
    ) {
        if events
            .iter()
            .any(|event| matches!(event, Event::RunStarted { .. }))
        {
            for weapon in &mut self.weapons {
                weapon.reset();
            }
            debug!(weapons = self.weapons.len(), "arsenal re-armed");
        }

        let run = query::run(world);
        let context = FireContext {
            world,
            input,
            inventory: run.inventory(),
            camera: query::camera(world, self.viewport),
            now: run.now(),
        };
        for weapon in &mut self.weapons {
            weapon.try_fire(&context, &mut self.rng, out);
        }
    }
}
