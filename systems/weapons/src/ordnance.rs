//! Periodic ordnance launched from the player: missiles, mines and axes.

use horde_core::{palette, resolver, BulletBehavior, BulletSpawn, Command, Cooldown, Vec2};
use horde_world::query;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::FireContext;

const MISSILE_RADIUS: f32 = 5.0;
const MISSILE_KNOCKBACK: f32 = 5.0;
const MINE_RADIUS: f32 = 6.0;
const AXE_PIERCING: u32 = 999;

/// Homing missile launcher.
#[derive(Clone, Debug, Default)]
pub struct Missile {
    cooldown: Cooldown,
}

impl Missile {
    pub(crate) fn try_fire(
        &mut self,
        context: &FireContext<'_>,
        rng: &mut ChaCha8Rng,
        out: &mut Vec<Command>,
    ) {
        let Some(volley) = resolver::missile(context.inventory) else {
            return;
        };
        if !self.cooldown.try_trigger(context.now, volley.interval) {
            return;
        }
        let origin = query::player(context.world).position;
        for _ in 0..volley.count {
            let velocity = Vec2::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5)
                * volley.launch_jitter;
            out.push(Command::SpawnBullet {
                bullet: BulletSpawn {
                    position: origin,
                    velocity,
                    radius: MISSILE_RADIUS,
                    damage: volley.damage,
                    color: palette::MISSILE,
                    piercing: Some(0),
                    lifetime: None,
                    knockback: Some(MISSILE_KNOCKBACK),
                    behavior: BulletBehavior::Homing { target: None },
                },
            });
        }
    }

    pub(crate) fn reset(&mut self) {
        self.cooldown.reset();
    }
}

/// Proximity mine layer.
#[derive(Clone, Debug, Default)]
pub struct Mine {
    cooldown: Cooldown,
}

impl Mine {
    pub(crate) fn try_fire(&mut self, context: &FireContext<'_>, out: &mut Vec<Command>) {
        let Some(layer) = resolver::mine(context.inventory) else {
            return;
        };
        if !self.cooldown.try_trigger(context.now, layer.interval) {
            return;
        }
        out.push(Command::SpawnBullet {
            bullet: BulletSpawn {
                position: query::player(context.world).position,
                velocity: Vec2::ZERO,
                radius: MINE_RADIUS,
                damage: layer.damage,
                color: palette::MINE,
                piercing: Some(1),
                lifetime: None,
                knockback: None,
                behavior: BulletBehavior::Mine,
            },
        });
    }

    pub(crate) fn reset(&mut self) {
        self.cooldown.reset();
    }
}

/// Returning axe thrown in the facing direction.
#[derive(Clone, Debug, Default)]
pub struct Axe {
    cooldown: Cooldown,
}

impl Axe {
    pub(crate) fn try_fire(&mut self, context: &FireContext<'_>, out: &mut Vec<Command>) {
        let Some(throw) = resolver::axe(context.inventory) else {
            return;
        };
        if !self.cooldown.try_trigger(context.now, throw.interval) {
            return;
        }
        let player = query::player(context.world);
        out.push(Command::SpawnBullet {
            bullet: BulletSpawn {
                position: player.position,
                velocity: player.facing() * throw.speed,
                radius: throw.radius,
                damage: throw.damage,
                color: palette::AXE,
                piercing: Some(AXE_PIERCING),
                lifetime: Some(throw.lifetime),
                knockback: None,
                behavior: BulletBehavior::Boomerang { returning: false },
            },
        });
    }

    pub(crate) fn reset(&mut self) {
        self.cooldown.reset();
    }
}
