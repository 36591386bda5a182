#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Movement and steering for every entity kind.
//!
//! Movement runs twice per frame. [`Movement::steer`] happens before the
//! weapons fire: it moves the player from input, updates the aim angle and
//! pulls minions toward their formation slots. [`Movement::integrate`] happens
//! after spawning: it advances projectiles, zombies, particles and experience
//! orbs and drops projectiles that expired or left the world.

use std::{f32::consts::TAU, time::Duration};

use horde_core::{resolver, Aim, BulletBehavior, FrameInput, Rect, Vec2};
use horde_world::{nearest, Bullet, Player, WorldParts, Zombie};
use rand::Rng;

const MINION_ORBIT_RADIUS: f32 = 60.0;
const MINION_ORBIT_PERIOD_MS: f32 = 2_000.0;
const MINION_SMOOTHING: f32 = 0.08;

const HOMING_RANGE: f32 = 600.0;
const HOMING_STEER: f32 = 0.5;
const HOMING_SPEED_CAP: f32 = 10.0;
const HOMING_DAMPING: f32 = 0.9;

const BOOMERANG_DRAG: f32 = 0.95;
const BOOMERANG_TURN_SPEED: f32 = 1.0;
const BOOMERANG_PULL: f32 = 1.5;
const BOOMERANG_CATCH_DISTANCE: f32 = 30.0;

const CRAWLER_BURST_CHANCE: f32 = 0.05;
const CRAWLER_BURST_FACTOR: f32 = 1.5;

const PARTICLE_DECAY: f32 = 0.05;

const ORB_PULL: f32 = 1.5;
const ORB_DAMPING: f32 = 0.9;

/// System that advances positions and velocities of all entities.
#[derive(Debug, Default)]
pub struct Movement;

impl Movement {
    /// Creates a new movement system.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Moves the player from input, aims, and pulls minions into formation.
    pub fn steer(&mut self, input: &FrameInput, parts: &mut WorldParts<'_>) {
        let speed = resolver::move_speed(parts.run.inventory());
        let player = &mut parts.store.player;
        move_player(player, input.movement() * speed, parts.bounds);
        aim_player(player, input.aim);

        let now = parts.run.now();
        let centre = parts.store.player.position;
        let total = parts.store.minions.len();
        for (index, minion) in parts.store.minions.iter_mut().enumerate() {
            let slot = formation_slot(centre, index, total, now);
            minion.position += (slot - minion.position) * MINION_SMOOTHING;
        }
    }

    /// Advances projectiles, zombies, particles and experience orbs by one frame.
    pub fn integrate(&mut self, parts: &mut WorldParts<'_>) {
        let store = &mut *parts.store;
        let player = store.player.position;

        for bullet in &mut store.bullets {
            advance_bullet(bullet, &store.zombies, player);
        }
        let bounds = parts.bounds;
        store.bullets.retain(|bullet| {
            !bullet.spent && bullet.lifetime != Some(0) && bounds.contains(bullet.position)
        });

        for zombie in &mut store.zombies {
            pursue(zombie, player, &mut *parts.rng);
        }

        for particle in &mut store.particles {
            particle.position += particle.velocity;
            particle.life -= PARTICLE_DECAY;
        }
        store.particles.retain(|particle| particle.life > 0.0);

        let magnet = resolver::magnet_radius(parts.run.inventory());
        for orb in &mut store.xp_orbs {
            if orb.position.distance(player) < magnet {
                orb.velocity += (player - orb.position).normalize_or_zero() * ORB_PULL;
            }
            orb.position += orb.velocity;
            orb.velocity *= ORB_DAMPING;
        }
    }
}

/// Moves the player by `delta` and keeps it a radius away from every world edge.
pub fn move_player(player: &mut Player, delta: Vec2, bounds: Rect) {
    player.position = bounds.clamp_inset(player.position + delta, player.radius);
}

fn aim_player(player: &mut Player, aim: Aim) {
    let direction = match aim {
        Aim::Pointer(point) => point - player.position,
        Aim::Stick(direction) => direction,
    };
    player.angle = direction.y.atan2(direction.x);
}

/// Point on the rotating ring around the player assigned to the minion at `index`.
#[must_use]
pub fn formation_slot(centre: Vec2, index: usize, total: usize, now: Duration) -> Vec2 {
    let spacing = TAU / total.max(1) as f32;
    let drift = now.as_millis() as f32 / MINION_ORBIT_PERIOD_MS;
    centre + Vec2::from_angle(index as f32 * spacing + drift) * MINION_ORBIT_RADIUS
}

fn advance_bullet(bullet: &mut Bullet, zombies: &[Zombie], player: Vec2) {
    match &mut bullet.behavior {
        BulletBehavior::Orbital | BulletBehavior::Mine => return,
        BulletBehavior::Ballistic => {}
        BulletBehavior::Homing { target } => {
            let locked = target.and_then(|id| zombies.iter().find(|zombie| zombie.id == id));
            let chased = match locked {
                Some(zombie) => Some(zombie),
                None => {
                    let acquired = nearest(zombies, bullet.position, HOMING_RANGE);
                    *target = acquired.map(|zombie| zombie.id);
                    acquired
                }
            };
            if let Some(zombie) = chased {
                bullet.velocity +=
                    (zombie.position - bullet.position).normalize_or_zero() * HOMING_STEER;
                if bullet.velocity.length() > HOMING_SPEED_CAP {
                    bullet.velocity *= HOMING_DAMPING;
                }
            }
        }
        BulletBehavior::Boomerang { returning } => {
            if *returning {
                bullet.velocity += (player - bullet.position).normalize_or_zero() * BOOMERANG_PULL;
                if player.distance(bullet.position) < BOOMERANG_CATCH_DISTANCE {
                    bullet.spent = true;
                }
            } else {
                bullet.velocity *= BOOMERANG_DRAG;
                if bullet.velocity.length() < BOOMERANG_TURN_SPEED {
                    *returning = true;
                }
            }
        }
    }

    bullet.position += bullet.velocity;
    if let Some(lifetime) = bullet.lifetime.as_mut() {
        *lifetime = lifetime.saturating_sub(1);
    }
}

fn pursue<R: Rng>(zombie: &mut Zombie, player: Vec2, rng: &mut R) {
    let step = zombie.speed;
    if zombie.kind == horde_core::ZombieKind::Crawler {
        if rng.gen::<f32>() < CRAWLER_BURST_CHANCE {
            zombie.speed *= CRAWLER_BURST_FACTOR;
        }
        if zombie.speed > zombie.base_speed * 2.0 {
            zombie.speed = zombie.base_speed;
        }
    }
    zombie.position += (player - zombie.position).normalize_or_zero() * step;
}
