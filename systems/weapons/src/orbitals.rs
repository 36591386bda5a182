use std::f32::consts::TAU;

use horde_core::{resolver, BulletBehavior, BulletSpawn, Command, Vec2};
use horde_world::query;

use crate::FireContext;

const ORBITAL_PIERCING: u32 = 9_999;

/// Ring of bodies rebuilt around the player every frame.
#[derive(Clone, Debug, Default)]
pub struct Orbitals {
    angle: f32,
}

impl Orbitals {
    pub(crate) fn try_fire(&mut self, context: &FireContext<'_>, out: &mut Vec<Command>) {
        let Some(ring) = resolver::orbital_ring(context.inventory) else {
            return;
        };
        self.angle += ring.angular_speed;

        let centre = query::player(context.world).position;
        let step = TAU / ring.count as f32;
        let orbitals = (0..ring.count)
            .map(|i| BulletSpawn {
                position: centre + Vec2::from_angle(self.angle + step * i as f32) * ring.distance,
                velocity: Vec2::ZERO,
                radius: ring.body_radius,
                damage: ring.damage,
                color: ring.color,
                piercing: Some(ORBITAL_PIERCING),
                lifetime: None,
                knockback: Some(ring.knockback),
                behavior: BulletBehavior::Orbital,
            })
            .collect();
        out.push(Command::ReplaceOrbitals { orbitals });
    }

    pub(crate) fn reset(&mut self) {
        self.angle = 0.0;
    }
}
