use horde_core::{
    resolver::{self, MUZZLE_OFFSET},
    BulletBehavior, BulletSpawn, Command, Cooldown, Cue, Vec2,
};
use horde_world::query;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::FireContext;

/// Primary gun fired while the host requests it.
#[derive(Clone, Debug, Default)]
pub struct Gun {
    cooldown: Cooldown,
}

impl Gun {
    pub(crate) fn try_fire(
        &mut self,
        context: &FireContext<'_>,
        rng: &mut ChaCha8Rng,
        out: &mut Vec<Command>,
    ) {
        if !context.input.wants_fire() {
            return;
        }
        let profile = resolver::gun(context.inventory);
        if !self.cooldown.try_trigger(context.now, profile.interval) {
            return;
        }

        let player = query::player(context.world);
        for offset in profile.pattern.offsets() {
            let angle = player.angle + offset;
            let jitter = if profile.jitter > 0.0 {
                (rng.gen::<f32>() - 0.5) * profile.jitter
            } else {
                0.0
            };
            out.push(Command::SpawnBullet {
                bullet: BulletSpawn {
                    position: player.position + Vec2::from_angle(angle) * MUZZLE_OFFSET,
                    velocity: Vec2::from_angle(angle + jitter) * profile.speed,
                    radius: profile.radius,
                    damage: profile.damage,
                    color: profile.color,
                    piercing: Some(profile.piercing),
                    lifetime: None,
                    knockback: Some(profile.knockback),
                    behavior: BulletBehavior::Ballistic,
                },
            });
        }
        out.push(Command::EmitCue { cue: Cue::Shoot });
    }

    pub(crate) fn reset(&mut self) {
        self.cooldown.reset();
    }
}
