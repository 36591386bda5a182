use horde_core::{resolver, BulletBehavior, BulletSpawn, Command, Vec2};
use horde_world::{query, Minion};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::FireContext;

/// Drone and dragon companions; cooldowns live on each minion.
#[derive(Clone, Copy, Debug, Default)]
pub struct Minions;

impl Minions {
    pub(crate) fn try_fire(
        &mut self,
        context: &FireContext<'_>,
        rng: &mut ChaCha8Rng,
        out: &mut Vec<Command>,
    ) {
        for minion in query::minions(context.world) {
            fire_minion(minion, context, rng, out);
        }
    }
}

fn fire_minion(
    minion: &Minion,
    context: &FireContext<'_>,
    rng: &mut ChaCha8Rng,
    out: &mut Vec<Command>,
) {
    let profile = resolver::minion_profile(context.inventory, minion.kind);

    let mut target = minion.target;
    if target.is_none() {
        target = query::nearest_zombie(context.world, minion.position, profile.range).map(|z| z.id);
        if target.is_some() {
            out.push(Command::RetargetMinion {
                minion: minion.id,
                target,
            });
        }
    }

    let ready = minion
        .last_fire
        .map_or(true, |last| context.now.saturating_sub(last) > profile.cooldown);
    if !ready {
        return;
    }

    let Some(zombie) = target.and_then(|id| query::zombie(context.world, id)) else {
        out.push(Command::IdleMinion { minion: minion.id });
        return;
    };

    let aim = zombie.position - minion.position;
    let angle = aim.y.atan2(aim.x);
    for _ in 0..profile.shots {
        let spread = if profile.spread > 0.0 {
            (rng.gen::<f32>() - 0.5) * profile.spread
        } else {
            0.0
        };
        out.push(Command::SpawnBullet {
            bullet: BulletSpawn {
                position: minion.position,
                velocity: Vec2::from_angle(angle + spread) * profile.speed,
                radius: profile.radius,
                damage: profile.damage,
                color: profile.color,
                piercing: Some(profile.piercing),
                lifetime: profile.lifetime,
                knockback: None,
                behavior: BulletBehavior::Ballistic,
            },
        });
    }
    out.push(Command::MinionFired {
        minion: minion.id,
        angle,
        at: context.now,
    });
}
