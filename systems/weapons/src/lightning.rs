use horde_core::{palette, resolver, Burst, Command, Cooldown};
use horde_world::query;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::FireContext;

const STRIKE_PARTICLES: u32 = 5;

/// Lightning that strikes random visible zombies directly.
#[derive(Clone, Debug, Default)]
pub struct Lightning {
    cooldown: Cooldown,
}

impl Lightning {
    pub(crate) fn try_fire(
        &mut self,
        context: &FireContext<'_>,
        rng: &mut ChaCha8Rng,
        out: &mut Vec<Command>,
    ) {
        let Some(strike) = resolver::lightning(context.inventory) else {
            return;
        };
        if !self.cooldown.try_trigger(context.now, strike.interval) {
            return;
        }

        let mut visible: Vec<_> = query::zombies(context.world)
            .iter()
            .filter(|zombie| context.camera.contains_strict(zombie.position))
            .collect();
        for _ in 0..strike.strikes {
            if visible.is_empty() {
                break;
            }
            let target = visible.swap_remove(rng.gen_range(0..visible.len()));
            out.push(Command::StrikeZombie {
                zombie: target.id,
                damage: strike.damage,
            });
            out.push(Command::SpawnBurst {
                burst: Burst::new(target.position, palette::LIGHTNING, STRIKE_PARTICLES, 1.0),
            });
        }
    }

    pub(crate) fn reset(&mut self) {
        self.cooldown.reset();
    }
}
