use horde_core::{Burst, Event, Vec2, ZombieKind};
use horde_world::{WorldParts, XpOrb, Zombie, XP_ORB_RADIUS};
use rand::Rng;
use tracing::debug;

const DEATH_PARTICLES: u32 = 8;
const PARASITE_BROOD: usize = 3;
const BROOD_SCATTER: f32 = 20.0;
const ORB_SCATTER: f32 = 2.0;

/// Moves every zombie at zero hit points or below into `fallen`.
pub(crate) fn reap(zombies: &mut Vec<Zombie>, fallen: &mut Vec<Zombie>) {
    fallen.clear();
    zombies.retain(|zombie| {
        if zombie.is_dead() {
            fallen.push(zombie.clone());
            false
        } else {
            true
        }
    });
}

/// Grants score, experience and wave progress for a dead zombie.
pub(crate) fn reward(
    zombie: &Zombie,
    parts: &mut WorldParts<'_>,
    bursts: &mut Vec<Burst>,
    out: &mut Vec<Event>,
) {
    let stats = zombie.kind.stats();
    let outcome = parts.run.record_kill(stats.score);
    bursts.push(Burst::new(zombie.position, zombie.color, DEATH_PARTICLES, 1.0));

    let velocity = scatter(&mut *parts.rng, ORB_SCATTER);
    parts.store.xp_orbs.push(XpOrb {
        position: zombie.position,
        velocity,
        radius: XP_ORB_RADIUS,
        value: stats.xp,
        rare: zombie.kind.drops_rare_orb(),
    });

    out.push(Event::ZombieKilled {
        zombie: zombie.id,
        kind: zombie.kind,
        position: zombie.position,
        score: outcome.score,
    });

    if zombie.kind == ZombieKind::Parasite {
        let brood = ZombieKind::ParasiteSmall;
        let small = brood.stats();
        for _ in 0..PARASITE_BROOD {
            let position = zombie.position + scatter(&mut *parts.rng, BROOD_SCATTER);
            let id = parts
                .store
                .spawn_zombie(brood, position, small.hp, small.speed);
            out.push(Event::ZombieSpawned {
                zombie: id,
                kind: brood,
            });
        }
    }

    if let Some(wave) = outcome.wave_advanced {
        debug!(wave, kills = parts.run.kills(), "wave advanced");
        out.push(Event::WaveAdvanced { wave });
    }
}

fn scatter<R: Rng>(rng: &mut R, extent: f32) -> Vec2 {
    Vec2::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5) * extent
}
