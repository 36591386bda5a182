use horde_core::{palette, BulletBehavior, Burst, Color, Cue, Event, Vec2, WeaponKind};
use horde_world::{Bullet, EntityStore, Zombie};

const DEFAULT_KNOCKBACK: f32 = 2.0;
const BLOOD_PARTICLES: u32 = 2;
const BLOOD_SIZE: f32 = 0.5;
const BLAST_SIZE: f32 = 2.0;

/// Area detonation parameters of an exploding projectile.
#[derive(Clone, Copy, Debug)]
struct Blast {
    area: f32,
    color: Color,
    particles: u32,
}

impl Blast {
    fn mine() -> Self {
        Self {
            area: WeaponKind::Mine.stats().area,
            color: palette::MINE,
            particles: 10,
        }
    }

    fn missile() -> Self {
        Self {
            area: WeaponKind::Missile.stats().area,
            color: palette::MISSILE,
            particles: 15,
        }
    }
}

/// Checks every projectile against every living zombie and applies contacts.
///
/// A projectile stops interacting as soon as it is spent, and zombies already
/// at zero hit points this frame are not valid contact targets.
pub(crate) fn resolve_contacts(
    store: &mut EntityStore,
    bursts: &mut Vec<Burst>,
    out: &mut Vec<Event>,
) {
    let player = store.player.position;
    for bullet in &mut store.bullets {
        for index in 0..store.zombies.len() {
            if bullet.spent {
                break;
            }
            if !touches(bullet, &store.zombies[index]) {
                continue;
            }
            match bullet.behavior {
                BulletBehavior::Mine => {
                    detonate(bullet, &mut store.zombies, Blast::mine(), bursts, out);
                }
                BulletBehavior::Homing { .. } => {
                    detonate(bullet, &mut store.zombies, Blast::missile(), bursts, out);
                }
                BulletBehavior::Ballistic
                | BulletBehavior::Orbital
                | BulletBehavior::Boomerang { .. } => {
                    strike(bullet, &mut store.zombies[index], player, bursts, out);
                }
            }
        }
    }
}

fn touches(bullet: &Bullet, zombie: &Zombie) -> bool {
    !zombie.is_dead() && bullet.position.distance(zombie.position) < zombie.radius + bullet.radius
}

fn detonate(
    bullet: &mut Bullet,
    zombies: &mut [Zombie],
    blast: Blast,
    bursts: &mut Vec<Burst>,
    out: &mut Vec<Event>,
) {
    bursts.push(Burst::new(bullet.position, blast.color, blast.particles, BLAST_SIZE));
    out.push(Event::Cue { cue: Cue::Explosion });
    for zombie in zombies
        .iter_mut()
        .filter(|zombie| zombie.position.distance(bullet.position) < blast.area)
    {
        zombie.hp -= bullet.damage;
    }
    bullet.spent = true;
}

fn strike(
    bullet: &mut Bullet,
    zombie: &mut Zombie,
    player: Vec2,
    bursts: &mut Vec<Burst>,
    out: &mut Vec<Event>,
) {
    zombie.hp -= bullet.damage;
    bursts.push(Burst::new(zombie.position, palette::BLOOD, BLOOD_PARTICLES, BLOOD_SIZE));

    let knockback =
        bullet.knockback.unwrap_or(DEFAULT_KNOCKBACK) * zombie.kind.knockback_resistance();
    zombie.position += (zombie.position - player).normalize_or_zero() * knockback;

    let orbital = bullet.behavior.is_orbital();
    if !orbital && !bullet.behavior.is_boomerang() {
        match bullet.piercing {
            Some(remaining) if remaining > 0 => bullet.piercing = Some(remaining - 1),
            _ => bullet.spent = true,
        }
    }

    if !zombie.is_dead() && !orbital {
        out.push(Event::Cue { cue: Cue::Hit });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horde_core::{ZombieId, ZombieKind};

    fn zombie(kind: ZombieKind, position: Vec2, hp: f32) -> Zombie {
        let stats = kind.stats();
        Zombie {
            id: ZombieId::new(0),
            kind,
            position,
            radius: stats.radius,
            speed: stats.speed,
            base_speed: stats.speed,
            hp,
            max_hp: hp,
            opacity: 1.0,
            color: stats.color,
        }
    }

    fn bullet(behavior: BulletBehavior, knockback: Option<f32>) -> Bullet {
        Bullet {
            position: Vec2::new(100.0, 100.0),
            velocity: Vec2::ZERO,
            radius: 4.0,
            damage: 10.0,
            color: palette::BULLET,
            piercing: None,
            lifetime: None,
            knockback,
            behavior,
            spent: false,
        }
    }

    #[test]
    fn knockback_is_scaled_by_resistance() {
        let player = Vec2::new(0.0, 100.0);
        let mut giant = zombie(ZombieKind::Giant, Vec2::new(100.0, 100.0), 600.0);
        let mut shot = bullet(BulletBehavior::Ballistic, Some(10.0));
        strike(&mut shot, &mut giant, player, &mut Vec::new(), &mut Vec::new());
        assert!((giant.position.x - 101.0).abs() < 1e-4);

        let mut normal = zombie(ZombieKind::Normal, Vec2::new(100.0, 100.0), 35.0);
        let mut shot = bullet(BulletBehavior::Ballistic, None);
        strike(&mut shot, &mut normal, player, &mut Vec::new(), &mut Vec::new());
        assert!((normal.position.x - 102.0).abs() < 1e-4);
    }

    #[test]
    fn orbitals_and_axes_keep_their_charges() {
        let player = Vec2::ZERO;
        for behavior in [
            BulletBehavior::Orbital,
            BulletBehavior::Boomerang { returning: false },
        ] {
            let mut target = zombie(ZombieKind::Tank, Vec2::new(100.0, 100.0), 200.0);
            let mut shot = bullet(behavior, None);
            strike(&mut shot, &mut target, player, &mut Vec::new(), &mut Vec::new());
            assert!(!shot.spent);
            assert_eq!(target.hp, 190.0);
        }
    }

    #[test]
    fn orbital_hits_are_silent() {
        let mut events = Vec::new();
        let mut target = zombie(ZombieKind::Tank, Vec2::new(100.0, 100.0), 200.0);
        strike(
            &mut bullet(BulletBehavior::Orbital, None),
            &mut target,
            Vec2::ZERO,
            &mut Vec::new(),
            &mut events,
        );
        assert!(events.is_empty());
        strike(
            &mut bullet(BulletBehavior::Ballistic, None),
            &mut target,
            Vec2::ZERO,
            &mut Vec::new(),
            &mut events,
        );
        assert_eq!(events, vec![Event::Cue { cue: Cue::Hit }]);
    }

    #[test]
    fn missile_blast_reaches_its_area() {
        let mut zombies = vec![
            zombie(ZombieKind::Tank, Vec2::new(100.0, 100.0), 200.0),
            zombie(ZombieKind::Tank, Vec2::new(239.0, 100.0), 200.0),
            zombie(ZombieKind::Tank, Vec2::new(241.0, 100.0), 200.0),
        ];
        let mut missile = bullet(BulletBehavior::Homing { target: None }, None);
        let mut bursts = Vec::new();
        detonate(&mut missile, &mut zombies, Blast::missile(), &mut bursts, &mut Vec::new());
        let hp: Vec<f32> = zombies.iter().map(|z| z.hp).collect();
        assert_eq!(hp, vec![190.0, 190.0, 200.0]);
        assert!(missile.spent);
        assert_eq!(bursts.len(), 1);
        assert_eq!(bursts[0].count, 15);
    }
}
