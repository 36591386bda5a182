//! Spatial entity store holding every live entity of a run.

use std::f32::consts::TAU;
use std::time::Duration;

use horde_core::{
    palette, resolver, BulletBehavior, BulletSpawn, Burst, Color, Inventory, MinionId, MinionKind,
    Vec2, ZombieId, ZombieKind, PLAYER_HP_BASE, PLAYER_RADIUS, XP_BASE_REQUIREMENT,
};
use rand::Rng;

/// Radius of a dropped experience orb.
pub const XP_ORB_RADIUS: f32 = 4.0;

/// The single player of a run.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    /// Position in world space.
    pub position: Vec2,
    /// Facing angle in radians.
    pub angle: f32,
    /// Collision radius.
    pub radius: f32,
    /// Current hit points; negative values mean the player died this frame.
    pub hp: f32,
    /// Maximum hit points.
    pub max_hp: f32,
    /// Experience toward the next level.
    pub xp: u32,
    /// Current level.
    pub level: u32,
    /// Experience required for the next level.
    pub next_level_xp: u32,
}

impl Player {
    /// Creates a level one player at the provided position.
    #[must_use]
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            angle: 0.0,
            radius: PLAYER_RADIUS,
            hp: PLAYER_HP_BASE,
            max_hp: PLAYER_HP_BASE,
            xp: 0,
            level: 1,
            next_level_xp: XP_BASE_REQUIREMENT,
        }
    }

    /// Unit vector the player is facing.
    #[must_use]
    pub fn facing(&self) -> Vec2 {
        Vec2::from_angle(self.angle)
    }
}

/// A hostile entity chasing the player.
#[derive(Clone, Debug, PartialEq)]
pub struct Zombie {
    /// Stable identifier used for weak references.
    pub id: ZombieId,
    /// Archetype of the zombie.
    pub kind: ZombieKind,
    /// Position in world space.
    pub position: Vec2,
    /// Collision radius.
    pub radius: f32,
    /// Current speed in units per frame.
    pub speed: f32,
    /// Speed assigned at spawn time.
    pub base_speed: f32,
    /// Current hit points.
    pub hp: f32,
    /// Hit points assigned at spawn time.
    pub max_hp: f32,
    /// Rendering opacity.
    pub opacity: f32,
    /// Tint used by adapters.
    pub color: Color,
}

impl Zombie {
    /// Reports whether the zombie has taken lethal damage.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.hp <= 0.0
    }
}

/// Any projectile-like effect: bullets, orbitals, missiles, mines and axes.
#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    /// Position in world space.
    pub position: Vec2,
    /// Velocity in units per frame.
    pub velocity: Vec2,
    /// Collision radius.
    pub radius: f32,
    /// Damage per contact or detonation.
    pub damage: f32,
    /// Tint used by adapters.
    pub color: Color,
    /// Remaining extra contacts.
    pub piercing: Option<u32>,
    /// Remaining lifetime in frames.
    pub lifetime: Option<u32>,
    /// Knockback applied on contact.
    pub knockback: Option<f32>,
    /// Motion and contact behaviour.
    pub behavior: BulletBehavior,
    /// Set once the bullet detonated, ran out of piercing or was caught.
    pub spent: bool,
}

impl From<BulletSpawn> for Bullet {
    fn from(spawn: BulletSpawn) -> Self {
        Self {
            position: spawn.position,
            velocity: spawn.velocity,
            radius: spawn.radius,
            damage: spawn.damage,
            color: spawn.color,
            piercing: spawn.piercing,
            lifetime: spawn.lifetime,
            knockback: spawn.knockback,
            behavior: spawn.behavior,
            spent: false,
        }
    }
}

/// Companion that follows the player and shoots on its own.
#[derive(Clone, Debug, PartialEq)]
pub struct Minion {
    /// Stable identifier.
    pub id: MinionId,
    /// Drone or dragon.
    pub kind: MinionKind,
    /// Position in world space.
    pub position: Vec2,
    /// Facing angle in radians.
    pub angle: f32,
    /// Host timestamp of the last shot, if any.
    pub last_fire: Option<Duration>,
    /// Weak reference to the zombie being tracked.
    pub target: Option<ZombieId>,
}

/// Experience pickup dropped by a dead zombie.
#[derive(Clone, Debug, PartialEq)]
pub struct XpOrb {
    /// Position in world space.
    pub position: Vec2,
    /// Velocity in units per frame.
    pub velocity: Vec2,
    /// Collision radius.
    pub radius: f32,
    /// Experience granted on pickup.
    pub value: u32,
    /// Whether the orb is rare tier.
    pub rare: bool,
}

impl XpOrb {
    /// Tint used by adapters.
    #[must_use]
    pub const fn color(&self) -> Color {
        if self.rare {
            palette::XP_ORB_RARE
        } else {
            palette::XP_ORB
        }
    }
}

/// Short-lived cosmetic particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Position in world space.
    pub position: Vec2,
    /// Velocity in units per frame.
    pub velocity: Vec2,
    /// Rendering radius.
    pub radius: f32,
    /// Tint used by adapters.
    pub color: Color,
    /// Remaining life in `0.0..=1.0`.
    pub life: f32,
}

impl Particle {
    /// Rendering alpha derived from the remaining life.
    #[must_use]
    pub fn alpha(&self) -> f32 {
        self.life.clamp(0.0, 1.0)
    }
}

/// Nearest zombie of the slice strictly closer than `max_distance` to `point`.
#[must_use]
pub fn nearest(zombies: &[Zombie], point: Vec2, max_distance: f32) -> Option<&Zombie> {
    let mut nearest = None;
    let mut best = max_distance;
    for zombie in zombies {
        let distance = zombie.position.distance(point);
        if distance < best {
            best = distance;
            nearest = Some(zombie);
        }
    }
    nearest
}

/// Owns every entity collection of the current run.
#[derive(Clone, Debug)]
pub struct EntityStore {
    /// The player.
    pub player: Player,
    /// Live zombies.
    pub zombies: Vec<Zombie>,
    /// Live projectiles.
    pub bullets: Vec<Bullet>,
    /// Companion minions.
    pub minions: Vec<Minion>,
    /// Uncollected experience orbs.
    pub xp_orbs: Vec<XpOrb>,
    /// Cosmetic particles.
    pub particles: Vec<Particle>,
    next_zombie: u32,
    next_minion: u32,
}

impl EntityStore {
    /// Creates an empty store with the player at the provided position.
    #[must_use]
    pub fn new(player_position: Vec2) -> Self {
        Self {
            player: Player::new(player_position),
            zombies: Vec::new(),
            bullets: Vec::new(),
            minions: Vec::new(),
            xp_orbs: Vec::new(),
            particles: Vec::new(),
            next_zombie: 0,
            next_minion: 0,
        }
    }

    /// Inserts a zombie of the provided kind and returns its identifier.
    pub fn spawn_zombie(
        &mut self,
        kind: ZombieKind,
        position: Vec2,
        max_hp: f32,
        speed: f32,
    ) -> ZombieId {
        let id = ZombieId::new(self.next_zombie);
        self.next_zombie = self.next_zombie.wrapping_add(1);
        let stats = kind.stats();
        self.zombies.push(Zombie {
            id,
            kind,
            position,
            radius: stats.radius,
            speed,
            base_speed: speed,
            hp: max_hp,
            max_hp,
            opacity: kind.opacity(),
            color: stats.color,
        });
        id
    }

    /// Looks up a zombie by identifier; stale identifiers yield `None`.
    #[must_use]
    pub fn zombie(&self, id: ZombieId) -> Option<&Zombie> {
        self.zombies.iter().find(|zombie| zombie.id == id)
    }

    /// Mutable lookup of a zombie by identifier.
    pub fn zombie_mut(&mut self, id: ZombieId) -> Option<&mut Zombie> {
        self.zombies.iter_mut().find(|zombie| zombie.id == id)
    }

    /// Nearest zombie strictly closer than `max_distance` to `point`.
    #[must_use]
    pub fn nearest_zombie(&self, point: Vec2, max_distance: f32) -> Option<&Zombie> {
        nearest(&self.zombies, point, max_distance)
    }

    /// Removes every orbital body and inserts the provided ring.
    pub fn replace_orbitals(&mut self, orbitals: Vec<BulletSpawn>) {
        self.bullets.retain(|bullet| !bullet.behavior.is_orbital());
        self.bullets.extend(orbitals.into_iter().map(Bullet::from));
    }

    /// Adds or removes minions so each kind matches the count its upgrade level allows.
    pub fn sync_minions(&mut self, inventory: &Inventory) {
        for kind in [MinionKind::Drone, MinionKind::Dragon] {
            let wanted = resolver::minion_count(inventory, kind);
            let mut present = self.minions.iter().filter(|m| m.kind == kind).count();
            while present < wanted {
                let id = MinionId::new(self.next_minion);
                self.next_minion = self.next_minion.wrapping_add(1);
                self.minions.push(Minion {
                    id,
                    kind,
                    position: self.player.position,
                    angle: 0.0,
                    last_fire: None,
                    target: None,
                });
                present += 1;
            }
            while present > wanted {
                if let Some(index) = self.minions.iter().rposition(|m| m.kind == kind) {
                    let _ = self.minions.remove(index);
                }
                present -= 1;
            }
        }
    }

    /// Emits a ring of particles with random directions and speeds.
    pub fn burst<R: Rng>(&mut self, rng: &mut R, burst: Burst) {
        for _ in 0..burst.count {
            let angle = rng.gen::<f32>() * TAU;
            let speed = rng.gen::<f32>() * 3.0 + 1.0;
            self.particles.push(Particle {
                position: burst.origin,
                velocity: Vec2::from_angle(angle) * speed * burst.size,
                radius: (rng.gen::<f32>() * 3.0 + 1.0) * burst.size,
                color: burst.color,
                life: 1.0,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horde_core::{UpgradeId, MAX_LEVEL};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn store() -> EntityStore {
        EntityStore::new(Vec2::new(1_500.0, 1_500.0))
    }

    #[test]
    fn zombie_ids_are_unique() {
        let mut store = store();
        let first = store.spawn_zombie(ZombieKind::Normal, Vec2::ZERO, 35.0, 1.5);
        let second = store.spawn_zombie(ZombieKind::Fast, Vec2::ZERO, 20.0, 3.2);
        assert_ne!(first, second);
        assert_eq!(store.zombie(second).map(|z| z.kind), Some(ZombieKind::Fast));
    }

    #[test]
    fn stale_lookup_yields_none() {
        let mut store = store();
        let id = store.spawn_zombie(ZombieKind::Normal, Vec2::ZERO, 35.0, 1.5);
        store.zombies.clear();
        assert!(store.zombie(id).is_none());
    }

    #[test]
    fn nearest_zombie_respects_range() {
        let mut store = store();
        let near = store.spawn_zombie(ZombieKind::Normal, Vec2::new(100.0, 0.0), 35.0, 1.5);
        let _ = store.spawn_zombie(ZombieKind::Normal, Vec2::new(300.0, 0.0), 35.0, 1.5);
        assert_eq!(
            store.nearest_zombie(Vec2::ZERO, 600.0).map(|z| z.id),
            Some(near)
        );
        assert!(store.nearest_zombie(Vec2::ZERO, 100.0).is_none());
    }

    #[test]
    fn minions_track_inventory() {
        let mut store = store();
        let inventory = Inventory::default()
            .with_level(UpgradeId::Drone, MAX_LEVEL)
            .with_level(UpgradeId::Dragon, 1);
        store.sync_minions(&inventory);
        let drones = store.minions.iter().filter(|m| m.kind == MinionKind::Drone).count();
        assert_eq!(drones, 2);
        assert_eq!(store.minions.len(), 3);
        store.sync_minions(&inventory);
        assert_eq!(store.minions.len(), 3);
        store.sync_minions(&Inventory::default());
        assert!(store.minions.is_empty());
    }

    #[test]
    fn burst_creates_requested_particles() {
        let mut store = store();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        store.burst(&mut rng, Burst::new(Vec2::ZERO, palette::BLOOD, 8, 1.0));
        assert_eq!(store.particles.len(), 8);
        assert!(store.particles.iter().all(|p| p.life == 1.0 && p.radius >= 1.0));
    }
}
