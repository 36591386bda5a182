//! Maps upgrade levels to concrete weapon and stat profiles.
//!
//! Every resolver matches on [`UpgradeTier`] and handles [`UpgradeTier::Evolved`]
//! in its own arm. Several upgrades change shape at the cap (a radial burst
//! instead of a spread, extra minions, piercing rounds), so the evolved arm is
//! never an extrapolation of the linear one.

use std::{f32::consts::TAU, time::Duration};

use crate::{
    palette,
    upgrades::{Inventory, UpgradeId, UpgradeTier},
    weapons::WeaponKind,
    Color,
    MinionKind,
    MAGNET_RADIUS_BASE,
    ORBITAL_RADIUS_BASE,
    PLAYER_HP_BASE,
    PLAYER_SPEED_BASE,
};

/// Distance in front of the player where gun bullets appear.
pub const MUZZLE_OFFSET: f32 = 30.0;
const SPREAD_STEP: f32 = 0.15;
const NOVA_BULLETS: u32 = 8;

/// Shape of a primary gun volley.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VolleyPattern {
    /// One forward bullet.
    Single,
    /// Forward bullet plus `n` symmetric pairs.
    Spread(u8),
    /// Forward bullet plus an eight-way radial burst.
    Nova,
}

impl VolleyPattern {
    /// Angular offsets, relative to the aim angle, of every bullet in the volley.
    #[must_use]
    pub fn offsets(&self) -> Vec<f32> {
        let mut offsets = vec![0.0];
        match *self {
            VolleyPattern::Single => {}
            VolleyPattern::Spread(pairs) => {
                for i in 1..=pairs {
                    let arc = SPREAD_STEP * f32::from(i);
                    offsets.push(arc);
                    offsets.push(-arc);
                }
            }
            VolleyPattern::Nova => {
                let step = TAU / NOVA_BULLETS as f32;
                offsets.extend((0..NOVA_BULLETS).map(|i| step * i as f32));
            }
        }
        offsets
    }
}

/// Primary gun parameters for the current inventory.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GunProfile {
    /// Cooldown between volleys.
    pub interval: Duration,
    /// Damage of each bullet.
    pub damage: f32,
    /// Bullet speed in units per frame.
    pub speed: f32,
    /// Bullet radius.
    pub radius: f32,
    /// Bullet tint.
    pub color: Color,
    /// Extra contacts each bullet survives.
    pub piercing: u32,
    /// Knockback applied on contact.
    pub knockback: f32,
    /// Total width of the random angular jitter applied per bullet.
    pub jitter: f32,
    /// Volley shape.
    pub pattern: VolleyPattern,
}

/// Resolves the primary gun from the fire rate, damage and multishot levels.
#[must_use]
pub fn gun(inventory: &Inventory) -> GunProfile {
    let stats = WeaponKind::Gun.stats();
    let base_rate = stats.rate.as_millis() as f32;
    let (interval, jitter) = match inventory.tier(UpgradeId::FireRate) {
        UpgradeTier::Evolved => (Duration::from_millis(80), 0.1),
        UpgradeTier::Inactive => (stats.rate, 0.0),
        UpgradeTier::Linear(level) => {
            let reduction = (f32::from(level) * 0.1).min(0.5);
            let millis = (base_rate * (1.0 - reduction)).max(100.0).round();
            (Duration::from_millis(millis as u64), 0.0)
        }
    };
    let (multiplier, radius, color, piercing, knockback) = match inventory.tier(UpgradeId::Damage) {
        UpgradeTier::Evolved => (1.0 + 5.0 * 0.2 + 1.0, 6.0, palette::BULLET_EVOLVED, 3, 8.0),
        UpgradeTier::Inactive => (1.0, 4.0, palette::BULLET, 0, 2.0),
        UpgradeTier::Linear(level) => (1.0 + f32::from(level) * 0.2, 4.0, palette::BULLET, 0, 2.0),
    };
    let pattern = match inventory.tier(UpgradeId::Multishot) {
        UpgradeTier::Evolved => VolleyPattern::Nova,
        UpgradeTier::Inactive => VolleyPattern::Single,
        UpgradeTier::Linear(level) => VolleyPattern::Spread(level),
    };
    GunProfile {
        interval,
        damage: stats.damage * multiplier,
        speed: stats.speed,
        radius,
        color,
        piercing,
        knockback,
        jitter,
        pattern,
    }
}

/// Player movement speed in units per frame.
#[must_use]
pub fn move_speed(inventory: &Inventory) -> f32 {
    match inventory.tier(UpgradeId::Speed) {
        UpgradeTier::Evolved => PLAYER_SPEED_BASE + 5.0 * 0.5 + 2.0,
        UpgradeTier::Inactive => PLAYER_SPEED_BASE,
        UpgradeTier::Linear(level) => PLAYER_SPEED_BASE + f32::from(level) * 0.5,
    }
}

/// Maximum hit points of the player.
#[must_use]
pub fn max_hp(inventory: &Inventory) -> f32 {
    let factor = match inventory.tier(UpgradeId::MaxHp) {
        UpgradeTier::Evolved => 1.0 + 5.0 * 0.2 + 0.5,
        UpgradeTier::Inactive => 1.0,
        UpgradeTier::Linear(level) => 1.0 + f32::from(level) * 0.2,
    };
    (PLAYER_HP_BASE * factor).floor()
}

/// Periodic healing granted by the regen upgrade.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Regen {
    /// Hit points restored per tick.
    pub amount: f32,
    /// Time between ticks.
    pub interval: Duration,
}

/// Resolves regeneration, or `None` while the upgrade is not owned.
#[must_use]
pub fn regen(inventory: &Inventory) -> Option<Regen> {
    match inventory.tier(UpgradeId::Regen) {
        UpgradeTier::Inactive => None,
        UpgradeTier::Linear(level) => Some(Regen {
            amount: f32::from(level),
            interval: Duration::from_millis(1_000),
        }),
        UpgradeTier::Evolved => Some(Regen {
            amount: 5.0,
            interval: Duration::from_millis(500),
        }),
    }
}

/// Radius inside which experience orbs accelerate toward the player.
#[must_use]
pub fn magnet_radius(inventory: &Inventory) -> f32 {
    match inventory.tier(UpgradeId::Magnet) {
        UpgradeTier::Evolved => MAGNET_RADIUS_BASE * (1.0 + 5.0 * 0.25) * 3.0,
        UpgradeTier::Inactive => MAGNET_RADIUS_BASE,
        UpgradeTier::Linear(level) => MAGNET_RADIUS_BASE * (1.0 + f32::from(level) * 0.25),
    }
}

/// Ring of orbital bodies around the player.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalRing {
    /// Number of bodies on the ring.
    pub count: u32,
    /// Distance of the ring from the player.
    pub distance: f32,
    /// Collision radius of each body.
    pub body_radius: f32,
    /// Damage per contact frame.
    pub damage: f32,
    /// Knockback applied on contact.
    pub knockback: f32,
    /// Angle added to the ring each frame.
    pub angular_speed: f32,
    /// Body tint.
    pub color: Color,
}

/// Resolves the orbital ring, or `None` while the upgrade is not owned.
#[must_use]
pub fn orbital_ring(inventory: &Inventory) -> Option<OrbitalRing> {
    let stats = WeaponKind::Orbital.stats();
    match inventory.tier(UpgradeId::Orbitals) {
        UpgradeTier::Inactive => None,
        UpgradeTier::Linear(level) => Some(OrbitalRing {
            count: u32::from(level),
            distance: ORBITAL_RADIUS_BASE,
            body_radius: 6.0,
            damage: stats.damage,
            knockback: 1.0,
            angular_speed: stats.speed,
            color: palette::ORBITAL,
        }),
        UpgradeTier::Evolved => Some(OrbitalRing {
            count: 5 + 2,
            distance: ORBITAL_RADIUS_BASE + 40.0,
            body_radius: 10.0,
            damage: stats.damage * 2.0,
            knockback: 5.0,
            angular_speed: stats.speed * 2.0,
            color: palette::ORBITAL_EVOLVED,
        }),
    }
}

/// Number of minions of the kind that should exist for the inventory.
#[must_use]
pub fn minion_count(inventory: &Inventory, kind: MinionKind) -> usize {
    match (kind, inventory.tier(minion_upgrade(kind))) {
        (_, UpgradeTier::Inactive) => 0,
        (MinionKind::Drone, UpgradeTier::Evolved) => 2,
        (MinionKind::Drone, UpgradeTier::Linear(_)) => 1,
        (MinionKind::Dragon, _) => 1,
    }
}

/// Upgrade that controls minions of the kind.
#[must_use]
pub const fn minion_upgrade(kind: MinionKind) -> UpgradeId {
    match kind {
        MinionKind::Drone => UpgradeId::Drone,
        MinionKind::Dragon => UpgradeId::Dragon,
    }
}

/// Firing parameters of a minion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinionProfile {
    /// Maximum distance at which a target is acquired.
    pub range: f32,
    /// Time between shots.
    pub cooldown: Duration,
    /// Projectiles per shot.
    pub shots: u32,
    /// Total width of the random angular spread per projectile.
    pub spread: f32,
    /// Damage per projectile.
    pub damage: f32,
    /// Projectile speed in units per frame.
    pub speed: f32,
    /// Projectile radius.
    pub radius: f32,
    /// Extra contacts each projectile survives.
    pub piercing: u32,
    /// Projectile lifetime in frames, if limited.
    pub lifetime: Option<u32>,
    /// Projectile tint.
    pub color: Color,
}

/// Resolves the firing profile of a minion kind.
#[must_use]
pub fn minion_profile(inventory: &Inventory, kind: MinionKind) -> MinionProfile {
    let evolved = matches!(inventory.tier(minion_upgrade(kind)), UpgradeTier::Evolved);
    match kind {
        MinionKind::Drone => {
            let stats = WeaponKind::Drone.stats();
            MinionProfile {
                range: stats.range,
                cooldown: if evolved { stats.rate / 2 } else { stats.rate },
                shots: 1,
                spread: 0.0,
                damage: if evolved { stats.damage * 2.0 } else { stats.damage },
                speed: stats.speed,
                radius: 4.0,
                piercing: 1,
                lifetime: None,
                color: palette::DRONE,
            }
        }
        MinionKind::Dragon => {
            let stats = WeaponKind::Dragon.stats();
            MinionProfile {
                range: stats.range,
                cooldown: if evolved { stats.rate / 2 } else { stats.rate },
                shots: if evolved { 5 } else { 3 },
                spread: 0.6,
                damage: stats.damage,
                speed: stats.speed,
                radius: if evolved { 6.0 } else { 3.0 },
                piercing: 5,
                lifetime: Some(stats.duration),
                color: palette::DRAGON,
            }
        }
    }
}

/// Homing missile volley.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MissileVolley {
    /// Missiles per volley.
    pub count: u32,
    /// Time between volleys.
    pub interval: Duration,
    /// Detonation damage.
    pub damage: f32,
    /// Total width of the random launch velocity on each axis.
    pub launch_jitter: f32,
}

/// Resolves the missile volley, or `None` while the upgrade is not owned.
#[must_use]
pub fn missile(inventory: &Inventory) -> Option<MissileVolley> {
    let stats = WeaponKind::Missile.stats();
    let count = match inventory.tier(UpgradeId::Missile) {
        UpgradeTier::Inactive => return None,
        UpgradeTier::Linear(_) => 1,
        UpgradeTier::Evolved => 3,
    };
    Some(MissileVolley {
        count,
        interval: stats.rate,
        damage: stats.damage,
        launch_jitter: 5.0,
    })
}

/// Periodic lightning strike.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightningStrike {
    /// Distinct zombies struck per discharge.
    pub strikes: u32,
    /// Time between discharges.
    pub interval: Duration,
    /// Damage per strike.
    pub damage: f32,
}

/// Resolves lightning, or `None` while the upgrade is not owned.
#[must_use]
pub fn lightning(inventory: &Inventory) -> Option<LightningStrike> {
    let stats = WeaponKind::Lightning.stats();
    match inventory.tier(UpgradeId::Lightning) {
        UpgradeTier::Inactive => None,
        UpgradeTier::Linear(level) => Some(LightningStrike {
            strikes: u32::from(level) + 2,
            interval: stats.rate,
            damage: stats.damage,
        }),
        UpgradeTier::Evolved => Some(LightningStrike {
            strikes: 5 + 2,
            interval: stats.rate / 2,
            damage: stats.damage,
        }),
    }
}

/// Proximity mine placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MineLayer {
    /// Time between placements.
    pub interval: Duration,
    /// Detonation damage.
    pub damage: f32,
}

/// Resolves mines, or `None` while the upgrade is not owned.
#[must_use]
pub fn mine(inventory: &Inventory) -> Option<MineLayer> {
    let stats = WeaponKind::Mine.stats();
    match inventory.tier(UpgradeId::Mine) {
        UpgradeTier::Inactive => None,
        UpgradeTier::Linear(_) => Some(MineLayer {
            interval: stats.rate,
            damage: stats.damage,
        }),
        UpgradeTier::Evolved => Some(MineLayer {
            interval: stats.rate,
            damage: stats.damage * 2.0,
        }),
    }
}

/// Returning axe throw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxeThrow {
    /// Time between throws.
    pub interval: Duration,
    /// Launch speed in units per frame.
    pub speed: f32,
    /// Collision radius.
    pub radius: f32,
    /// Damage per contact frame.
    pub damage: f32,
    /// Lifetime in frames.
    pub lifetime: u32,
}

/// Resolves the axe, or `None` while the upgrade is not owned.
#[must_use]
pub fn axe(inventory: &Inventory) -> Option<AxeThrow> {
    let stats = WeaponKind::Axe.stats();
    let (radius, lifetime) = match inventory.tier(UpgradeId::Axe) {
        UpgradeTier::Inactive => return None,
        UpgradeTier::Linear(_) => (12.0, stats.duration),
        UpgradeTier::Evolved => (18.0, 300),
    };
    Some(AxeThrow {
        interval: stats.rate,
        speed: stats.speed,
        radius,
        damage: stats.damage,
        lifetime,
    })
}
