//! Weapon families and their balance table.

use std::time::Duration;

/// Closed set of weapon families fed by the upgrade inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WeaponKind {
    /// Manually aimed primary gun.
    Gun,
    /// Sniper drone minion.
    Drone,
    /// Flame-breathing dragon minion.
    Dragon,
    /// Homing missile launcher.
    Missile,
    /// Random lightning strikes.
    Lightning,
    /// Proximity mines.
    Mine,
    /// Returning axe.
    Axe,
    /// Orbiting energy ring.
    Orbital,
}

/// Balance row for a weapon family.
///
/// Fields a family does not use are zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeaponStats {
    /// Damage per hit or detonation.
    pub damage: f32,
    /// Base cooldown between shots.
    pub rate: Duration,
    /// Projectile speed in units per frame, or angular speed in radians per frame for orbitals.
    pub speed: f32,
    /// Targeting range.
    pub range: f32,
    /// Area damage radius.
    pub area: f32,
    /// Projectile lifetime in frames.
    pub duration: u32,
}

const EMPTY: WeaponStats = WeaponStats {
    damage: 0.0,
    rate: Duration::ZERO,
    speed: 0.0,
    range: 0.0,
    area: 0.0,
    duration: 0,
};

impl WeaponKind {
    /// Balance row of the family.
    #[must_use]
    pub const fn stats(self) -> WeaponStats {
        match self {
            WeaponKind::Gun => WeaponStats {
                damage: 25.0,
                rate: Duration::from_millis(500),
                speed: 16.0,
                ..EMPTY
            },
            WeaponKind::Drone => WeaponStats {
                damage: 45.0,
                rate: Duration::from_millis(1_500),
                speed: 18.0,
                range: 600.0,
                ..EMPTY
            },
            WeaponKind::Dragon => WeaponStats {
                damage: 6.0,
                rate: Duration::from_millis(120),
                speed: 8.0,
                range: 200.0,
                duration: 35,
                ..EMPTY
            },
            WeaponKind::Missile => WeaponStats {
                damage: 60.0,
                rate: Duration::from_millis(3_000),
                speed: 7.0,
                area: 140.0,
                ..EMPTY
            },
            WeaponKind::Lightning => WeaponStats {
                damage: 150.0,
                rate: Duration::from_millis(3_500),
                ..EMPTY
            },
            WeaponKind::Mine => WeaponStats {
                damage: 100.0,
                rate: Duration::from_millis(2_500),
                area: 120.0,
                ..EMPTY
            },
            WeaponKind::Axe => WeaponStats {
                damage: 45.0,
                rate: Duration::from_millis(1_500),
                speed: 12.0,
                duration: 100,
                ..EMPTY
            },
            WeaponKind::Orbital => WeaponStats {
                damage: 15.0,
                speed: 0.04,
                ..EMPTY
            },
        }
    }
}
