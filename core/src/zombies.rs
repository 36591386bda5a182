//! Zombie archetypes and their immutable stat table.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::ParseError, Color};

/// Closed set of zombie archetypes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZombieKind {
    /// Baseline shambler.
    Normal,
    /// Quick and fragile.
    Fast,
    /// Slow and heavily armoured.
    Tank,
    /// Fastest and most fragile.
    Wolf,
    /// Huge boss-like brute.
    Giant,
    /// Translucent zombie with random speed bursts.
    Crawler,
    /// Splits into three small parasites on death.
    Parasite,
    /// Spawn-only child of a parasite.
    ParasiteSmall,
}

/// Stat row for a zombie archetype.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZombieStats {
    /// Hit points before wave and difficulty scaling.
    pub hp: f32,
    /// Speed in units per frame before difficulty scaling.
    pub speed: f32,
    /// Collision radius.
    pub radius: f32,
    /// Tint used by adapters.
    pub color: Color,
    /// Experience dropped on death.
    pub xp: u32,
    /// Score awarded on death before the difficulty multiplier.
    pub score: u32,
}

impl ZombieKind {
    /// Every archetype in table order.
    pub const ALL: [ZombieKind; 8] = [
        ZombieKind::Normal,
        ZombieKind::Fast,
        ZombieKind::Tank,
        ZombieKind::Wolf,
        ZombieKind::Giant,
        ZombieKind::Crawler,
        ZombieKind::Parasite,
        ZombieKind::ParasiteSmall,
    ];

    /// Stat row of the archetype.
    #[must_use]
    pub const fn stats(self) -> ZombieStats {
        match self {
            ZombieKind::Normal => row(35.0, 1.5, 16.0, (0x4a, 0xde, 0x80), 5, 10),
            ZombieKind::Fast => row(20.0, 3.2, 14.0, (0xfb, 0x92, 0x3c), 8, 20),
            ZombieKind::Tank => row(200.0, 0.8, 28.0, (0xef, 0x44, 0x44), 30, 50),
            ZombieKind::Wolf => row(15.0, 4.2, 12.0, (0x94, 0xa3, 0xb8), 10, 25),
            ZombieKind::Giant => row(600.0, 0.6, 45.0, (0x7f, 0x1d, 0x1d), 100, 100),
            ZombieKind::Crawler => row(30.0, 2.2, 14.0, (0x2d, 0xd4, 0xbf), 15, 30),
            ZombieKind::Parasite => row(80.0, 1.2, 22.0, (0xa3, 0xe6, 0x35), 15, 40),
            ZombieKind::ParasiteSmall => row(10.0, 3.5, 8.0, (0xbe, 0xf2, 0x64), 2, 5),
        }
    }

    /// Fraction of incoming knockback the archetype actually receives.
    #[must_use]
    pub const fn knockback_resistance(self) -> f32 {
        match self {
            ZombieKind::Giant => 0.1,
            ZombieKind::Tank => 0.3,
            _ => 1.0,
        }
    }

    /// Reports whether the archetype drops a rare-tier experience orb.
    #[must_use]
    pub const fn drops_rare_orb(self) -> bool {
        matches!(self, ZombieKind::Giant | ZombieKind::Tank)
    }

    /// Rendering opacity of the archetype.
    #[must_use]
    pub const fn opacity(self) -> f32 {
        match self {
            ZombieKind::Crawler => 0.4,
            _ => 1.0,
        }
    }

    /// Upper-case identifier used in configuration and logs.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            ZombieKind::Normal => "NORMAL",
            ZombieKind::Fast => "FAST",
            ZombieKind::Tank => "TANK",
            ZombieKind::Wolf => "WOLF",
            ZombieKind::Giant => "GIANT",
            ZombieKind::Crawler => "CRAWLER",
            ZombieKind::Parasite => "PARASITE",
            ZombieKind::ParasiteSmall => "PARASITE_SMALL",
        }
    }
}

const fn row(
    hp: f32,
    speed: f32,
    radius: f32,
    rgb: (u8, u8, u8),
    xp: u32,
    score: u32,
) -> ZombieStats {
    ZombieStats {
        hp,
        speed,
        radius,
        color: Color::from_rgb(rgb.0, rgb.1, rgb.2),
        xp,
        score,
    }
}

impl fmt::Display for ZombieKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ZombieKind {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ZombieKind::ALL
            .into_iter()
            .find(|kind| kind.key().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| ParseError::UnknownZombie(value.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heavy_archetypes_resist_knockback_and_drop_rare_orbs() {
        assert_eq!(ZombieKind::Giant.knockback_resistance(), 0.1);
        assert_eq!(ZombieKind::Tank.knockback_resistance(), 0.3);
        assert_eq!(ZombieKind::Wolf.knockback_resistance(), 1.0);
        assert!(ZombieKind::Giant.drops_rare_orb());
        assert!(!ZombieKind::Parasite.drops_rare_orb());
    }

    #[test]
    fn normal_row_matches_table() {
        let stats = ZombieKind::Normal.stats();
        assert_eq!(stats.hp, 35.0);
        assert_eq!(stats.xp, 5);
        assert_eq!(stats.score, 10);
    }

    #[test]
    fn unknown_type_fails_fast() {
        assert_eq!("parasite_small".parse(), Ok(ZombieKind::ParasiteSmall));
        assert_eq!(
            "BANSHEE".parse::<ZombieKind>(),
            Err(ParseError::UnknownZombie("BANSHEE".to_owned()))
        );
    }
}
