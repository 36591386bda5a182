//! Upgrade catalogue and the inventory of levels held by the player.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{InventoryError, ParseError};

/// Level at which an upgrade becomes evolved.
pub const MAX_LEVEL: u8 = 5;

/// Closed set of upgrade identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UpgradeId {
    /// Shortens the primary gun cooldown.
    FireRate,
    /// Adds bullets to every primary gun volley.
    Multishot,
    /// Raises primary gun damage.
    Damage,
    /// Raises movement speed.
    Speed,
    /// Raises maximum hit points.
    MaxHp,
    /// Restores hit points over time.
    Regen,
    /// Widens the experience pickup radius.
    Magnet,
    /// Summons energy orbs circling the player.
    Orbitals,
    /// Summons sniper drones.
    Drone,
    /// Summons a flame-breathing dragon.
    Dragon,
    /// Launches homing missiles.
    Missile,
    /// Calls down lightning on visible zombies.
    Lightning,
    /// Drops proximity mines.
    Mine,
    /// Throws a returning axe.
    Axe,
}

/// Rarity tag presented alongside an upgrade choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    /// Frequently seen upgrades.
    Common,
    /// Uncommon upgrades.
    Rare,
    /// The strongest upgrades.
    Legendary,
}

/// Catalogue entry describing an upgrade to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpgradeDefinition {
    /// Short display title.
    pub title: &'static str,
    /// Effect of a linear level.
    pub description: &'static str,
    /// Effect unlocked at the evolved level.
    pub evolved_description: &'static str,
    /// Rarity tag.
    pub rarity: Rarity,
}

const fn definition(
    title: &'static str,
    description: &'static str,
    evolved_description: &'static str,
    rarity: Rarity,
) -> UpgradeDefinition {
    UpgradeDefinition {
        title,
        description,
        evolved_description,
        rarity,
    }
}

impl UpgradeId {
    /// Every upgrade in catalogue order.
    pub const ALL: [UpgradeId; 14] = [
        UpgradeId::FireRate,
        UpgradeId::Multishot,
        UpgradeId::Damage,
        UpgradeId::Speed,
        UpgradeId::MaxHp,
        UpgradeId::Regen,
        UpgradeId::Magnet,
        UpgradeId::Orbitals,
        UpgradeId::Drone,
        UpgradeId::Dragon,
        UpgradeId::Missile,
        UpgradeId::Lightning,
        UpgradeId::Mine,
        UpgradeId::Axe,
    ];

    /// Stable camel-case key used by hosts and configuration files.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            UpgradeId::FireRate => "fireRate",
            UpgradeId::Multishot => "multishot",
            UpgradeId::Damage => "damage",
            UpgradeId::Speed => "speed",
            UpgradeId::MaxHp => "maxHp",
            UpgradeId::Regen => "regen",
            UpgradeId::Magnet => "magnet",
            UpgradeId::Orbitals => "orbitals",
            UpgradeId::Drone => "drone",
            UpgradeId::Dragon => "dragon",
            UpgradeId::Missile => "missile",
            UpgradeId::Lightning => "lightning",
            UpgradeId::Mine => "mine",
            UpgradeId::Axe => "axe",
        }
    }

    /// Catalogue entry of the upgrade.
    #[must_use]
    pub const fn definition(self) -> UpgradeDefinition {
        match self {
            UpgradeId::FireRate => definition(
                "Rapid Cooling",
                "Primary weapon cooldown shortened.",
                "Gatling mode: fire rate greatly increased.",
                Rarity::Common,
            ),
            UpgradeId::Multishot => definition(
                "Shadow Volley",
                "Primary weapon fires an extra pair of bullets.",
                "Death nova: bullets fly in every direction at once.",
                Rarity::Legendary,
            ),
            UpgradeId::Damage => definition(
                "High-Explosive Rounds",
                "Primary weapon damage increased by 20%.",
                "Titan slayer: huge damage with strong knockback and piercing.",
                Rarity::Common,
            ),
            UpgradeId::Speed => definition(
                "Mech Frame",
                "Movement speed increased.",
                "Quantum thrusters: movement speed breaks its limits.",
                Rarity::Common,
            ),
            UpgradeId::MaxHp => definition(
                "Nano Armour",
                "Maximum health increased by 20%.",
                "Undying body: maximum health greatly increased.",
                Rarity::Rare,
            ),
            UpgradeId::Regen => definition(
                "Bio Repair",
                "Restore 1 health per second.",
                "Healing factor: regeneration greatly accelerated.",
                Rarity::Rare,
            ),
            UpgradeId::Magnet => definition(
                "Gravity Field",
                "Experience pickup radius increased.",
                "Black hole generator: pickup radius covers most of the screen.",
                Rarity::Common,
            ),
            UpgradeId::Orbitals => definition(
                "Plasma Shield",
                "Energy orbs circle around you.",
                "Saw halo: wider ring, double spin speed and double damage.",
                Rarity::Rare,
            ),
            UpgradeId::Drone => definition(
                "Sniper Drone",
                "A drone periodically shoots the nearest enemy for heavy damage.",
                "Swarm protocol: faster drones and a second drone.",
                Rarity::Rare,
            ),
            UpgradeId::Dragon => definition(
                "Dragon Pact",
                "A young dragon breathes fire at nearby enemies.",
                "Hellfire: the dragon grows and its breath widens.",
                Rarity::Legendary,
            ),
            UpgradeId::Missile => definition(
                "Micro Missiles",
                "Periodically launch homing missiles that explode on impact.",
                "Nuclear strike: three missiles per volley.",
                Rarity::Rare,
            ),
            UpgradeId::Lightning => definition(
                "Thunder Generator",
                "Lightning periodically strikes visible enemies.",
                "Wrath of the storm: strikes twice as often.",
                Rarity::Rare,
            ),
            UpgradeId::Mine => definition(
                "Proximity Mine",
                "Drop mines that explode when enemies step on them.",
                "Void trap: mines deal double damage.",
                Rarity::Common,
            ),
            UpgradeId::Axe => definition(
                "Returning Axe",
                "Throw a huge axe that cuts through enemies and flies back.",
                "Death spiral: a larger axe that stays airborne longer.",
                Rarity::Common,
            ),
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for UpgradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for UpgradeId {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        UpgradeId::ALL
            .into_iter()
            .find(|upgrade| upgrade.key() == value.trim())
            .ok_or_else(|| ParseError::UnknownUpgrade(value.to_owned()))
    }
}

/// Regime an upgrade level falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpgradeTier {
    /// Level zero; the upgrade has no effect.
    Inactive,
    /// Levels one through four, carrying the level.
    Linear(u8),
    /// The capped level with its qualitative bonus.
    Evolved,
}

/// Levels held for every upgrade, each in `0..=MAX_LEVEL`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Inventory {
    levels: [u8; 14],
}

impl Inventory {
    /// Level currently held for the upgrade.
    #[must_use]
    pub const fn level(&self, upgrade: UpgradeId) -> u8 {
        self.levels[upgrade.index()]
    }

    /// Reports whether the upgrade has reached the evolved level.
    #[must_use]
    pub const fn is_evolved(&self, upgrade: UpgradeId) -> bool {
        self.level(upgrade) >= MAX_LEVEL
    }

    /// Regime of the upgrade's current level.
    #[must_use]
    pub const fn tier(&self, upgrade: UpgradeId) -> UpgradeTier {
        match self.level(upgrade) {
            0 => UpgradeTier::Inactive,
            level if level >= MAX_LEVEL => UpgradeTier::Evolved,
            level => UpgradeTier::Linear(level),
        }
    }

    /// Raises the upgrade by one level and returns the new level.
    pub fn increment(&mut self, upgrade: UpgradeId) -> Result<u8, InventoryError> {
        let slot = &mut self.levels[upgrade.index()];
        if *slot >= MAX_LEVEL {
            return Err(InventoryError::AlreadyMaxed(upgrade));
        }
        *slot += 1;
        Ok(*slot)
    }

    /// Returns a copy with the upgrade set to `level`, capped at the evolved level.
    #[must_use]
    pub fn with_level(mut self, upgrade: UpgradeId, level: u8) -> Self {
        self.levels[upgrade.index()] = level.min(MAX_LEVEL);
        self
    }

    /// Iterates over every upgrade with a non-zero level.
    pub fn owned(&self) -> impl Iterator<Item = (UpgradeId, u8)> + '_ {
        UpgradeId::ALL
            .into_iter()
            .map(|upgrade| (upgrade, self.level(upgrade)))
            .filter(|(_, level)| *level > 0)
    }
}
