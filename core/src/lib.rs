#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Horde survival simulation.
//!
//! This crate defines the message surface that connects the host adapter, the
//! authoritative world, and the per-frame systems. Spawning and weapon systems
//! submit [`Command`] values describing new entities, the world executes those
//! commands via its `apply` entry point, and every stage reports what happened
//! through [`Event`] values. The immutable balance tables (zombie stats, weapon
//! stats, difficulty tiers and the upgrade catalogue) live here as constant
//! lookups keyed by closed enums.

use std::time::Duration;

pub use glam::Vec2;
use serde::{Deserialize, Serialize};

pub mod cooldown;
pub mod difficulty;
pub mod error;
pub mod resolver;
pub mod upgrades;
pub mod weapons;
pub mod zombies;

pub use cooldown::Cooldown;
pub use difficulty::{Difficulty, DifficultyParams};
pub use error::{InventoryError, ParseError};
pub use upgrades::{Inventory, Rarity, UpgradeDefinition, UpgradeId, UpgradeTier, MAX_LEVEL};
pub use weapons::{WeaponKind, WeaponStats};
pub use zombies::{ZombieKind, ZombieStats};

/// Default width of the simulated world measured in world units.
pub const WORLD_WIDTH: f32 = 3_000.0;
/// Default height of the simulated world measured in world units.
pub const WORLD_HEIGHT: f32 = 3_000.0;
/// Collision radius of the player.
pub const PLAYER_RADIUS: f32 = 14.0;
/// Movement speed of the player before upgrades, in units per frame.
pub const PLAYER_SPEED_BASE: f32 = 4.0;
/// Hit points of the player before upgrades.
pub const PLAYER_HP_BASE: f32 = 100.0;
/// Experience required for the first level-up.
pub const XP_BASE_REQUIREMENT: u32 = 20;
/// Growth factor applied to the experience threshold after each level-up.
pub const XP_GROWTH_FACTOR: f64 = 1.3;
/// Pickup pull radius before magnet upgrades.
pub const MAGNET_RADIUS_BASE: f32 = 100.0;
/// Ring distance of orbital bodies before evolution.
pub const ORBITAL_RADIUS_BASE: f32 = 80.0;

/// Unique identifier assigned to a zombie.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ZombieId(u32);

impl ZombieId {
    /// Creates a new zombie identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Unique identifier assigned to a companion minion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MinionId(u32);

impl MinionId {
    /// Creates a new minion identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Visual tint attached to entities so adapters can draw them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

impl Color {
    /// Creates a new color from byte RGB components.
    #[must_use]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Red component of the color.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Green component of the color.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Blue component of the color.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }
}

/// Fixed palette used by the simulation when tagging entities.
pub mod palette {
    use super::Color;

    /// Blood burst emitted on direct hits.
    pub const BLOOD: Color = Color::from_rgb(0x88, 0x13, 0x37);
    /// Burst emitted when the player is touched.
    pub const PLAYER_HIT: Color = Color::from_rgb(0xef, 0x44, 0x44);
    /// Common experience orb.
    pub const XP_ORB: Color = Color::from_rgb(0x8b, 0x5c, 0xf6);
    /// Experience orb dropped by heavy zombies.
    pub const XP_ORB_RARE: Color = Color::from_rgb(0xec, 0x48, 0x99);
    /// Orbital body.
    pub const ORBITAL: Color = Color::from_rgb(0x06, 0xb6, 0xd4);
    /// Evolved orbital body.
    pub const ORBITAL_EVOLVED: Color = Color::from_rgb(0xf4, 0x72, 0xb6);
    /// Primary gun bullet.
    pub const BULLET: Color = Color::from_rgb(0xfa, 0xcc, 0x15);
    /// Primary gun bullet once damage is evolved.
    pub const BULLET_EVOLVED: Color = Color::from_rgb(0xef, 0x44, 0x44);
    /// Drone minion and its shots.
    pub const DRONE: Color = Color::from_rgb(0x38, 0xbd, 0xf8);
    /// Dragon minion and its flames.
    pub const DRAGON: Color = Color::from_rgb(0xf9, 0x73, 0x16);
    /// Homing missile.
    pub const MISSILE: Color = Color::from_rgb(0x94, 0xa3, 0xb8);
    /// Lightning strike burst.
    pub const LIGHTNING: Color = Color::from_rgb(0xc0, 0x84, 0xfc);
    /// Proximity mine.
    pub const MINE: Color = Color::from_rgb(0xef, 0x44, 0x44);
    /// Boomerang axe.
    pub const AXE: Color = Color::from_rgb(0xd9, 0x46, 0xef);
}

/// Axis-aligned rectangle in world space.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    /// Upper-left corner of the rectangle.
    pub origin: Vec2,
    /// Extent of the rectangle along each axis.
    pub size: Vec2,
}

impl Rect {
    /// Creates a rectangle from its upper-left corner and size.
    #[must_use]
    pub const fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Reports whether the point lies strictly inside the rectangle.
    #[must_use]
    pub fn contains_strict(&self, point: Vec2) -> bool {
        let max = self.origin + self.size;
        point.x > self.origin.x && point.x < max.x && point.y > self.origin.y && point.y < max.y
    }

    /// Reports whether the point lies inside the rectangle, edges included.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.origin + self.size;
        point.x >= self.origin.x && point.x <= max.x && point.y >= self.origin.y && point.y <= max.y
    }

    /// Clamps the point so that it stays at least `margin` away from every edge.
    #[must_use]
    pub fn clamp_inset(&self, point: Vec2, margin: f32) -> Vec2 {
        let min = self.origin + Vec2::splat(margin);
        let max = (self.origin + self.size - Vec2::splat(margin)).max(min);
        point.clamp(min, max)
    }
}

/// Aim source reported by the host for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Aim {
    /// Pointer-based aiming at a world-space point.
    Pointer(Vec2),
    /// Virtual aim stick reporting a normalized direction; an active stick also requests fire.
    Stick(Vec2),
}

impl Default for Aim {
    fn default() -> Self {
        Self::Pointer(Vec2::ZERO)
    }
}

/// Normalized control snapshot consumed by the simulation every frame.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct FrameInput {
    /// Keyboard or gamepad axis input; each component lies in `-1.0..=1.0`.
    pub keyboard: Vec2,
    /// Virtual movement joystick deflection.
    pub joystick: Vec2,
    /// Active aim source.
    pub aim: Aim,
    /// Whether the primary fire button is held.
    pub fire: bool,
}

impl FrameInput {
    /// Combines keyboard and joystick input into a movement vector of length at most one.
    ///
    /// Each source is limited to unit length independently before the sum is
    /// limited again, so diagonal keyboard input never outruns a single axis.
    #[must_use]
    pub fn movement(&self) -> Vec2 {
        let combined = self.keyboard.clamp_length_max(1.0) + self.joystick.clamp_length_max(1.0);
        combined.clamp_length_max(1.0)
    }

    /// Reports whether the primary weapon should fire this frame.
    #[must_use]
    pub const fn wants_fire(&self) -> bool {
        self.fire || matches!(self.aim, Aim::Stick(_))
    }
}

/// Motion and contact behaviour attached to a projectile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BulletBehavior {
    /// Travels in a straight line.
    Ballistic,
    /// Re-created every frame on the ring around the player.
    Orbital,
    /// Steers toward a locked target and detonates on contact.
    Homing {
        /// Weak reference to the zombie being chased.
        target: Option<ZombieId>,
    },
    /// Stationary hazard that detonates on contact.
    Mine,
    /// Decelerates, then flies back to the player.
    Boomerang {
        /// Whether the projectile has entered its returning phase.
        returning: bool,
    },
}

impl BulletBehavior {
    /// Reports whether the bullet is an orbital body.
    #[must_use]
    pub const fn is_orbital(&self) -> bool {
        matches!(self, Self::Orbital)
    }

    /// Reports whether the bullet is a boomerang.
    #[must_use]
    pub const fn is_boomerang(&self) -> bool {
        matches!(self, Self::Boomerang { .. })
    }
}

/// Description of a projectile the world should create.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BulletSpawn {
    /// Initial position in world space.
    pub position: Vec2,
    /// Initial velocity in units per frame.
    pub velocity: Vec2,
    /// Collision radius.
    pub radius: f32,
    /// Damage applied per contact or detonation.
    pub damage: f32,
    /// Tint used by adapters.
    pub color: Color,
    /// Additional contacts the bullet survives before removal.
    pub piercing: Option<u32>,
    /// Remaining lifetime in frames.
    pub lifetime: Option<u32>,
    /// Knockback magnitude applied to struck zombies.
    pub knockback: Option<f32>,
    /// Motion and contact behaviour.
    pub behavior: BulletBehavior,
}

/// Cosmetic particle burst request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Burst {
    /// Centre of the burst.
    pub origin: Vec2,
    /// Particle tint.
    pub color: Color,
    /// Number of particles.
    pub count: u32,
    /// Scale applied to particle speed and size.
    pub size: f32,
}

impl Burst {
    /// Creates a burst description.
    #[must_use]
    pub const fn new(origin: Vec2, color: Color, count: u32, size: f32) -> Self {
        Self {
            origin,
            color,
            count,
            size,
        }
    }
}

/// Audible moments an audio adapter may react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    /// The primary gun fired.
    Shoot,
    /// A zombie survived a direct hit.
    Hit,
    /// A mine or missile detonated.
    Explosion,
    /// An experience orb was collected.
    XpPickup,
    /// The player gained a level.
    LevelUp,
}

/// Kind of companion minion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MinionKind {
    /// Long-range sniper drone.
    Drone,
    /// Short-range flame-breathing dragon.
    Dragon,
}

/// Commands that express all permissible entity creations and host actions.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Resets every entity and counter and begins a new run.
    StartRun {
        /// Difficulty tier fixed for the run.
        difficulty: Difficulty,
        /// Host timestamp at which the run begins.
        started_at: Duration,
    },
    /// Raises the level of an upgrade chosen by the host.
    ApplyUpgrade {
        /// Upgrade that was chosen.
        upgrade: UpgradeId,
    },
    /// Introduces a zombie into the world.
    SpawnZombie {
        /// Kind of zombie to create.
        kind: ZombieKind,
        /// Spawn position in world space.
        position: Vec2,
        /// Hit points after wave and difficulty scaling.
        max_hp: f32,
        /// Speed after difficulty scaling.
        speed: f32,
    },
    /// Launches a projectile.
    SpawnBullet {
        /// Projectile description.
        bullet: BulletSpawn,
    },
    /// Removes every orbital body and replaces it with the provided ring.
    ReplaceOrbitals {
        /// Orbital bodies for this frame.
        orbitals: Vec<BulletSpawn>,
    },
    /// Applies damage to a zombie directly, bypassing projectile collision.
    StrikeZombie {
        /// Zombie that was struck.
        zombie: ZombieId,
        /// Damage applied.
        damage: f32,
    },
    /// Emits a cosmetic particle burst.
    SpawnBurst {
        /// Burst description.
        burst: Burst,
    },
    /// Records that a minion locked onto a target or lost it.
    RetargetMinion {
        /// Minion being updated.
        minion: MinionId,
        /// New target, if any.
        target: Option<ZombieId>,
    },
    /// Records that a minion fired in the provided direction.
    MinionFired {
        /// Minion that fired.
        minion: MinionId,
        /// Facing angle in radians.
        angle: f32,
        /// Host timestamp of the shot.
        at: Duration,
    },
    /// Spins a minion that found nothing to shoot.
    IdleMinion {
        /// Minion that idles.
        minion: MinionId,
    },
    /// Forwards an audible moment to the host.
    EmitCue {
        /// Which sound should play.
        cue: Cue,
    },
}

/// Events broadcast by the world and systems while a frame is processed.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Announces that a new run began.
    RunStarted {
        /// Difficulty tier fixed for the run.
        difficulty: Difficulty,
    },
    /// Confirms that a zombie entered the world.
    ZombieSpawned {
        /// Identifier assigned to the zombie.
        zombie: ZombieId,
        /// Kind of the zombie.
        kind: ZombieKind,
    },
    /// Reports that a zombie died and its rewards were granted.
    ZombieKilled {
        /// Identifier of the zombie.
        zombie: ZombieId,
        /// Kind of the zombie.
        kind: ZombieKind,
        /// Position where it died.
        position: Vec2,
        /// Score awarded for the kill.
        score: u64,
    },
    /// Reports that the kill count crossed a wave milestone.
    WaveAdvanced {
        /// Wave that became active.
        wave: u32,
    },
    /// Reports that zombies touched the player this frame.
    PlayerDamaged {
        /// Damage taken this frame.
        amount: f32,
        /// Hit points remaining.
        hp: f32,
    },
    /// Reports that the player collected an experience orb.
    XpCollected {
        /// Experience gained.
        amount: u32,
    },
    /// Reports that the player reached a new level.
    LevelUp {
        /// Level reached.
        level: u32,
    },
    /// Requests that the host present an upgrade choice.
    UpgradeOffered {
        /// Candidate upgrades.
        offer: UpgradeOffer,
    },
    /// Confirms that an upgrade level was raised.
    UpgradeApplied {
        /// Upgrade that changed.
        upgrade: UpgradeId,
        /// Level after the change.
        level: u8,
    },
    /// Decimated stats snapshot for display.
    StatsUpdated {
        /// Snapshot of the player's progress.
        stats: StatsSnapshot,
    },
    /// Terminal event emitted once when the player dies.
    GameOver {
        /// Final run summary.
        summary: RunSummary,
    },
    /// Audible moment for an audio adapter.
    Cue {
        /// Which sound should play.
        cue: Cue,
    },
}

/// Display-oriented snapshot of the player's progress.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Current hit points, never negative.
    pub hp: f32,
    /// Maximum hit points.
    pub max_hp: f32,
    /// Accumulated score.
    pub score: u64,
    /// Active wave.
    pub wave: u32,
    /// Zombies killed.
    pub kills: u32,
    /// Experience toward the next level.
    pub xp: u32,
    /// Experience required for the next level.
    pub next_level_xp: u32,
    /// Current level.
    pub level: u32,
}

/// Final summary carried by the terminal game-over event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Final score.
    pub score: u64,
    /// Zombies killed.
    pub kills: u32,
    /// Wave reached.
    pub wave: u32,
    /// Time elapsed between run start and death.
    pub time_survived: Duration,
    /// Player level reached.
    pub level: u32,
    /// Upgrade levels at the moment of death.
    pub inventory: Inventory,
    /// Difficulty tier of the run.
    pub difficulty: Difficulty,
}

/// One candidate presented to the host on level-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeChoice {
    /// Upgrade being offered.
    pub upgrade: UpgradeId,
    /// Rarity tag from the catalogue.
    pub rarity: Rarity,
    /// Level currently held.
    pub current_level: u8,
    /// Whether choosing it reaches the evolved level.
    pub evolves: bool,
}

/// Set of up to three upgrades the host must choose from.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpgradeOffer {
    choices: Vec<UpgradeChoice>,
}

impl UpgradeOffer {
    /// Maximum number of choices offered at once.
    pub const MAX_CHOICES: usize = 3;

    /// Creates an offer from the provided choices, keeping at most three.
    #[must_use]
    pub fn new(mut choices: Vec<UpgradeChoice>) -> Self {
        choices.truncate(Self::MAX_CHOICES);
        Self { choices }
    }

    /// Candidates in presentation order.
    #[must_use]
    pub fn choices(&self) -> &[UpgradeChoice] {
        &self.choices
    }

    /// Reports whether the upgrade is among the candidates.
    #[must_use]
    pub fn contains(&self, upgrade: UpgradeId) -> bool {
        self.choices.iter().any(|choice| choice.upgrade == upgrade)
    }

    /// Reports whether nothing could be offered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }
}
