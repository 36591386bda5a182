//! Difficulty tiers and the pure functions that scale the run with them.
//!
//! Every function here is a plain lookup or arithmetic expression over its
//! arguments, so calling it twice with the same input always yields the same
//! output.

use std::{fmt, str::FromStr, time::Duration};

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Kills required per wave before the spawn-rate multiplier is applied.
const BASE_KILLS_PER_WAVE: f32 = 20.0;
/// Enemy hit points grow by this fraction per wave.
const HP_GROWTH_PER_WAVE: f32 = 0.1;
const SPAWN_INTERVAL_BASE_MS: f32 = 1_500.0;
const SPAWN_INTERVAL_STEP_MS: f32 = 100.0;
const SPAWN_INTERVAL_FLOOR_MS: f32 = 100.0;

/// Difficulty tier chosen before a run starts and fixed for its duration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Fewer, weaker, slower enemies and halved score.
    Easy,
    /// Baseline balance.
    #[default]
    Normal,
    /// More, tougher, faster enemies and doubled score.
    Hard,
}

/// Multipliers applied by a difficulty tier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DifficultyParams {
    /// Scales spawn cadence, batch size and kills per wave.
    pub spawn_rate: f32,
    /// Scales enemy hit points.
    pub enemy_hp: f32,
    /// Scales enemy speed.
    pub enemy_speed: f32,
    /// Scales score awarded per kill.
    pub score_mult: f32,
}

impl Difficulty {
    /// Every tier in ascending order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    /// Multiplier table for the tier.
    #[must_use]
    pub const fn params(self) -> DifficultyParams {
        match self {
            Difficulty::Easy => DifficultyParams {
                spawn_rate: 0.7,
                enemy_hp: 0.7,
                enemy_speed: 0.8,
                score_mult: 0.5,
            },
            Difficulty::Normal => DifficultyParams {
                spawn_rate: 1.0,
                enemy_hp: 1.0,
                enemy_speed: 1.0,
                score_mult: 1.0,
            },
            Difficulty::Hard => DifficultyParams {
                spawn_rate: 1.5,
                enemy_hp: 1.5,
                enemy_speed: 1.2,
                score_mult: 2.0,
            },
        }
    }

    /// Lower-case name used in configuration files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|tier| tier.name().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| ParseError::UnknownDifficulty(value.to_owned()))
    }
}

impl DifficultyParams {
    /// Number of kills that advance the wave counter by one.
    #[must_use]
    pub fn kills_per_wave(&self) -> u32 {
        ((BASE_KILLS_PER_WAVE * self.spawn_rate).round() as u32).max(1)
    }

    /// Hit points of a freshly spawned zombie with the given base value.
    #[must_use]
    pub fn enemy_hp(&self, base_hp: f32, wave: u32) -> f32 {
        base_hp * (1.0 + wave as f32 * HP_GROWTH_PER_WAVE) * self.enemy_hp
    }

    /// Speed of a freshly spawned zombie with the given base value.
    #[must_use]
    pub fn enemy_speed(&self, base_speed: f32) -> f32 {
        base_speed * self.enemy_speed
    }

    /// Time between spawn bursts in the given wave.
    #[must_use]
    pub fn spawn_interval(&self, wave: u32) -> Duration {
        let raw = (SPAWN_INTERVAL_BASE_MS - wave as f32 * SPAWN_INTERVAL_STEP_MS) / self.spawn_rate;
        Duration::from_millis(raw.max(SPAWN_INTERVAL_FLOOR_MS) as u64)
    }

    /// Zombies introduced by a single spawn burst in the given wave.
    #[must_use]
    pub fn spawn_batch(&self, wave: u32) -> u32 {
        (1.0 + (wave as f32 / 5.0) * self.spawn_rate).floor() as u32
    }

    /// Score awarded for a kill worth `base_score` points.
    #[must_use]
    pub fn score(&self, base_score: u32) -> u64 {
        (base_score as f32 * self.score_mult).floor() as u64
    }

    /// Reports whether reaching `kills` crosses a wave milestone.
    #[must_use]
    pub fn is_wave_milestone(&self, kills: u32) -> bool {
        kills > 0 && kills % self.kills_per_wave() == 0
    }
}
