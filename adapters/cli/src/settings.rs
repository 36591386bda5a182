use std::{fs, path::Path};

use anyhow::{Context, Result};
use horde_core::Difficulty;
use horde_simulation::SimulationConfig;
use serde::Deserialize;

/// Contents of the optional TOML configuration file.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct FileSettings {
    /// Parameters forwarded to the simulation.
    pub(crate) simulation: SimulationConfig,
    /// Parameters of the headless session.
    pub(crate) run: RunSettings,
}

/// Session parameters of the headless host.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct RunSettings {
    /// Difficulty name, parsed case-insensitively.
    pub(crate) difficulty: String,
    /// Simulated seconds after which the session stops even if the player lives.
    pub(crate) max_seconds: u64,
    /// Simulated frames per second.
    pub(crate) fps: u32,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default().name().to_owned(),
            max_seconds: 600,
            fps: 60,
        }
    }
}

impl RunSettings {
    /// Parses the configured difficulty name.
    pub(crate) fn difficulty(&self) -> Result<Difficulty> {
        self.difficulty
            .parse()
            .with_context(|| format!("invalid difficulty in configuration: `{}`", self.difficulty))
    }
}

impl FileSettings {
    /// Reads settings from `path`.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
