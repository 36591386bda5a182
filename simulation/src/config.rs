//! Tunable parameters of a simulation instance.

use horde_core::{Vec2, WORLD_HEIGHT, WORLD_WIDTH};
use serde::{Deserialize, Serialize};

/// Parameters used to construct a [`crate::Simulation`].
///
/// Every field has a default so partial configuration files deserialize.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Width of the world in world units.
    pub world_width: f32,
    /// Height of the world in world units.
    pub world_height: f32,
    /// Width of the visible window used for the spawn ring and lightning.
    pub viewport_width: f32,
    /// Height of the visible window.
    pub viewport_height: f32,
    /// Number of frames between two stats snapshots.
    pub stats_interval_frames: u64,
    /// Seed for every random source; drawn from the operating system when absent.
    pub seed: Option<u64>,
}

impl SimulationConfig {
    /// Size of the visible window.
    #[must_use]
    pub fn viewport(&self) -> Vec2 {
        Vec2::new(self.viewport_width, self.viewport_height)
    }

    /// Returns the configuration with a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            viewport_width: 1_280.0,
            viewport_height: 720.0,
            stats_interval_frames: 10,
            seed: None,
        }
    }
}
