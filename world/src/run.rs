//! Run-wide counters owned by the world and passed explicitly to systems.

use std::time::Duration;

use horde_core::{Difficulty, DifficultyParams, Inventory};

/// Result of recording a kill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KillOutcome {
    /// Score awarded for the kill.
    pub score: u64,
    /// Wave that became active if the kill crossed a milestone.
    pub wave_advanced: Option<u32>,
}

/// Score, kills, wave, inventory and clocks of the current run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunState {
    difficulty: Difficulty,
    params: DifficultyParams,
    inventory: Inventory,
    score: u64,
    kills: u32,
    wave: u32,
    started_at: Duration,
    now: Duration,
    frame: u64,
}

impl RunState {
    /// Creates the initial state of a run.
    #[must_use]
    pub fn new(difficulty: Difficulty, started_at: Duration) -> Self {
        Self {
            difficulty,
            params: difficulty.params(),
            inventory: Inventory::default(),
            score: 0,
            kills: 0,
            wave: 1,
            started_at,
            now: started_at,
            frame: 0,
        }
    }

    /// Difficulty tier of the run.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Multipliers of the difficulty tier.
    #[must_use]
    pub const fn params(&self) -> &DifficultyParams {
        &self.params
    }

    /// Upgrade levels held by the player.
    #[must_use]
    pub const fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Mutable access to the upgrade levels.
    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    /// Accumulated score.
    #[must_use]
    pub const fn score(&self) -> u64 {
        self.score
    }

    /// Zombies killed so far.
    #[must_use]
    pub const fn kills(&self) -> u32 {
        self.kills
    }

    /// Active wave, starting at one.
    #[must_use]
    pub const fn wave(&self) -> u32 {
        self.wave
    }

    /// Host timestamp at which the run started.
    #[must_use]
    pub const fn started_at(&self) -> Duration {
        self.started_at
    }

    /// Host timestamp of the frame being processed.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Time elapsed since the run started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.now.saturating_sub(self.started_at)
    }

    /// Number of frames processed so far.
    #[must_use]
    pub const fn frame(&self) -> u64 {
        self.frame
    }

    /// Marks the start of a frame at the provided host timestamp.
    pub fn begin_frame(&mut self, now: Duration) {
        self.now = now.max(self.now);
        self.frame = self.frame.wrapping_add(1);
    }

    /// Awards score for a kill worth `base_score` and advances the wave on milestones.
    pub fn record_kill(&mut self, base_score: u32) -> KillOutcome {
        let score = self.params.score(base_score);
        self.score = self.score.saturating_add(score);
        self.kills = self.kills.saturating_add(1);
        let wave_advanced = if self.params.is_wave_milestone(self.kills) {
            self.wave += 1;
            Some(self.wave)
        } else {
            None
        };
        KillOutcome {
            score,
            wave_advanced,
        }
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new(Difficulty::default(), Duration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wave_advances_every_twenty_kills_on_normal() {
        let mut run = RunState::default();
        for _ in 0..19 {
            assert_eq!(run.record_kill(10).wave_advanced, None);
        }
        assert_eq!(run.record_kill(10).wave_advanced, Some(2));
        assert_eq!(run.score(), 200);
        assert_eq!(run.kills(), 20);
    }

    #[test]
    fn easy_scores_are_halved_and_floored() {
        let mut run = RunState::new(Difficulty::Easy, Duration::ZERO);
        assert_eq!(run.record_kill(25).score, 12);
    }

    #[test]
    fn clock_never_runs_backwards() {
        let mut run = RunState::new(Difficulty::Normal, Duration::from_secs(5));
        run.begin_frame(Duration::from_secs(7));
        run.begin_frame(Duration::from_secs(6));
        assert_eq!(run.elapsed(), Duration::from_secs(2));
        assert_eq!(run.frame(), 2);
    }
}
