//! Post-game debrief composed off the simulation thread.

use std::{fmt::Write as _, sync::mpsc, thread, time::Duration};

use anyhow::{Context, Result};
use horde_core::{RunSummary, UpgradeId};
use tracing::warn;

/// Text shown when the debrief cannot be produced in time.
pub(crate) const FALLBACK: &str = "Transmission lost. The horde keeps the details to itself.";

const STANDARD_LOADOUT: &str = "Standard pistol";

/// Pending debrief computed on its own thread.
#[derive(Debug)]
pub(crate) struct ReportHandle {
    receiver: mpsc::Receiver<Result<String>>,
}

impl ReportHandle {
    /// Starts composing the debrief for `summary` in the background.
    pub(crate) fn spawn(summary: RunSummary) -> Result<Self> {
        let (sender, receiver) = mpsc::channel();
        let _ = thread::Builder::new()
            .name("debrief".to_owned())
            .spawn(move || {
                let _ = sender.send(compose(&summary));
            })
            .context("failed to start the debrief thread")?;
        Ok(Self { receiver })
    }

    /// Waits up to `timeout` for the debrief, falling back to a fixed text.
    pub(crate) fn wait(self, timeout: Duration) -> String {
        match self.receiver.recv_timeout(timeout) {
            Ok(Ok(text)) => text,
            Ok(Err(error)) => {
                warn!(error = %format!("{error:#}"), "debrief failed");
                FALLBACK.to_owned()
            }
            Err(error) => {
                warn!(%error, "debrief unavailable");
                FALLBACK.to_owned()
            }
        }
    }
}

/// Comma separated list of owned upgrades, or the starting weapon when empty.
pub(crate) fn loadout(summary: &RunSummary) -> String {
    let entries: Vec<String> = summary
        .inventory
        .owned()
        .map(|(upgrade, _)| entry(summary, upgrade))
        .collect();
    if entries.is_empty() {
        STANDARD_LOADOUT.to_owned()
    } else {
        entries.join(", ")
    }
}

fn entry(summary: &RunSummary, upgrade: UpgradeId) -> String {
    let title = upgrade.definition().title;
    if summary.inventory.is_evolved(upgrade) {
        format!("{title} (evolved)")
    } else {
        format!("{title} Lv.{}", summary.inventory.level(upgrade))
    }
}

fn verdict(summary: &RunSummary) -> &'static str {
    match summary.wave {
        0..=2 => "The perimeter fell before the first real push.",
        3..=5 => "Held the line through the early surges.",
        6..=10 => "Outlasted the wolves and the giants alike.",
        _ => "A legend whispered about in every bunker.",
    }
}

/// Builds the debrief text for a finished run.
pub(crate) fn compose(summary: &RunSummary) -> Result<String> {
    let seconds = summary.time_survived.as_secs();
    let mut text = String::new();
    writeln!(
        text,
        "Difficulty {} | wave {} | level {} | {} kills | score {}",
        summary.difficulty, summary.wave, summary.level, summary.kills, summary.score
    )?;
    writeln!(text, "Survived {}m {:02}s", seconds / 60, seconds % 60)?;
    writeln!(text, "Loadout: {}", loadout(summary))?;
    write!(text, "{}", verdict(summary))?;
    Ok(text)
}
