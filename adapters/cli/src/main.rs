#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Headless command-line host that plays a Horde run with an autopilot.

mod autopilot;
mod report;
mod settings;

use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use horde_core::{Difficulty, Event, RunSummary};
use horde_simulation::{FrameClock, Phase, Simulation};
use horde_world::query;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use report::ReportHandle;
use settings::FileSettings;

const REPORT_TIMEOUT: Duration = Duration::from_secs(2);

/// Command-line arguments accepted by the headless host.
#[derive(Debug, Parser)]
#[command(name = "horde", version, about = "Plays a headless Horde survival run")]
struct CliArgs {
    /// Optional TOML configuration file with `[simulation]` and `[run]` tables.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Difficulty tier: easy, normal or hard.
    #[arg(long, value_name = "TIER")]
    difficulty: Option<String>,
    /// Seed shared by every random source.
    #[arg(long)]
    seed: Option<u64>,
    /// Simulated seconds after which the run is abandoned.
    #[arg(long, value_name = "SECONDS")]
    max_seconds: Option<u64>,
    /// Simulated frames per second.
    #[arg(long)]
    fps: Option<u32>,
    /// Raises the default log level to `debug`.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let mut settings = match &args.config {
        Some(path) => FileSettings::load(path)?,
        None => FileSettings::default(),
    };
    if let Some(seed) = args.seed {
        settings.simulation.seed = Some(seed);
    }
    if let Some(name) = &args.difficulty {
        settings.run.difficulty = name.clone();
    }
    if let Some(max_seconds) = args.max_seconds {
        settings.run.max_seconds = max_seconds;
    }
    if let Some(fps) = args.fps {
        settings.run.fps = fps;
    }
    let difficulty = settings.run.difficulty()?;

    let outcome = play(&settings, difficulty);
    match outcome {
        Outcome::Fallen(summary) => {
            println!("The horde overran you.");
            let report = ReportHandle::spawn(summary).context("failed to request the debrief")?;
            println!("{}", report.wait(REPORT_TIMEOUT));
        }
        Outcome::Survived(summary) => {
            println!("You outlasted the session.");
            println!("{}", report::compose(&summary)?);
        }
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// How a headless session ended.
#[derive(Debug)]
enum Outcome {
    /// The player died.
    Fallen(RunSummary),
    /// The time limit was reached first.
    Survived(RunSummary),
}

fn play(settings: &FileSettings, difficulty: Difficulty) -> Outcome {
    let mut simulation = Simulation::new(settings.simulation);
    let mut clock = FrameClock::new(settings.run.fps);
    let limit = Duration::from_secs(settings.run.max_seconds);
    let _ = simulation.start_run(difficulty, clock.now());
    info!(%difficulty, fps = settings.run.fps, "run started");

    while clock.now() < limit {
        let input = autopilot::input(simulation.world());
        for event in simulation.step(clock.tick(), &input) {
            log_event(&event);
            if let Event::GameOver { summary } = event {
                return Outcome::Fallen(summary);
            }
        }
        while let Phase::AwaitingUpgrade(offer) = simulation.phase() {
            let Some(choice) = autopilot::pick(offer).map(|choice| choice.upgrade) else {
                break;
            };
            match simulation.choose_upgrade(choice) {
                Ok(events) => events.iter().for_each(log_event),
                Err(error) => {
                    debug!(%error, "autopilot choice rejected");
                    break;
                }
            }
        }
    }
    Outcome::Survived(query::summary(simulation.world()))
}

fn log_event(event: &Event) {
    match event {
        Event::WaveAdvanced { wave } => info!(wave, "wave advanced"),
        Event::LevelUp { level } => info!(level, "level up"),
        Event::UpgradeApplied { upgrade, level } => {
            info!(upgrade = upgrade.key(), level, "upgrade chosen");
        }
        Event::StatsUpdated { stats } => debug!(
            hp = stats.hp,
            score = stats.score,
            wave = stats.wave,
            kills = stats.kills,
            "stats"
        ),
        _ => {}
    }
}
