use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use massive_motion::sequence::SequenceKind;
use massive_motion::simulation::{MotionConfig, Simulation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Runs the massive-motion particle simulation without a display.
#[derive(Debug, Parser)]
#[command(name = "massive-motion", version, about)]
struct Arguments {
    /// Properties file to read the configuration from.
    #[arg(default_value = "MassiveMotion.txt")]
    properties: PathBuf,

    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 200)]
    ticks: u64,

    /// Seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Sequence strategy, overriding the `list` key of the configuration.
    #[arg(long)]
    list: Option<SequenceKind>,

    /// Sleep `timer_delay` between ticks.
    #[arg(long)]
    realtime: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let arguments = Arguments::parse();

    tracing::info!("Massive Motion starting");

    let mut config = MotionConfig::load(&arguments.properties).with_context(|| {
        format!(
            "invalid configuration in {}",
            arguments.properties.display()
        )
    })?;
    if let Some(list) = arguments.list {
        config.list = list;
    }
    let delay = config.timer_delay;

    let mut simulation = match arguments.seed {
        Some(seed) => Simulation::seeded(config, seed),
        None => Simulation::from_os_rng(config),
    }
    .context("failed to start simulation")?;

    for _ in 0..arguments.ticks {
        let report = simulation.tick();
        tracing::debug!(
            tick = report.tick,
            pruned = report.pruned,
            spawned = report.spawned,
            population = report.population,
            "tick"
        );
        if arguments.realtime {
            std::thread::sleep(delay);
        }
    }

    tracing::info!(
        list = %simulation.config().list,
        ticks = simulation.ticks(),
        population = simulation.bodies().size(),
        "simulation finished"
    );
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("massive_motion=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}
