mod sim;

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use sprite::geom::Size;
use sprite::{ControllerConfig, SetupError};

use crate::sim::{Gesture, Simulation};

#[derive(Debug, thiserror::Error)]
enum SimError {
    #[error("could not read config {path}: {source}")]
    ReadConfig { path: PathBuf, source: std::io::Error },
    #[error("knight setup failed: {0}")]
    Setup(#[from] SetupError),
    #[error("could not encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "knight-sim", about = "Run the walking knight headless and report what it does")]
struct Cli {
    /// Number of frames to simulate.
    #[arg(long, env = "KNIGHT_TICKS", default_value_t = 1200)]
    ticks: u64,

    /// Seed for idle timers and bounce aim.
    #[arg(long, env = "KNIGHT_SEED", default_value_t = 7)]
    seed: u64,

    #[arg(long, env = "KNIGHT_WIDTH", default_value_t = 1000.0)]
    width: f64,

    #[arg(long, env = "KNIGHT_HEIGHT", default_value_t = 350.0)]
    height: f64,

    /// JSON file with tuning overrides.
    #[arg(long, env = "KNIGHT_CONFIG")]
    config: Option<PathBuf>,

    /// Throw the knight: `X,Y@TICK`. Repeatable.
    #[arg(long = "gesture")]
    gestures: Vec<Gesture>,

    /// Print every stage call as a JSON line, then the report.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), SimError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    let mut sim = Simulation::new(Size::new(cli.width, cli.height), cli.seed, config, cli.gestures)?;
    let start = sim.controller().position();
    tracing::debug!(seed = cli.seed, x = start.x, y = start.y, policy = ?sim.controller().config().drag_policy, "knight placed");

    let mut encode_error = None;
    let report = sim.run(cli.ticks, |call| {
        if !cli.json || encode_error.is_some() {
            return;
        }
        match serde_json::to_string(call) {
            Ok(line) => println!("{line}"),
            Err(e) => encode_error = Some(e),
        }
    });
    if let Some(e) = encode_error {
        return Err(e.into());
    }

    if cli.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        for t in &report.transitions {
            println!("{:>6}  {} -> {}", t.tick, t.from, t.to);
        }
        println!(
            "{} ticks, {} transitions, {} clip swaps; ended {} at ({:.1}, {:.1}) facing {:?}",
            report.ticks,
            report.transitions.len(),
            report.clip_swaps,
            report.final_state,
            report.position.x,
            report.position.y,
            report.facing,
        );
    }
    tracing::info!(
        ticks = report.ticks,
        transitions = report.transitions.len(),
        clip_swaps = report.clip_swaps,
        state = report.final_state,
        x = report.position.x,
        y = report.position.y,
        "simulation finished"
    );
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<ControllerConfig, SimError> {
    let Some(path) = path else {
        return Ok(ControllerConfig::default());
    };
    let raw = fs::read_to_string(path).map_err(|source| SimError::ReadConfig { path: path.clone(), source })?;
    let config = ControllerConfig::from_json(&raw)?;
    tracing::debug!(path = %path.display(), "loaded config overrides");
    Ok(config)
}
