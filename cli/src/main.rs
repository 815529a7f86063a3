//! tally: in-memory voting manager demo.

mod config;
mod demo;
mod input;

use anyhow::Context;
use clap::Parser;
use config::DemoConfig;
use std::path::PathBuf;
use tally_utils::LogFormat;
use tally_voting::{SeededRandom, SystemClock, ThreadRandom, VotingSystem};

#[derive(Parser)]
#[command(name = "tally", about = "In-memory voting manager")]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "TALLY_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "TALLY_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Seed for the random vote paths, for reproducible runs.
    #[arg(long, env = "TALLY_SEED")]
    seed: Option<u64>,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Demonstration driver.
    #[command(name = "demo")]
    Demo {
        #[command(subcommand)]
        action: DemoAction,
    },
}

#[derive(clap::Subcommand)]
enum DemoAction {
    /// Seed the sessions, read choices from stdin until "Q", vote and report.
    Run,
    /// Seed the sessions and list them.
    Sessions,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => DemoConfig::from_toml_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => DemoConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    tally_utils::init_tracing(&config.log_level, config.log_format);
    if let Some(ref path) = cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    let mut system = match config.seed {
        Some(seed) => {
            tracing::info!(seed, "using seeded random source");
            VotingSystem::with_sources(Box::new(SystemClock), Box::new(SeededRandom::new(seed)))
        }
        None => VotingSystem::with_sources(Box::new(SystemClock), Box::new(ThreadRandom)),
    };
    let created = demo::seed_sessions(&mut system, &config.sessions);
    tracing::info!(created, "sessions ready");

    match cli.command {
        Command::Demo { action } => match action {
            DemoAction::Run => {
                let stdin = std::io::stdin();
                demo::run(&mut system, stdin.lock()).context("reading choices")?;
            }
            DemoAction::Sessions => demo::list_sessions(&system),
        },
    }
    Ok(())
}
