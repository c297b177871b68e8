// ABOUTME: Ironlog CLI - run the coaching pipeline against a JSON program fixture
// ABOUTME: Also inspects mesocycle phases and pattern inference for a single exercise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors
//!
//! Usage:
//! ```bash
//! # Save every logged exercise of one session and print the outcomes
//! ironlog-cli evaluate --program program.json --session 6f1c...
//!
//! # Save a single exercise and write the updated store back out
//! ironlog-cli evaluate --program program.json --session 6f1c... \
//!     --exercise barbell_bench_press --output updated.json
//!
//! # Which phase is week 8, and what RIR should a 2.0 base become?
//! ironlog-cli phase --week 8 --base-rir 2.0
//!
//! # How is an exercise classified?
//! ironlog-cli pattern --exercise romanian_deadlift --spine-sensitive
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ironlog::logging::{LogFormat, LoggingConfig};
use std::path::PathBuf;
use tracing::debug;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "ironlog-cli",
    about = "Ironlog strength progression CLI",
    long_about = "Runs the Ironlog progression engine against JSON program fixtures and inspects its rules."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Run the save pipeline for a logged session
    Evaluate {
        /// Program fixture (sessions and personal records) as JSON
        #[arg(long)]
        program: PathBuf,

        /// Session to evaluate
        #[arg(long)]
        session: Uuid,

        /// Only save this exercise (defaults to every item in the session)
        #[arg(long)]
        exercise: Option<String>,

        /// Write the updated program here after saving
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Show the mesocycle phase for a week
    Phase {
        /// Absolute week number in the block
        #[arg(long)]
        week: u32,

        /// Base RIR target before the phase adjustment
        #[arg(long, default_value = "2.0")]
        base_rir: f64,
    },

    /// Show the inferred pattern and progression settings for an exercise
    Pattern {
        /// Exercise identity, e.g. `barbell_bench_press`
        #[arg(long)]
        exercise: String,

        /// Display name used when the identity is not recognized
        #[arg(long)]
        name: Option<String>,

        /// Treat the exercise as spine-sensitive
        #[arg(long)]
        spine_sensitive: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    LoggingConfig::from_env()
        .with_level(level)
        .with_format(LogFormat::Compact)
        .init()?;
    debug!("Ironlog CLI starting");

    let output = match cli.command {
        Command::Evaluate {
            program,
            session,
            exercise,
            output,
        } => commands::evaluate::run(&program, session, exercise.as_deref(), output.as_deref())?,
        Command::Phase { week, base_rir } => commands::inspect::phase(week, base_rir),
        Command::Pattern {
            exercise,
            name,
            spine_sensitive,
        } => commands::inspect::pattern(&exercise, name.as_deref(), spine_sensitive),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
