//! Election campaign simulator CLI.
//!
//! Run with: cargo run -p tribune
//!
//! Examples:
//!   cargo run -p tribune -- --days 14 --electorates 8
//!   cargo run -p tribune -- --seed 42 --events-out events.jsonl

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use tribune::RunOptions;

/// Election campaign simulator
#[derive(Parser, Debug)]
#[command(name = "election_sim")]
#[command(about = "Simulates a multi-party election campaign and counts the votes")]
struct Args {
    /// Days of campaigning before polling day (1 to 30)
    #[arg(long, default_value_t = 7)]
    days: u32,

    /// Electorates in play, taken from the front of the scenario (1 to 10)
    #[arg(long, default_value_t = 5)]
    electorates: usize,

    /// Random seed for reproducibility (drawn from entropy if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// TOML scenario file (compiled-in default if omitted)
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Mirror the event log to this JSONL file
    #[arg(long)]
    events_out: Option<PathBuf>,
}

fn main() {
    // Keep stdout clean for the reports; tracing goes to stderr.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let options = RunOptions {
        days: args.days,
        electorates: args.electorates,
        seed: args.seed,
        scenario: args.scenario,
        events_out: args.events_out,
    };

    match tribune::run(&options) {
        Ok(text) => println!("{}", text),
        Err(error) => {
            eprintln!("Error: {}", error);
            std::process::exit(1);
        }
    }
}
