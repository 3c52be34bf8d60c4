//! Election night front end.
//!
//! Wires scenario loading, the campaign engine and the text reports into
//! the `election_sim` binary: briefing, day-by-day coverage, post-campaign
//! report, vote distribution and the verdict, in that order. The pipeline
//! lives here rather than in `main.rs` so integration tests can run it
//! whole.

pub mod coverage;
pub mod report;
pub mod scenario;

pub use scenario::{Scenario, ScenarioError};

use std::path::PathBuf;
use thiserror::Error;

use election_core::{CampaignRng, Election, EventLog, SetupError};

/// Shortest campaign the CLI accepts, in days.
pub const MIN_DAYS: u32 = 1;

/// Longest campaign the CLI accepts, in days.
pub const MAX_DAYS: u32 = 30;

/// Top-level errors for the `election_sim` binary.
#[derive(Debug, Error)]
pub enum TribuneError {
    #[error("campaign must run between 1 and 30 days inclusive, got {0}")]
    DaysOutOfRange(u32),

    #[error(transparent)]
    Scenario(#[from] ScenarioError),

    #[error("could not set up the election: {0}")]
    Setup(#[from] SetupError),

    #[error("event log I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything one simulated election run needs.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Days of campaigning before polling day.
    pub days: u32,
    /// Electorates in play, taken from the front of the scenario.
    pub electorates: usize,
    /// Seed for the run; `None` draws one from entropy.
    pub seed: Option<u64>,
    /// Scenario file; `None` uses the compiled-in default.
    pub scenario: Option<PathBuf>,
    /// JSONL event log mirror; `None` keeps the log in memory only.
    pub events_out: Option<PathBuf>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            days: 7,
            electorates: 5,
            seed: None,
            scenario: None,
            events_out: None,
        }
    }
}

/// Runs one complete election and returns the assembled report text.
///
/// Order matches the night itself: the briefing shows the field before any
/// event has fired, then the campaign coverage, then the count.
pub fn run(options: &RunOptions) -> Result<String, TribuneError> {
    if !(MIN_DAYS..=MAX_DAYS).contains(&options.days) {
        return Err(TribuneError::DaysOutOfRange(options.days));
    }

    let scenario = match &options.scenario {
        Some(path) => Scenario::from_file(path)?,
        None => Scenario::default(),
    };
    let defs = scenario.to_defs(options.electorates)?;

    let mut rng = match options.seed {
        Some(seed) => CampaignRng::from_seed(seed),
        None => CampaignRng::from_entropy(),
    };
    let log = match &options.events_out {
        Some(path) => EventLog::to_file(path)?,
        None => EventLog::null(),
    };

    tracing::info!(
        days = options.days,
        electorates = options.electorates,
        "setting up election"
    );
    let mut election = Election::generate(&defs, log, &mut rng)?;

    let mut sections = Vec::new();
    sections.push(report::briefing(&election));

    election.run_campaign(options.days, &mut rng)?;
    let names: Vec<&str> = election
        .electorates()
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    sections.push(coverage::render_campaign(
        election.log(),
        options.days,
        &names,
    ));
    sections.push(report::post_campaign_report(&election));

    let returns = election.tally(&mut rng);
    sections.push(report::returns_report(&returns));
    sections.push(report::verdict_report(&returns.seats, &returns.verdict));

    election.flush_log()?;
    Ok(sections.join("\n\n"))
}
