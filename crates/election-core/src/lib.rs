//! Electoral Campaign Simulation Engine
//!
//! Simulates a multi-party national election: a generated world of parties,
//! candidates and voter clusters; a campaign window of randomized daily
//! events that push traits and opinions around; and an election-night tally
//! with a seat-by-seat count and an overall verdict.
//!
//! The pipeline runs in three phases over one seeded draw source:
//!
//! 1. [`setup`] generates electorates, clusters, parties and candidates
//!    from validated definitions.
//! 2. [`campaign`] schedules and resolves daily events, recording each one
//!    in the [`log`].
//! 3. [`tally`] counts clusters, seats electorates and settles the verdict.
//!
//! [`Election`] walks the phases end to end; the individual modules stay
//! public for callers that want a single phase.

pub mod campaign;
pub mod catalog;
pub mod error;
pub mod log;
pub mod model;
pub mod rng;
pub mod setup;
pub mod tally;

mod election;

pub use election::{Election, ElectionReturns};
pub use error::SetupError;
pub use log::EventLog;
pub use rng::{CampaignRng, RandomSource, ScriptedRandom};
