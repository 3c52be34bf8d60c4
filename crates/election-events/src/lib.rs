//! Shared event and result types for the election simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! It is a dependency for all other crates in the workspace.

pub mod day;
pub mod event;
pub mod results;

// Re-export day types
pub use day::CampaignDay;

// Re-export event types
pub use event::*;

// Re-export result types
pub use results::{
    CandidateVotes, ClusterReturn, ElectionVerdict, ElectorateReturn, PartySeats,
};
