//! Election Night Result Types
//!
//! Outbound data produced by the tally phase for the reporting layer:
//! per-cluster and per-electorate returns, party seat counts, and the
//! overall verdict.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Votes credited to one candidate within one scope (cluster or electorate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateVotes {
    pub candidate: String,
    pub party: String,
    /// Vote count. Tally noise means totals need not sum to population.
    pub votes: i64,
}

/// Vote breakdown for one population cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterReturn {
    pub population: u32,
    pub votes: Vec<CandidateVotes>,
}

/// Full tally for one electorate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectorateReturn {
    pub electorate: String,
    pub population: u32,
    pub clusters: Vec<ClusterReturn>,
    /// Cumulative totals per candidate, in party registration order.
    pub totals: Vec<CandidateVotes>,
    /// The seat winner (strictly greatest total; earliest registered party
    /// wins ties).
    pub winner: CandidateVotes,
}

/// Final seat count for one party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartySeats {
    pub party: String,
    pub leader: String,
    pub seats: u32,
}

/// Overall outcome of the election.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ElectionVerdict {
    /// One party holds strictly more seats than every other.
    Majority {
        party: String,
        leader: String,
        seats: u32,
    },
    /// Two or more parties tie for the most seats (including all-zero).
    Hung { leading_seats: u32 },
}

impl ElectionVerdict {
    /// Returns true when no party achieved a strict seat maximum.
    pub fn is_hung(&self) -> bool {
        matches!(self, ElectionVerdict::Hung { .. })
    }
}

impl fmt::Display for ElectionVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElectionVerdict::Majority {
                party,
                leader,
                seats,
            } => write!(f, "{} forms government with {} seats under {}", party, seats, leader),
            ElectionVerdict::Hung { leading_seats } => {
                write!(f, "hung parliament, leading parties tied on {} seats", leading_seats)
            }
        }
    }
}
