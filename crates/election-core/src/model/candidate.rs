//! Candidates and their campaign state.

use super::stance::Stance;
use super::traits::{Campaigner, TraitSet};
use serde::{Deserialize, Serialize};

/// A person contesting the election: either a fielded electorate candidate
/// or a party leader.
///
/// The vote counters belong to the tally phase. `stances_won` and
/// `cluster_votes` are scoped to the cluster currently being counted;
/// `total_votes` accumulates across the whole electorate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    /// Electorate contested. `None` for party leaders, who run nation-wide.
    pub electorate: Option<String>,
    pub traits: TraitSet,
    /// One stance per catalog issue, in catalog order.
    pub stances: Vec<Stance>,
    /// Votes credited in the cluster currently being tallied.
    pub cluster_votes: i64,
    /// Running total across all clusters tallied so far.
    pub total_votes: i64,
    /// Issue slots won in the cluster currently being tallied.
    pub stances_won: u32,
}

impl Candidate {
    /// Creates a candidate with zeroed vote counters.
    pub fn new(
        name: impl Into<String>,
        electorate: Option<String>,
        traits: TraitSet,
        stances: Vec<Stance>,
    ) -> Self {
        Self {
            name: name.into(),
            electorate,
            traits,
            stances,
            cluster_votes: 0,
            total_votes: 0,
            stances_won: 0,
        }
    }
}

impl Campaigner for Candidate {
    fn name(&self) -> &str {
        &self.name
    }

    fn traits(&self) -> &TraitSet {
        &self.traits
    }

    fn traits_mut(&mut self) -> &mut TraitSet {
        &mut self.traits
    }
}
