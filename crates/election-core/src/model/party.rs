//! Parties, leaders and managerial teams.

use super::candidate::Candidate;
use super::traits::{Campaigner, Characteristic, TraitSet};
use serde::{Deserialize, Serialize};

/// Inclusive draw bounds for one issue's stance at generation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StanceRange {
    pub sig_min: i32,
    pub sig_max: i32,
    pub app_min: i32,
    pub app_max: i32,
}

impl StanceRange {
    pub fn new(sig_min: i32, sig_max: i32, app_min: i32, app_max: i32) -> Self {
        Self {
            sig_min,
            sig_max,
            app_min,
            app_max,
        }
    }
}

/// The party office that shields candidates from trouble.
///
/// Only its event-handling rating matters in play; it is applied as a
/// modifier in scandal and leader-event rolls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerialTeam {
    pub name: String,
    pub traits: TraitSet,
}

impl ManagerialTeam {
    pub fn new(name: impl Into<String>, traits: TraitSet) -> Self {
        Self {
            name: name.into(),
            traits,
        }
    }

    /// Event-handling rating applied as a roll modifier.
    pub fn event_handling(&self) -> i32 {
        self.traits.get(Characteristic::EventHandling)
    }
}

impl Campaigner for ManagerialTeam {
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

/// A registered party with its leader, machine and fielded candidates.
///
/// Registration order is load-bearing: participant draws, tally iteration
/// and tie-breaks all run over parties in the order they were registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    pub name: String,
    /// Flavor line shown in the pre-campaign briefing.
    pub blurb: String,
    pub leader: Candidate,
    pub team: ManagerialTeam,
    /// Generation-time stance draw ranges, one per catalog issue.
    pub stance_ranges: Vec<StanceRange>,
    /// Fielded candidates, one per electorate, in electorate order.
    pub candidates: Vec<Candidate>,
    /// Seats won. Only the tally phase increments this.
    pub seats_won: u32,
}

impl Party {
    pub fn new(
        name: impl Into<String>,
        blurb: impl Into<String>,
        leader: Candidate,
        team: ManagerialTeam,
        stance_ranges: Vec<StanceRange>,
        candidates: Vec<Candidate>,
    ) -> Self {
        Self {
            name: name.into(),
            blurb: blurb.into(),
            leader,
            team,
            stance_ranges,
            candidates,
            seats_won: 0,
        }
    }
}
