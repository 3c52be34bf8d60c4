//! Election setup.
//!
//! Definitions say who contests and where; generation draws everything else.
//! Validation runs before the first draw and refuses structurally bad
//! definitions outright.
//!
//! Generation order is fixed: every electorate first (cluster populations,
//! then cluster stances), then every party (leader, team, candidates). One
//! draw source threads through the whole build, so a seed pins the world.

pub mod electorates;
pub mod parties;

pub use electorates::generate_electorate;
pub use parties::generate_party;

use crate::catalog::{IssueCatalog, IssueCategory, ISSUE_COUNT};
use crate::error::SetupError;
use crate::model::{Electorate, Party, StanceRange};
use crate::model::{APPROACH_MAX, APPROACH_MIN, SIGNIFICANCE_MAX, SIGNIFICANCE_MIN};
use crate::rng::RandomSource;
use std::collections::HashSet;

/// Definition of one party to generate.
#[derive(Debug, Clone, PartialEq)]
pub struct PartyDef {
    pub name: String,
    /// Flavor line for the pre-campaign briefing.
    pub blurb: String,
    pub leader_name: String,
    /// One draw range per catalog issue, in catalog order.
    pub stance_ranges: Vec<StanceRange>,
    /// Candidate names, consumed in electorate registration order.
    pub candidate_names: Vec<String>,
}

/// Definition of one electorate to generate.
#[derive(Debug, Clone, PartialEq)]
pub struct ElectorateDef {
    pub name: String,
    /// Configured population ceiling. Generation resyncs the final figure to
    /// the cluster sum, which never exceeds this.
    pub population: u32,
}

/// Everything needed to build an election world.
#[derive(Debug, Clone, PartialEq)]
pub struct ElectionDefs {
    pub parties: Vec<PartyDef>,
    pub electorates: Vec<ElectorateDef>,
}

impl ElectionDefs {
    /// Checks every structural precondition generation relies on.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.parties.len() < 2 {
            return Err(SetupError::TooFewParties {
                got: self.parties.len(),
            });
        }
        if self.electorates.is_empty() {
            return Err(SetupError::NoElectorates);
        }

        let mut seen = HashSet::new();
        for def in &self.electorates {
            if !seen.insert(def.name.as_str()) {
                return Err(SetupError::DuplicateElectorate(def.name.clone()));
            }
            if def.population == 0 {
                return Err(SetupError::ZeroPopulation {
                    electorate: def.name.clone(),
                });
            }
        }

        for party in &self.parties {
            if party.stance_ranges.len() != ISSUE_COUNT {
                return Err(SetupError::StanceRangeRows {
                    party: party.name.clone(),
                    expected: ISSUE_COUNT,
                    got: party.stance_ranges.len(),
                });
            }
            for (idx, range) in party.stance_ranges.iter().enumerate() {
                validate_range(&party.name, IssueCategory::all()[idx], range)?;
            }
            if party.candidate_names.len() < self.electorates.len() {
                return Err(SetupError::CandidateShortfall {
                    party: party.name.clone(),
                    expected: self.electorates.len(),
                    got: party.candidate_names.len(),
                });
            }
        }
        Ok(())
    }

    /// Validates, then generates the full world off one draw source.
    pub fn generate<R: RandomSource>(
        &self,
        issues: &IssueCatalog,
        rng: &mut R,
    ) -> Result<(Vec<Party>, Vec<Electorate>), SetupError> {
        self.validate()?;

        let electorates: Vec<Electorate> = self
            .electorates
            .iter()
            .map(|def| generate_electorate(def, issues, rng))
            .collect();
        let electorate_names: Vec<String> = electorates
            .iter()
            .map(|electorate| electorate.name.clone())
            .collect();
        let parties = self
            .parties
            .iter()
            .map(|def| generate_party(def, &electorate_names, issues, rng))
            .collect();

        tracing::info!(
            "generated {} parties across {} electorates",
            self.parties.len(),
            electorates.len()
        );
        Ok((parties, electorates))
    }
}

fn validate_range(
    party: &str,
    category: IssueCategory,
    range: &StanceRange,
) -> Result<(), SetupError> {
    let bounds_error = |detail: String| SetupError::StanceRangeBounds {
        party: party.to_string(),
        issue: category.label().to_string(),
        detail,
    };
    if range.sig_min > range.sig_max {
        return Err(bounds_error(format!(
            "significance range {}..{} is inverted",
            range.sig_min, range.sig_max
        )));
    }
    if range.sig_min < SIGNIFICANCE_MIN || range.sig_max > SIGNIFICANCE_MAX {
        return Err(bounds_error(format!(
            "significance range {}..{} outside {}..={}",
            range.sig_min, range.sig_max, SIGNIFICANCE_MIN, SIGNIFICANCE_MAX
        )));
    }
    if range.app_min > range.app_max {
        return Err(bounds_error(format!(
            "approach range {}..{} is inverted",
            range.app_min, range.app_max
        )));
    }
    if range.app_min < APPROACH_MIN || range.app_max > APPROACH_MAX {
        return Err(bounds_error(format!(
            "approach range {}..{} outside {}..={}",
            range.app_min, range.app_max, APPROACH_MIN, APPROACH_MAX
        )));
    }
    Ok(())
}
