//! The election aggregate.
//!
//! Owns the catalogs, the generated world and the event log, and walks the
//! phases in order: generate, campaign, tally. One draw source threads
//! through all three, so a seed fixes the entire run.

use crate::catalog::{EventCatalog, IssueCatalog};
use crate::error::SetupError;
use crate::log::EventLog;
use crate::model::{Electorate, Party};
use crate::rng::RandomSource;
use crate::setup::ElectionDefs;
use crate::{campaign, tally};
use election_events::{ElectionVerdict, ElectorateReturn, PartySeats};
use serde::{Deserialize, Serialize};

/// Everything the tally phase hands back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectionReturns {
    /// Per-electorate counts, in electorate registration order.
    pub electorates: Vec<ElectorateReturn>,
    /// Final seat counts, in party registration order.
    pub seats: Vec<PartySeats>,
    pub verdict: ElectionVerdict,
}

/// A full election run: world, catalogs and event log.
pub struct Election {
    issues: IssueCatalog,
    events: EventCatalog,
    parties: Vec<Party>,
    electorates: Vec<Electorate>,
    log: EventLog,
}

impl Election {
    /// Generates an election world from definitions, using the standard
    /// issue and event catalogs.
    pub fn generate<R: RandomSource>(
        defs: &ElectionDefs,
        log: EventLog,
        rng: &mut R,
    ) -> Result<Self, SetupError> {
        let issues = IssueCatalog::standard();
        let events = EventCatalog::standard();
        let (parties, electorates) = defs.generate(&issues, rng)?;
        Ok(Self {
            issues,
            events,
            parties,
            electorates,
            log,
        })
    }

    /// Runs the campaign window, events landing in the owned log.
    pub fn run_campaign<R: RandomSource>(
        &mut self,
        days: u32,
        rng: &mut R,
    ) -> std::io::Result<()> {
        campaign::run_campaign(
            days,
            &mut self.parties,
            &mut self.electorates,
            &self.issues,
            &self.events,
            &mut self.log,
            rng,
        )
    }

    /// Counts every electorate and settles the verdict.
    pub fn tally<R: RandomSource>(&mut self, rng: &mut R) -> ElectionReturns {
        let electorates = tally::tally_votes(&mut self.parties, &self.electorates, rng);
        let seats = tally::seat_counts(&self.parties);
        let verdict = tally::decide_verdict(&self.parties);
        tracing::info!("verdict: {}", verdict);
        ElectionReturns {
            electorates,
            seats,
            verdict,
        }
    }

    pub fn issues(&self) -> &IssueCatalog {
        &self.issues
    }

    pub fn parties(&self) -> &[Party] {
        &self.parties
    }

    pub fn electorates(&self) -> &[Electorate] {
        &self.electorates
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Flushes the event log's file mirror, if one is open.
    pub fn flush_log(&mut self) -> std::io::Result<()> {
        self.log.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Characteristic, StanceRange};
    use crate::rng::CampaignRng;
    use crate::setup::{ElectorateDef, PartyDef};

    fn defs() -> ElectionDefs {
        let party = |name: &str, leader: &str, candidates: [&str; 3]| PartyDef {
            name: name.to_string(),
            blurb: String::new(),
            leader_name: leader.to_string(),
            stance_ranges: vec![StanceRange::new(2, 8, 20, 80); 5],
            candidate_names: candidates.iter().map(|c| c.to_string()).collect(),
        };
        ElectionDefs {
            parties: vec![
                party("Labor Party", "Pat Doyle", ["A0", "A1", "A2"]),
                party("Liberal Party", "Kim Vu", ["B0", "B1", "B2"]),
                party("Foam Party", "Sam Reeve", ["C0", "C1", "C2"]),
            ],
            electorates: (0..3)
                .map(|i| ElectorateDef {
                    name: format!("E{}", i),
                    population: 4000 + 500 * i,
                })
                .collect(),
        }
    }

    #[test]
    fn test_full_run_settles_every_seat() {
        let mut rng = CampaignRng::from_seed(7);
        let mut election = Election::generate(&defs(), EventLog::null(), &mut rng).unwrap();
        election.run_campaign(7, &mut rng).unwrap();
        let returns = election.tally(&mut rng);

        assert_eq!(returns.electorates.len(), 3);
        let seat_sum: u32 = returns.seats.iter().map(|s| s.seats).sum();
        assert_eq!(seat_sum, 3, "every electorate seats exactly one winner");

        let top = returns.seats.iter().map(|s| s.seats).max().unwrap();
        match &returns.verdict {
            ElectionVerdict::Majority { seats, .. } => {
                assert_eq!(*seats, top);
                let sharing = returns.seats.iter().filter(|s| s.seats == top).count();
                assert_eq!(sharing, 1, "majority means an unshared top count");
            }
            ElectionVerdict::Hung { leading_seats } => {
                assert_eq!(*leading_seats, top);
                let sharing = returns.seats.iter().filter(|s| s.seats == top).count();
                assert!(sharing >= 2, "hung means the top count is shared");
            }
        }
    }

    #[test]
    fn test_campaign_keeps_values_in_range() {
        let mut rng = CampaignRng::from_seed(31);
        let mut election = Election::generate(&defs(), EventLog::null(), &mut rng).unwrap();
        election.run_campaign(14, &mut rng).unwrap();

        for party in election.parties() {
            for campaigner in party.candidates.iter().chain(std::iter::once(&party.leader)) {
                for characteristic in [
                    Characteristic::Popularity,
                    Characteristic::Charisma,
                    Characteristic::Debating,
                ] {
                    let value = campaigner.traits.get(characteristic);
                    assert!((0..=100).contains(&value));
                }
            }
        }
        for electorate in election.electorates() {
            for cluster in &electorate.clusters {
                for stance in &cluster.stances {
                    assert!((0..=100).contains(&stance.approach()));
                }
            }
        }
    }

    #[test]
    fn test_logged_events_carry_real_electorates_and_days() {
        let mut rng = CampaignRng::from_seed(3);
        let mut election = Election::generate(&defs(), EventLog::null(), &mut rng).unwrap();
        election.run_campaign(10, &mut rng).unwrap();

        for event in election.log().events() {
            assert!((1..=10).contains(&event.day));
            assert!(election
                .electorates()
                .iter()
                .any(|e| e.name == event.electorate));
        }
    }
}
