//! The tally phase.
//!
//! Runs after the campaign closes. Every electorate is counted cluster by
//! cluster, the seat goes to the candidate with the most votes across the
//! whole electorate, and seats aggregate into the national verdict.

pub mod cluster;
pub mod verdict;

pub use cluster::count_cluster;
pub use verdict::{decide_verdict, seat_counts};

use crate::model::{Candidate, Electorate, Party};
use crate::rng::RandomSource;
use election_events::{CandidateVotes, ElectorateReturn};

/// Counts every electorate and credits seats to the winning parties.
///
/// Electorates are counted in registration order, clusters in generation
/// order, so the draw stream is fixed for a given seed. A tied electorate
/// goes to the earliest registered party.
pub fn tally_votes<R: RandomSource>(
    parties: &mut [Party],
    electorates: &[Electorate],
    rng: &mut R,
) -> Vec<ElectorateReturn> {
    let party_names: Vec<String> = parties.iter().map(|party| party.name.clone()).collect();
    let mut returns = Vec::with_capacity(electorates.len());

    for (electorate_idx, electorate) in electorates.iter().enumerate() {
        let (electorate_return, winner_party) = {
            let mut contesting: Vec<&mut Candidate> = parties
                .iter_mut()
                .map(|party| &mut party.candidates[electorate_idx])
                .collect();

            let clusters = electorate
                .clusters
                .iter()
                .map(|cluster| count_cluster(&mut contesting, &party_names, cluster, rng))
                .collect();

            let totals: Vec<CandidateVotes> = contesting
                .iter()
                .zip(&party_names)
                .map(|(candidate, party)| CandidateVotes {
                    candidate: candidate.name.clone(),
                    party: party.clone(),
                    votes: candidate.total_votes,
                })
                .collect();

            let mut winner_party = 0;
            for (idx, candidate) in contesting.iter().enumerate().skip(1) {
                if candidate.total_votes > contesting[winner_party].total_votes {
                    winner_party = idx;
                }
            }

            tracing::debug!(
                "{} declared for {} ({})",
                electorate.name,
                totals[winner_party].candidate,
                totals[winner_party].party
            );
            (
                ElectorateReturn {
                    electorate: electorate.name.clone(),
                    population: electorate.population,
                    clusters,
                    winner: totals[winner_party].clone(),
                    totals,
                },
                winner_party,
            )
        };
        parties[winner_party].seats_won += 1;
        returns.push(electorate_return);
    }

    returns
}
