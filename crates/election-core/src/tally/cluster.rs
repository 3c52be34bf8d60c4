//! Cluster-level vote counting.
//!
//! Each issue slot goes to the contesting candidate sitting closest to the
//! cluster's opinion, with a discount for raw popularity. Votes are credited
//! per slot won, with noise on the vote unit so cluster totals drift off the
//! raw population. The drift reads as informal votes on election night.

use crate::model::{Candidate, Characteristic, Cluster};
use crate::rng::RandomSource;
use election_events::{CandidateVotes, ClusterReturn};

/// Spread applied to each candidate's drawn vote unit.
const VOTE_UNIT_STDDEV: f64 = 3.0;

/// Sentinel wider than any reachable stance distance.
const OPEN_RANGE: i32 = 999_999;

/// How far a candidate sits from the cluster on one issue slot.
///
/// Approach and significance gaps add; a quarter of the candidate's
/// popularity is shaved off, so a well-known candidate can hold a slot
/// without the closest platform. Can go negative.
fn stance_distance(candidate: &Candidate, slot: usize, cluster: &Cluster) -> i32 {
    let own = &candidate.stances[slot];
    let cluster_stance = &cluster.stances[slot];
    let approach_range = (own.approach() - cluster_stance.approach()).abs();
    let significance_range = (own.significance() - cluster_stance.significance()).abs();
    approach_range + significance_range
        - candidate.traits.get(Characteristic::Popularity) / 4
}

/// Counts one cluster for the contesting candidates, one per party in
/// registration order.
///
/// Every candidate draws a vote unit whether or not they won a slot, so the
/// draw stream is independent of who the slots went to. A tied slot stays
/// with the earliest registered candidate.
pub fn count_cluster<R: RandomSource>(
    contesting: &mut [&mut Candidate],
    parties: &[String],
    cluster: &Cluster,
    rng: &mut R,
) -> ClusterReturn {
    let vote_unit = (cluster.population / 5) as i32;

    for slot in 0..cluster.stances.len() {
        let mut closest = OPEN_RANGE;
        let mut slot_winner = 0usize;
        for (idx, candidate) in contesting.iter().enumerate() {
            let distance = stance_distance(candidate, slot, cluster);
            if distance < closest {
                closest = distance;
                slot_winner = idx;
            }
        }
        contesting[slot_winner].stances_won += 1;
    }

    let mut votes = Vec::with_capacity(contesting.len());
    for (idx, candidate) in contesting.iter_mut().enumerate() {
        let unit = rng.normal_round(vote_unit, VOTE_UNIT_STDDEV);
        let credited = i64::from(unit) * i64::from(candidate.stances_won);
        candidate.cluster_votes = credited;
        candidate.total_votes += credited;
        candidate.stances_won = 0;
        votes.push(CandidateVotes {
            candidate: candidate.name.clone(),
            party: parties[idx].clone(),
            votes: credited,
        });
    }

    ClusterReturn {
        population: cluster.population,
        votes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::IssueCatalog;
    use crate::model::{Stance, TraitSet};
    use crate::rng::ScriptedRandom;

    fn stances(issues: &IssueCatalog, significance: i32, approach: i32) -> Vec<Stance> {
        issues
            .iter()
            .map(|issue| Stance::new(issue.clone(), significance, approach))
            .collect()
    }

    fn candidate(issues: &IssueCatalog, name: &str, popularity: i32, approach: i32) -> Candidate {
        Candidate::new(
            name,
            Some("Grayndler".to_string()),
            TraitSet::new(popularity, 0, 0, 0),
            stances(issues, 5, approach),
        )
    }

    #[test]
    fn test_closest_platform_takes_every_slot() {
        let issues = IssueCatalog::standard();
        let mut near = candidate(&issues, "Alice North", 0, 50);
        let mut far = candidate(&issues, "Omar Reid", 0, 90);
        let cluster = Cluster::new(1000, stances(&issues, 5, 50));
        let parties = ["Labor Party".to_string(), "Liberal Party".to_string()];

        // both candidates draw a unit even though only one won slots
        let mut rng = ScriptedRandom::new([200, 210]);
        let mut contesting = [&mut near, &mut far];
        let ret = count_cluster(&mut contesting, &parties, &cluster, &mut rng);

        assert_eq!(ret.votes[0].votes, 200 * 5);
        assert_eq!(ret.votes[1].votes, 0);
        assert_eq!(near.total_votes, 1000);
        assert_eq!(far.total_votes, 0);
        // counters are spent after the cluster
        assert_eq!(near.stances_won, 0);
        assert!(rng.is_exhausted());
    }

    #[test]
    fn test_popularity_discount_can_outweigh_proximity() {
        let issues = IssueCatalog::standard();
        // 4 points off on every slot, but popular enough for a -25 discount
        let mut celebrity = candidate(&issues, "Dana Wells", 100, 54);
        let mut purist = candidate(&issues, "Lee Crane", 0, 50);
        let cluster = Cluster::new(500, stances(&issues, 5, 50));
        let parties = ["Foam Party".to_string(), "Labor Party".to_string()];

        let mut rng = ScriptedRandom::new([100, 100]);
        let mut contesting = [&mut celebrity, &mut purist];
        let ret = count_cluster(&mut contesting, &parties, &cluster, &mut rng);

        assert_eq!(ret.votes[0].votes, 100 * 5);
        assert_eq!(ret.votes[1].votes, 0);
    }

    #[test]
    fn test_tied_slot_stays_with_first_registered() {
        let issues = IssueCatalog::standard();
        let mut first = candidate(&issues, "Alice North", 20, 60);
        let mut twin = candidate(&issues, "Omar Reid", 20, 60);
        let cluster = Cluster::new(750, stances(&issues, 5, 50));
        let parties = ["Labor Party".to_string(), "Liberal Party".to_string()];

        let mut rng = ScriptedRandom::new([150, 150]);
        let mut contesting = [&mut first, &mut twin];
        let ret = count_cluster(&mut contesting, &parties, &cluster, &mut rng);

        assert_eq!(ret.votes[0].votes, 150 * 5);
        assert_eq!(ret.votes[1].votes, 0);
    }

    #[test]
    fn test_unopposed_candidate_collects_about_the_population() {
        let issues = IssueCatalog::standard();
        let mut only = candidate(&issues, "Solo Act", 0, 50);
        let cluster = Cluster::new(1000, stances(&issues, 5, 50));
        let parties = ["Foam Party".to_string()];

        // unit is pop/5 with stddev 3, won five times over
        let mut rng = crate::rng::CampaignRng::from_seed(21);
        let mut contesting = [&mut only];
        count_cluster(&mut contesting, &parties, &cluster, &mut rng);
        assert!(
            (only.total_votes - 1000).abs() <= 100,
            "expected roughly the cluster population, got {}",
            only.total_votes
        );
    }
}
