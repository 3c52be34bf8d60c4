//! Seat aggregation and the overall verdict.

use crate::model::Party;
use election_events::{ElectionVerdict, PartySeats};

/// Final seat counts, in party registration order.
pub fn seat_counts(parties: &[Party]) -> Vec<PartySeats> {
    parties
        .iter()
        .map(|party| PartySeats {
            party: party.name.clone(),
            leader: party.leader.name.clone(),
            seats: party.seats_won,
        })
        .collect()
}

/// Decides the overall outcome from final seat counts.
///
/// Parliament hangs whenever the top seat count is shared, all-zero
/// included. Otherwise the single party on top forms government and its
/// leader takes the prime ministership.
pub fn decide_verdict(parties: &[Party]) -> ElectionVerdict {
    let top_seats = parties
        .iter()
        .map(|party| party.seats_won)
        .max()
        .unwrap_or(0);
    let mut on_top = parties.iter().filter(|party| party.seats_won == top_seats);
    match (on_top.next(), on_top.next()) {
        (Some(single), None) => ElectionVerdict::Majority {
            party: single.name.clone(),
            leader: single.leader.name.clone(),
            seats: top_seats,
        },
        _ => ElectionVerdict::Hung {
            leading_seats: top_seats,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Candidate, ManagerialTeam, TraitSet};

    fn party_with_seats(name: &str, leader: &str, seats: u32) -> Party {
        let mut party = Party::new(
            name,
            "",
            Candidate::new(leader, None, TraitSet::new(25, 25, 25, 0), Vec::new()),
            ManagerialTeam::new("office", TraitSet::new(0, 0, 0, 1)),
            Vec::new(),
            Vec::new(),
        );
        party.seats_won = seats;
        party
    }

    fn parties(seats: [u32; 3]) -> Vec<Party> {
        vec![
            party_with_seats("Labor Party", "Pat Doyle", seats[0]),
            party_with_seats("Liberal Party", "Kim Vu", seats[1]),
            party_with_seats("Foam Party", "Sam Reeve", seats[2]),
        ]
    }

    #[test]
    fn test_clear_majority() {
        let verdict = decide_verdict(&parties([3, 2, 2]));
        assert_eq!(
            verdict,
            ElectionVerdict::Majority {
                party: "Labor Party".to_string(),
                leader: "Pat Doyle".to_string(),
                seats: 3,
            }
        );
    }

    #[test]
    fn test_shared_top_hangs_parliament() {
        let verdict = decide_verdict(&parties([2, 2, 1]));
        assert_eq!(verdict, ElectionVerdict::Hung { leading_seats: 2 });
    }

    #[test]
    fn test_no_seats_at_all_hangs_parliament() {
        let verdict = decide_verdict(&parties([0, 0, 0]));
        assert_eq!(verdict, ElectionVerdict::Hung { leading_seats: 0 });
    }

    #[test]
    fn test_sweep_is_a_majority() {
        let verdict = decide_verdict(&parties([5, 0, 0]));
        assert!(!verdict.is_hung());
    }

    #[test]
    fn test_seat_counts_follow_registration_order() {
        let counts = seat_counts(&parties([1, 4, 0]));
        let names: Vec<&str> = counts.iter().map(|c| c.party.as_str()).collect();
        assert_eq!(names, vec!["Labor Party", "Liberal Party", "Foam Party"]);
        assert_eq!(counts[1].seats, 4);
        assert_eq!(counts[1].leader, "Kim Vu");
    }
}
