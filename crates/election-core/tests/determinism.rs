//! Determinism verification tests
//!
//! A seeded election must reproduce exactly: same generated world, same
//! event log, same returns and verdict.

use election_core::model::StanceRange;
use election_core::setup::{ElectionDefs, ElectorateDef, PartyDef};
use election_core::{CampaignRng, Election, ElectionReturns, EventLog};

fn defs() -> ElectionDefs {
    let party = |name: &str, leader: &str, prefix: &str| PartyDef {
        name: name.to_string(),
        blurb: String::new(),
        leader_name: leader.to_string(),
        stance_ranges: vec![StanceRange::new(2, 8, 10, 90); 5],
        candidate_names: (0..4).map(|i| format!("{}{}", prefix, i)).collect(),
    };
    ElectionDefs {
        parties: vec![
            party("Labor Party", "Pat Doyle", "A"),
            party("Liberal Party", "Kim Vu", "B"),
            party("Foam Party", "Sam Reeve", "C"),
        ],
        electorates: vec![
            ElectorateDef {
                name: "Grayndler".to_string(),
                population: 5200,
            },
            ElectorateDef {
                name: "Bennelong".to_string(),
                population: 6100,
            },
            ElectorateDef {
                name: "Cook".to_string(),
                population: 4800,
            },
            ElectorateDef {
                name: "Wentworth".to_string(),
                population: 5700,
            },
        ],
    }
}

/// Runs a full election and renders every piece of mutable state to JSON.
fn run(seed: u64, days: u32) -> (String, Vec<String>, ElectionReturns) {
    let mut rng = CampaignRng::from_seed(seed);
    let mut election = Election::generate(&defs(), EventLog::null(), &mut rng)
        .expect("well-formed definitions");
    election.run_campaign(days, &mut rng).unwrap();
    let returns = election.tally(&mut rng);

    let world = serde_json::to_string(&(election.parties(), election.electorates()))
        .expect("world state serializes");
    let events: Vec<String> = election
        .log()
        .events()
        .iter()
        .map(|event| event.to_jsonl().unwrap())
        .collect();
    (world, events, returns)
}

/// The same seed must reproduce the run bit for bit.
#[test]
fn test_same_seed_reproduces_the_whole_run() {
    let (world_a, events_a, returns_a) = run(42, 7);
    let (world_b, events_b, returns_b) = run(42, 7);

    assert_eq!(world_a, world_b, "world state should match exactly");
    assert_eq!(events_a, events_b, "event logs should match exactly");
    assert_eq!(returns_a, returns_b, "returns and verdict should match");
}

/// Different seeds should produce different campaigns.
#[test]
fn test_different_seeds_diverge() {
    let (world_a, _, _) = run(1, 7);
    let (world_b, _, _) = run(2, 7);
    assert_ne!(
        world_a, world_b,
        "different seeds should generate different worlds"
    );
}

/// A longer window on the same seed diverges once the extra days draw.
#[test]
fn test_day_count_is_part_of_the_stream() {
    let (_, events_short, _) = run(9, 3);
    let (_, events_long, _) = run(9, 12);
    assert!(events_long.len() >= events_short.len());
}
