//! Pre-campaign briefing and post-campaign result reports.
//!
//! The briefing shows the generated field before a single event fires:
//! issues, party rosters with characteristics and stances, electorates
//! with their opinion clusters and candidates. The post-campaign report
//! shows the same field after the events have moved it, and the result
//! reports walk the tally from cluster counts up to the verdict.

use election_core::model::{Characteristic, Stance, StanceRange, TraitSet};
use election_core::{Election, ElectionReturns};
use election_events::{ElectionVerdict, PartySeats};

fn trait_line(traits: &TraitSet) -> String {
    format!(
        "popularity {}, charisma {}, debating {}, event handling {}",
        traits.get(Characteristic::Popularity),
        traits.get(Characteristic::Charisma),
        traits.get(Characteristic::Debating),
        traits.get(Characteristic::EventHandling),
    )
}

fn stance_line(stances: &[Stance]) -> String {
    stances
        .iter()
        .map(|stance| format!("{}/{}", stance.significance(), stance.approach()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn range_line(ranges: &[StanceRange]) -> String {
    ranges
        .iter()
        .map(|range| {
            format!(
                "{}-{}/{}-{}",
                range.sig_min, range.sig_max, range.app_min, range.app_max
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn electorate_block(election: &Election, lines: &mut Vec<String>) {
    for electorate in election.electorates() {
        lines.push(String::new());
        lines.push(format!(
            "{} (Population: {})",
            electorate.name, electorate.population
        ));
        lines.push("Cluster stances:".to_string());
        for (position, cluster) in electorate.clusters.iter().enumerate() {
            lines.push(format!(
                "  Cluster #{} (Population: {}): {}",
                position + 1,
                cluster.population,
                stance_line(&cluster.stances)
            ));
        }
        lines.push("Candidates:".to_string());
        for party in election.parties() {
            for candidate in &party.candidates {
                if candidate.electorate.as_deref() == Some(electorate.name.as_str()) {
                    lines.push(format!(
                        "  {} ({})",
                        candidate.name,
                        trait_line(&candidate.traits)
                    ));
                }
            }
        }
    }
}

/// Renders the pre-campaign briefing for a freshly generated election.
pub fn briefing(election: &Election) -> String {
    let mut lines = Vec::new();
    lines.push("=======================Election Simulator=======================".to_string());
    lines.push(String::new());

    lines.push("~~~~ISSUES~~~~".to_string());
    lines.push(format!(
        "The {} issues the parties and candidates will be campaigning on:",
        election.issues().len()
    ));
    for (position, issue) in election.issues().iter().enumerate() {
        lines.push(format!("ISSUE #{} - {}", position + 1, issue.statement));
    }
    lines.push(
        "Stance listings read significance/approach per issue, in the order above.".to_string(),
    );
    lines.push(String::new());

    lines.push("~~~~PARTIES~~~~".to_string());
    for (position, party) in election.parties().iter().enumerate() {
        lines.push(format!("Party {}: {}", position + 1, party.name));
        if !party.blurb.is_empty() {
            lines.push(party.blurb.clone());
        }
        lines.push(format!("Leader: {}", party.leader.name));
        lines.push(format!(
            "Leader's characteristics: {}",
            trait_line(&party.leader.traits)
        ));
        lines.push(format!(
            "Leader's stances: {}",
            stance_line(&party.leader.stances)
        ));
        lines.push(format!(
            "Campaign team: {} (event handling {})",
            party.team.name,
            party.team.event_handling()
        ));
        lines.push(format!(
            "Platform ranges: {}",
            range_line(&party.stance_ranges)
        ));
        lines.push("Candidates:".to_string());
        for candidate in &party.candidates {
            lines.push(format!(
                "  {}: {}",
                candidate.name,
                stance_line(&candidate.stances)
            ));
        }
        lines.push(String::new());
    }

    lines.push("~~~~ELECTORATES~~~~".to_string());
    lines.push(format!(
        "There are {} electorates",
        election.electorates().len()
    ));
    electorate_block(election, &mut lines);

    lines.join("\n")
}

/// Renders the state of the field after campaigning: every characteristic
/// the events moved, and where each electorate's clusters have landed.
pub fn post_campaign_report(election: &Election) -> String {
    let mut lines = Vec::new();
    lines.push("----------===== POST CAMPAIGN REPORT =====----------".to_string());
    lines.push(String::new());

    lines.push("~~~~PARTIES~~~~".to_string());
    for (position, party) in election.parties().iter().enumerate() {
        lines.push(format!("Party {}: {}", position + 1, party.name));
        lines.push(format!("Leader: {}", party.leader.name));
        lines.push(format!(
            "Leader's characteristics: {}",
            trait_line(&party.leader.traits)
        ));
        lines.push(String::new());
    }

    lines.push("~~~~ELECTORATES~~~~".to_string());
    electorate_block(election, &mut lines);

    lines.join("\n")
}

/// Renders the cluster-by-cluster vote distribution and electorate winners.
pub fn returns_report(returns: &ElectionReturns) -> String {
    let mut lines = Vec::new();
    lines.push("~~~================VOTING HAS STARTED================~~~".to_string());

    for electorate in &returns.electorates {
        lines.push(String::new());
        lines.push(format!(
            "{} (Population: {}) vote distribution:",
            electorate.electorate, electorate.population
        ));
        for (position, cluster) in electorate.clusters.iter().enumerate() {
            lines.push(format!(
                "  Cluster #{} (Population: {})",
                position + 1,
                cluster.population
            ));
            for count in &cluster.votes {
                lines.push(format!("    {} votes: {}", count.candidate, count.votes));
            }
        }
        lines.push(format!("{} total vote tally:", electorate.electorate));
        for count in &electorate.totals {
            lines.push(format!("  {} total votes: {}", count.candidate, count.votes));
        }
        lines.push(format!(
            "{} has won the election in {} for the {} with a total of {} votes!",
            electorate.winner.candidate,
            electorate.electorate,
            electorate.winner.party,
            electorate.winner.votes
        ));
    }

    lines.push(String::new());
    lines.push("~~~================VOTING HAS FINISHED================~~~".to_string());
    lines.join("\n")
}

/// Renders the seat counts and the final verdict.
pub fn verdict_report(seats: &[PartySeats], verdict: &ElectionVerdict) -> String {
    let mut lines = Vec::new();
    lines.push("The votes are in and the election is coming to an end.".to_string());
    lines.push(String::new());
    lines.push(
        "===================================RESULTS===================================".to_string(),
    );
    for entry in seats {
        lines.push(format!(
            "{} has {} candidates elected in their respective electorates.",
            entry.party, entry.seats
        ));
    }
    lines.push(String::new());

    match verdict {
        ElectionVerdict::Majority { party, leader, .. } => {
            lines.push(format!("{} has won the election!", party));
            lines.push(format!("{} has been elected as Prime Minister!", leader));
        }
        ElectionVerdict::Hung { .. } => {
            lines.push("Oh no! No party has enough seats to secure parliament!".to_string());
            lines.push(
                "THIS HAS RESULTED IN A HUNG PARLIAMENT, NO ONE HAS BEEN ELECTED PRIME MINISTER"
                    .to_string(),
            );
        }
    }
    lines.join("\n")
}
