//! Event outcome resolution.
//!
//! One handler per event kind, dispatched on the tagged kind. Handlers draw
//! participants off the shared permutation, compute rolls, mutate trait and
//! opinion state in place, and return the structured outcome record.
//! Presentation happens downstream; nothing here formats text.
//!
//! Tied duels change no state at all. Solo events pass on `roll >=
//! threshold` and punish the trait on failure.

use crate::campaign::influence::{influence_by_stance, influence_by_stances};
use crate::catalog::{EventCatalog, EventTemplate, IssueCatalog, IssueCategory};
use crate::model::{
    Campaigner, Candidate, Characteristic, Electorate, Party, Stance, SIGNIFICANCE_MAX,
    SIGNIFICANCE_MIN,
};
use crate::rng::RandomSource;
use election_events::{Contender, EventKind, EventOutcome};

/// Spread for head-to-head rolls.
const DUEL_STDDEV: f64 = 3.0;

/// Spread for solo pass/fail rolls.
const SOLO_STDDEV: f64 = 5.0;

const SCANDAL_THRESHOLD: i32 = 30;
const PRANK_THRESHOLD: i32 = 20;
const DISCLOSURE_THRESHOLD: i32 = 15;

/// Resolves one scheduled event in the context of its triggering
/// electorate, mutating party and electorate state in place.
pub fn resolve_event<R: RandomSource>(
    kind: EventKind,
    electorate_idx: usize,
    parties: &mut [Party],
    electorates: &mut [Electorate],
    issues: &IssueCatalog,
    events: &EventCatalog,
    rng: &mut R,
) -> EventOutcome {
    let template = events.template(kind);
    match kind {
        EventKind::Debate => resolve_debate(template, electorate_idx, parties, electorates, rng),
        EventKind::Scandal => resolve_scandal(template, electorate_idx, parties, rng),
        EventKind::Prank => resolve_prank(template, electorate_idx, parties, rng),
        EventKind::LeaderBout => resolve_leader_bout(template, parties, rng),
        EventKind::LeaderDebate => resolve_leader_debate(template, parties, electorates, rng),
        EventKind::InternationalIssue => {
            resolve_international(electorate_idx, electorates, issues, rng)
        }
        EventKind::IssueDisclosure => {
            resolve_disclosure(template, electorate_idx, parties, electorates, issues, rng)
        }
    }
}

/// Standard contest roll: the impacted characteristic plus half the
/// campaigner's charisma, drawn with the given spread.
fn contest_roll<C: Campaigner, R: RandomSource>(
    campaigner: &C,
    impacted: Characteristic,
    stddev: f64,
    rng: &mut R,
) -> i32 {
    let base = campaigner.traits().get(impacted)
        + campaigner.traits().get(Characteristic::Charisma) / 2;
    rng.normal_round(base, stddev)
}

/// Leader roll: as `contest_roll` but with the party machine's event
/// handling folded into the base.
fn leader_roll<R: RandomSource>(
    leader: &Candidate,
    handling: i32,
    impacted: Characteristic,
    rng: &mut R,
) -> i32 {
    let base = leader.traits.get(impacted)
        + leader.traits.get(Characteristic::Charisma) / 2
        + handling;
    rng.normal_round(base, DUEL_STDDEV)
}

/// Strict comparison of two rolls. Equal rolls mean no winner, and the
/// caller skips every state change.
fn duel_winner(roll_first: i32, roll_second: i32) -> Option<usize> {
    if roll_first > roll_second {
        Some(0)
    } else if roll_second > roll_first {
        Some(1)
    } else {
        None
    }
}

/// Contender record for a fielded candidate.
fn fielded(parties: &[Party], party_idx: usize, electorate_idx: usize) -> Contender {
    Contender::new(
        parties[party_idx].candidates[electorate_idx].name.clone(),
        parties[party_idx].name.clone(),
    )
}

/// Contender record for a party leader.
fn leading(parties: &[Party], party_idx: usize) -> Contender {
    Contender::new(
        parties[party_idx].leader.name.clone(),
        parties[party_idx].name.clone(),
    )
}

fn resolve_debate<R: RandomSource>(
    template: &EventTemplate,
    electorate_idx: usize,
    parties: &mut [Party],
    electorates: &mut [Electorate],
    rng: &mut R,
) -> EventOutcome {
    let order = rng.permutation(parties.len());
    let (first, second) = (order[0], order[1]);
    let roll_first = contest_roll(
        &parties[first].candidates[electorate_idx],
        template.impacted,
        DUEL_STDDEV,
        rng,
    );
    let roll_second = contest_roll(
        &parties[second].candidates[electorate_idx],
        template.impacted,
        DUEL_STDDEV,
        rng,
    );
    let contenders = [
        fielded(parties, first, electorate_idx),
        fielded(parties, second, electorate_idx),
    ];
    let winner_idx = duel_winner(roll_first, roll_second).map(|w| [first, second][w]);
    if let Some(party_idx) = winner_idx {
        let candidate = &mut parties[party_idx].candidates[electorate_idx];
        candidate.traits.update(template.impacted, template.impact);
        candidate
            .traits
            .update(Characteristic::Popularity, template.impact);
        let stances = candidate.stances.clone();
        influence_by_stances(&mut electorates[electorate_idx], &stances, true, rng);
    }
    EventOutcome::Debate {
        contenders,
        winner: winner_idx.map(|idx| fielded(parties, idx, electorate_idx)),
    }
}

fn resolve_scandal<R: RandomSource>(
    template: &EventTemplate,
    electorate_idx: usize,
    parties: &mut [Party],
    rng: &mut R,
) -> EventOutcome {
    let target_idx = rng.permutation(parties.len())[0];
    let handling = parties[target_idx].team.event_handling();
    let candidate = &mut parties[target_idx].candidates[electorate_idx];
    let roll = contest_roll(candidate, template.impacted, SOLO_STDDEV, rng) + handling;
    let contained = roll >= SCANDAL_THRESHOLD;
    if contained {
        // the machine soaks part of the hit, and talking their way out
        // plays well on camera
        candidate
            .traits
            .update(template.impacted, -(template.impact - handling));
        candidate
            .traits
            .update(Characteristic::Charisma, template.impact);
    } else {
        candidate.traits.update(template.impacted, -template.impact);
    }
    EventOutcome::Scandal {
        target: fielded(parties, target_idx, electorate_idx),
        contained,
    }
}

fn resolve_prank<R: RandomSource>(
    template: &EventTemplate,
    electorate_idx: usize,
    parties: &mut [Party],
    rng: &mut R,
) -> EventOutcome {
    let target_idx = rng.permutation(parties.len())[0];
    let candidate = &mut parties[target_idx].candidates[electorate_idx];
    let roll = contest_roll(candidate, template.impacted, SOLO_STDDEV, rng);
    let laughed_off = roll >= PRANK_THRESHOLD;
    if laughed_off {
        candidate.traits.update(template.impacted, template.impact);
        candidate
            .traits
            .update(Characteristic::Charisma, template.impact);
    } else {
        candidate.traits.update(template.impacted, -template.impact);
    }
    EventOutcome::Prank {
        target: fielded(parties, target_idx, electorate_idx),
        laughed_off,
    }
}

fn resolve_leader_bout<R: RandomSource>(
    template: &EventTemplate,
    parties: &mut [Party],
    rng: &mut R,
) -> EventOutcome {
    let order = rng.permutation(parties.len());
    let (first, second) = (order[0], order[1]);
    let roll_first = leader_roll(
        &parties[first].leader,
        parties[first].team.event_handling(),
        template.impacted,
        rng,
    );
    let roll_second = leader_roll(
        &parties[second].leader,
        parties[second].team.event_handling(),
        template.impacted,
        rng,
    );
    let contenders = [leading(parties, first), leading(parties, second)];
    match duel_winner(roll_first, roll_second) {
        Some(w) => {
            let (winner_idx, loser_idx) = if w == 0 { (first, second) } else { (second, first) };
            parties[winner_idx]
                .leader
                .traits
                .update(template.impacted, template.impact);
            // even the loser looks good for showing up
            parties[loser_idx]
                .leader
                .traits
                .update(template.impacted, template.impact / 2);
            EventOutcome::LeaderBout {
                contenders,
                winner: Some(leading(parties, winner_idx)),
            }
        }
        None => EventOutcome::LeaderBout {
            contenders,
            winner: None,
        },
    }
}

fn resolve_leader_debate<R: RandomSource>(
    template: &EventTemplate,
    parties: &mut [Party],
    electorates: &mut [Electorate],
    rng: &mut R,
) -> EventOutcome {
    let order = rng.permutation(parties.len());
    let (first, second) = (order[0], order[1]);
    let roll_first = leader_roll(
        &parties[first].leader,
        parties[first].team.event_handling(),
        template.impacted,
        rng,
    );
    let roll_second = leader_roll(
        &parties[second].leader,
        parties[second].team.event_handling(),
        template.impacted,
        rng,
    );
    let contenders = [leading(parties, first), leading(parties, second)];
    let winner_idx = duel_winner(roll_first, roll_second).map(|w| [first, second][w]);
    if let Some(party_idx) = winner_idx {
        let winner = &mut parties[party_idx].leader;
        winner.traits.update(template.impacted, template.impact);
        winner
            .traits
            .update(Characteristic::Popularity, template.impact);
        let stances = winner.stances.clone();
        // a national debate reaches every living room
        for electorate in electorates.iter_mut() {
            influence_by_stances(electorate, &stances, true, rng);
        }
    }
    EventOutcome::LeaderDebate {
        contenders,
        winner: winner_idx.map(|idx| leading(parties, idx)),
    }
}

fn resolve_international<R: RandomSource>(
    electorate_idx: usize,
    electorates: &mut [Electorate],
    issues: &IssueCatalog,
    rng: &mut R,
) -> EventOutcome {
    let category = IssueCategory::all()[rng.uniform(0, 4) as usize];
    let issue = issues.by_category(category).clone();
    let swayed = rng.uniform(1, 2) == 2;
    if swayed {
        let significance = rng.uniform(SIGNIFICANCE_MIN, SIGNIFICANCE_MAX);
        let approach = rng.uniform(1, 100);
        let foreign_position = Stance::new(issue.clone(), significance, approach);
        influence_by_stance(
            &mut electorates[electorate_idx],
            &foreign_position,
            true,
            rng,
        );
    }
    EventOutcome::InternationalIssue {
        issue: issue.code,
        swayed,
    }
}

fn resolve_disclosure<R: RandomSource>(
    template: &EventTemplate,
    electorate_idx: usize,
    parties: &mut [Party],
    electorates: &mut [Electorate],
    issues: &IssueCatalog,
    rng: &mut R,
) -> EventOutcome {
    let target_idx = rng.permutation(parties.len())[0];
    let category = IssueCategory::all()[rng.uniform(0, 4) as usize];
    let candidate = &mut parties[target_idx].candidates[electorate_idx];
    let roll = contest_roll(candidate, template.impacted, SOLO_STDDEV, rng);
    let credible = roll >= DISCLOSURE_THRESHOLD;
    if credible {
        candidate.traits.update(template.impacted, template.impact);
    } else {
        candidate.traits.update(template.impacted, -template.impact);
    }
    // the candidate's own position on the disclosed issue does the moving,
    // toward them if credible, away if not
    let stance = candidate.stances[category.position()].clone();
    influence_by_stance(&mut electorates[electorate_idx], &stance, credible, rng);
    EventOutcome::IssueDisclosure {
        target: fielded(parties, target_idx, electorate_idx),
        issue: issues.by_category(category).code.clone(),
        credible,
    }
}
