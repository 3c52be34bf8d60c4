//! Party, leader, team and candidate generation.

use crate::catalog::IssueCatalog;
use crate::model::{
    Candidate, ManagerialTeam, Party, Stance, StanceRange, TraitSet,
};
use crate::rng::RandomSource;
use crate::setup::PartyDef;

/// Leaders poll in a higher band than the candidates they carry.
const LEADER_TRAIT_MIN: i32 = 25;
const LEADER_TRAIT_MAX: i32 = 30;

const CANDIDATE_TRAIT_MIN: i32 = 10;
const CANDIDATE_TRAIT_MAX: i32 = 15;

const TEAM_HANDLING_MIN: i32 = 1;
const TEAM_HANDLING_MAX: i32 = 5;

/// Generates one party: leader, managerial team, and one candidate per
/// electorate, in electorate registration order.
///
/// Draws happen in a fixed order (leader traits, leader stances, team
/// handling, then each candidate's traits and stances), so a seeded run is
/// reproducible.
pub fn generate_party<R: RandomSource>(
    def: &PartyDef,
    electorate_names: &[String],
    issues: &IssueCatalog,
    rng: &mut R,
) -> Party {
    let leader_traits = TraitSet::new(
        rng.uniform(LEADER_TRAIT_MIN, LEADER_TRAIT_MAX),
        rng.uniform(LEADER_TRAIT_MIN, LEADER_TRAIT_MAX),
        rng.uniform(LEADER_TRAIT_MIN, LEADER_TRAIT_MAX),
        0,
    );
    let leader = Candidate::new(
        def.leader_name.clone(),
        None,
        leader_traits,
        draw_stances(&def.stance_ranges, issues, rng),
    );

    let team = ManagerialTeam::new(
        format!("{} Managerial Team", def.name),
        TraitSet::new(0, 0, 0, rng.uniform(TEAM_HANDLING_MIN, TEAM_HANDLING_MAX)),
    );

    let candidates = electorate_names
        .iter()
        .enumerate()
        .map(|(idx, electorate)| {
            let traits = TraitSet::new(
                rng.uniform(CANDIDATE_TRAIT_MIN, CANDIDATE_TRAIT_MAX),
                rng.uniform(CANDIDATE_TRAIT_MIN, CANDIDATE_TRAIT_MAX),
                rng.uniform(CANDIDATE_TRAIT_MIN, CANDIDATE_TRAIT_MAX),
                0,
            );
            Candidate::new(
                def.candidate_names[idx].clone(),
                Some(electorate.clone()),
                traits,
                draw_stances(&def.stance_ranges, issues, rng),
            )
        })
        .collect();

    Party::new(
        def.name.clone(),
        def.blurb.clone(),
        leader,
        team,
        def.stance_ranges.clone(),
        candidates,
    )
}

/// Draws one stance per issue from the party's range template, significance
/// before approach, issues in catalog order.
fn draw_stances<R: RandomSource>(
    ranges: &[StanceRange],
    issues: &IssueCatalog,
    rng: &mut R,
) -> Vec<Stance> {
    issues
        .iter()
        .zip(ranges)
        .map(|(issue, range)| {
            let significance = rng.uniform(range.sig_min, range.sig_max);
            let approach = rng.uniform(range.app_min, range.app_max);
            Stance::new(issue.clone(), significance, approach)
        })
        .collect()
}
