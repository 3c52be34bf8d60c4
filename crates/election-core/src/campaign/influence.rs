//! Opinion influence propagation.
//!
//! When an actor wins (or fumbles) an event, their stances pull (or push)
//! cluster opinions. Two matching policies exist and both are load-bearing:
//! a full stance vector matches cluster stances by issue *category*, while a
//! single synthetic stance matches by exact issue *code*.

use crate::model::{Electorate, Stance};
use crate::rng::RandomSource;

/// Smallest single opinion movement.
const MIN_SHIFT: i32 = 1;

/// Largest single opinion movement.
const MAX_SHIFT: i32 = 3;

/// Applies a full stance vector to every cluster of one electorate,
/// matching cluster stances by issue category. One movement draw is
/// consumed per affected cluster stance, in cluster order.
pub fn influence_by_stances<R: RandomSource>(
    electorate: &mut Electorate,
    actor_stances: &[Stance],
    positive: bool,
    rng: &mut R,
) {
    for cluster in &mut electorate.clusters {
        for cluster_stance in &mut cluster.stances {
            let matched = actor_stances
                .iter()
                .find(|s| s.issue().category == cluster_stance.issue().category);
            if let Some(actor_stance) = matched {
                nudge(cluster_stance, actor_stance.approach(), positive, rng);
            }
        }
    }
}

/// Applies one stance to every cluster of one electorate, matching by
/// exact issue code. Used for synthetic international stances and single
/// disclosure stances.
pub fn influence_by_stance<R: RandomSource>(
    electorate: &mut Electorate,
    stance: &Stance,
    positive: bool,
    rng: &mut R,
) {
    for cluster in &mut electorate.clusters {
        for cluster_stance in &mut cluster.stances {
            if cluster_stance.issue().code == stance.issue().code {
                nudge(cluster_stance, stance.approach(), positive, rng);
            }
        }
    }
}

/// Moves one cluster stance toward the actor's position when `positive`,
/// away from it otherwise. The write goes through the clamped setter.
fn nudge<R: RandomSource>(
    cluster_stance: &mut Stance,
    actor_approach: i32,
    positive: bool,
    rng: &mut R,
) {
    let step = rng.uniform(MIN_SHIFT, MAX_SHIFT);
    let toward = if cluster_stance.approach() > actor_approach {
        -step
    } else {
        step
    };
    let shift = if positive { toward } else { -toward };
    cluster_stance.shift_approach(shift);
}
