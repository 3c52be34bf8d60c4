//! The campaign window.
//!
//! One pass per remaining day, counting down to polling day. Each electorate
//! draws once against the event table per day, and at most one leader event
//! fires per day across the whole country. After the final day, leaders lend
//! their coattails to candidates polling behind them.

pub mod influence;
pub mod resolve;
pub mod schedule;

pub use resolve::resolve_event;
pub use schedule::{draw_event, LeaderSlot};

use crate::catalog::{EventCatalog, IssueCatalog};
use crate::log::EventLog;
use crate::model::{Characteristic, Electorate, Party};
use crate::rng::RandomSource;
use election_events::{CampaignDay, CampaignEvent};

/// Runs the whole campaign window and the closing coattails pass.
///
/// Traversal order is fixed: days count down, electorates are visited in
/// registration order within each day. With a seeded source this pins every
/// draw in the run.
pub fn run_campaign<R: RandomSource>(
    days: u32,
    parties: &mut [Party],
    electorates: &mut [Electorate],
    issues: &IssueCatalog,
    events: &EventCatalog,
    log: &mut EventLog,
    rng: &mut R,
) -> std::io::Result<()> {
    tracing::info!("campaign opens, {} days of campaigning", days);
    for day in CampaignDay::countdown(days) {
        run_day(day, parties, electorates, issues, events, log, rng)?;
    }
    coattails_boost(parties);
    tracing::info!("campaign closes with {} events on record", log.event_count());
    Ok(())
}

/// Runs one campaign day.
///
/// The leader slot is fresh each morning, so a leader event blocked
/// yesterday can fire again today.
fn run_day<R: RandomSource>(
    day: CampaignDay,
    parties: &mut [Party],
    electorates: &mut [Electorate],
    issues: &IssueCatalog,
    events: &EventCatalog,
    log: &mut EventLog,
    rng: &mut R,
) -> std::io::Result<()> {
    let mut slot = LeaderSlot::new();
    for electorate_idx in 0..electorates.len() {
        if let Some(kind) = draw_event(rng, &mut slot) {
            let outcome = resolve_event(
                kind,
                electorate_idx,
                parties,
                electorates,
                issues,
                events,
                rng,
            );
            tracing::debug!(
                "{}: {} in {}",
                day,
                kind,
                electorates[electorate_idx].name
            );
            let record = CampaignEvent {
                event_id: log.next_id(),
                day: day.remaining,
                electorate: electorates[electorate_idx].name.clone(),
                outcome,
            };
            log.record(record)?;
        }
    }
    Ok(())
}

/// End-of-campaign coattails: a candidate polling behind their own leader
/// picks up a quarter of the leader's popularity.
pub fn coattails_boost(parties: &mut [Party]) {
    for party in parties.iter_mut() {
        let leader_popularity = party.leader.traits.get(Characteristic::Popularity);
        for candidate in &mut party.candidates {
            if candidate.traits.get(Characteristic::Popularity) < leader_popularity {
                candidate
                    .traits
                    .update(Characteristic::Popularity, leader_popularity / 4);
            }
        }
    }
}
