//! Daily event scheduling.
//!
//! Each electorate flips a coin each day; on a 2 the d20 roll table picks
//! the event kind. Leader events share one daily slot across the whole
//! country: the first leader draw claims it, and later leader draws re-roll
//! the table (not the coin) until a non-leader kind comes up.

use crate::rng::RandomSource;
use election_events::EventKind;

/// Maps a d20 roll onto the event table.
///
/// Weights: debate 45%, scandal 5%, prank 10%, leader bout 5%, leader
/// debate 5%, international issue 10%, issue disclosure 20%.
pub fn kind_for_roll(roll: i32) -> EventKind {
    match roll {
        1..=9 => EventKind::Debate,
        10 => EventKind::Scandal,
        11..=12 => EventKind::Prank,
        13 => EventKind::LeaderBout,
        14 => EventKind::LeaderDebate,
        15..=16 => EventKind::InternationalIssue,
        _ => EventKind::IssueDisclosure,
    }
}

/// The shared daily leader-event slot. Reset by constructing a fresh slot
/// at the start of each day.
#[derive(Debug, Default)]
pub struct LeaderSlot {
    taken: bool,
}

impl LeaderSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_taken(&self) -> bool {
        self.taken
    }

    fn claim(&mut self) {
        self.taken = true;
    }
}

/// Decides whether an event fires for one electorate-day, and which one.
///
/// Returns `None` on a quiet day (the coin lands 1). A leader kind claims
/// the daily slot at draw time; when the slot is already taken the table is
/// re-rolled until a non-leader kind comes up.
pub fn draw_event<R: RandomSource>(rng: &mut R, slot: &mut LeaderSlot) -> Option<EventKind> {
    if rng.uniform(1, 2) == 1 {
        return None;
    }
    loop {
        let kind = kind_for_roll(rng.uniform(1, 20));
        if kind.is_leader_event() {
            if slot.is_taken() {
                continue;
            }
            slot.claim();
        }
        return Some(kind);
    }
}
