//! Campaign Event Records
//!
//! Structured records of resolved campaign events. Resolution logic lives in
//! `election-core`; this module only defines the data that crosses the crate
//! boundary, with JSONL serialization for event log mirrors.
//!
//! # Example
//!
//! ```
//! use election_events::{CampaignEvent, Contender, EventKind, EventOutcome};
//!
//! let event = CampaignEvent {
//!     event_id: "evt_00000001".to_string(),
//!     day: 12,
//!     electorate: "Wentworth".to_string(),
//!     outcome: EventOutcome::Prank {
//!         target: Contender::new("Dana Wells", "Foam Party"),
//!         laughed_off: true,
//!     },
//! };
//! assert_eq!(event.kind(), EventKind::Prank);
//! let line = event.to_jsonl().unwrap();
//! assert_eq!(CampaignEvent::from_jsonl(&line).unwrap(), event);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// The seven canonical campaign event kinds, in roll-table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Debate,
    Scandal,
    Prank,
    LeaderBout,
    LeaderDebate,
    InternationalIssue,
    IssueDisclosure,
}

impl EventKind {
    /// All kinds, ordered by their roll-table id (0 through 6).
    pub fn all() -> [EventKind; 7] {
        [
            EventKind::Debate,
            EventKind::Scandal,
            EventKind::Prank,
            EventKind::LeaderBout,
            EventKind::LeaderDebate,
            EventKind::InternationalIssue,
            EventKind::IssueDisclosure,
        ]
    }

    /// Position of this kind in the roll table (0 through 6).
    pub fn roll_id(self) -> usize {
        match self {
            EventKind::Debate => 0,
            EventKind::Scandal => 1,
            EventKind::Prank => 2,
            EventKind::LeaderBout => 3,
            EventKind::LeaderDebate => 4,
            EventKind::InternationalIssue => 5,
            EventKind::IssueDisclosure => 6,
        }
    }

    /// Returns true for events contested between party leaders.
    ///
    /// The scheduler allows at most one of these per day across all
    /// electorates.
    pub fn is_leader_event(self) -> bool {
        matches!(self, EventKind::LeaderBout | EventKind::LeaderDebate)
    }

    /// Short lowercase label used in headlines and log output.
    pub fn label(self) -> &'static str {
        match self {
            EventKind::Debate => "debate",
            EventKind::Scandal => "scandal",
            EventKind::Prank => "prank",
            EventKind::LeaderBout => "leader_bout",
            EventKind::LeaderDebate => "leader_debate",
            EventKind::InternationalIssue => "international_issue",
            EventKind::IssueDisclosure => "issue_disclosure",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A named participant in a campaign event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contender {
    /// Candidate or leader name.
    pub name: String,
    /// Party the contender campaigns for.
    pub party: String,
}

impl Contender {
    /// Creates a contender from name and party.
    pub fn new(name: impl Into<String>, party: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            party: party.into(),
        }
    }
}

/// Per-kind outcome payload of a resolved event.
///
/// Contested kinds carry both contenders and the winner (`None` on a tied
/// result, which changes no state). Issue kinds carry the issue code drawn at
/// resolution time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventOutcome {
    /// Two electorate candidates met in a local debate.
    Debate {
        contenders: [Contender; 2],
        winner: Option<Contender>,
    },
    /// A scandal broke over one candidate; `contained` means their team
    /// kept it under control.
    Scandal { target: Contender, contained: bool },
    /// A prank was played on one candidate; `laughed_off` means they turned
    /// it to their advantage.
    Prank { target: Contender, laughed_off: bool },
    /// Two party leaders clashed on the national stage.
    LeaderBout {
        contenders: [Contender; 2],
        winner: Option<Contender>,
    },
    /// Two party leaders held a televised national debate.
    LeaderDebate {
        contenders: [Contender; 2],
        winner: Option<Contender>,
    },
    /// An international development touched one issue; `swayed` means local
    /// opinion actually moved.
    InternationalIssue { issue: String, swayed: bool },
    /// A candidate went public on one issue; `credible` means the electorate
    /// bought it.
    IssueDisclosure {
        target: Contender,
        issue: String,
        credible: bool,
    },
}

impl EventOutcome {
    /// The event kind this outcome belongs to.
    pub fn kind(&self) -> EventKind {
        match self {
            EventOutcome::Debate { .. } => EventKind::Debate,
            EventOutcome::Scandal { .. } => EventKind::Scandal,
            EventOutcome::Prank { .. } => EventKind::Prank,
            EventOutcome::LeaderBout { .. } => EventKind::LeaderBout,
            EventOutcome::LeaderDebate { .. } => EventKind::LeaderDebate,
            EventOutcome::InternationalIssue { .. } => EventKind::InternationalIssue,
            EventOutcome::IssueDisclosure { .. } => EventKind::IssueDisclosure,
        }
    }
}

/// One resolved campaign event, as appended to the event log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignEvent {
    /// Unique event identifier, e.g. "evt_00000042".
    pub event_id: String,
    /// Days remaining until polling day when the event fired.
    pub day: u32,
    /// Electorate that triggered the event. Leader events are nation-wide
    /// but still record the electorate whose slot they consumed.
    pub electorate: String,
    /// Kind-specific outcome payload, flattened into the record.
    #[serde(flatten)]
    pub outcome: EventOutcome,
}

impl CampaignEvent {
    /// The kind of event this record describes.
    pub fn kind(&self) -> EventKind {
        self.outcome.kind()
    }

    /// Serializes the record to a single JSONL line (no trailing newline).
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parses a record from a JSONL line.
    pub fn from_jsonl(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

/// Generates a sequential event ID in the form "evt_00000001".
pub fn generate_event_id(sequence: u64) -> String {
    format!("evt_{:08}", sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_debate() -> CampaignEvent {
        CampaignEvent {
            event_id: generate_event_id(1),
            day: 5,
            electorate: "Grayndler".to_string(),
            outcome: EventOutcome::Debate {
                contenders: [
                    Contender::new("Alice North", "Labor Party"),
                    Contender::new("Omar Reid", "Liberal Party"),
                ],
                winner: Some(Contender::new("Alice North", "Labor Party")),
            },
        }
    }

    #[test]
    fn test_generate_event_id_format() {
        assert_eq!(generate_event_id(1), "evt_00000001");
        assert_eq!(generate_event_id(12345678), "evt_12345678");
    }

    #[test]
    fn test_all_kinds_in_roll_table_order() {
        let kinds = EventKind::all();
        assert_eq!(kinds.len(), 7);
        assert_eq!(kinds[0], EventKind::Debate);
        assert_eq!(kinds[3], EventKind::LeaderBout);
        assert_eq!(kinds[4], EventKind::LeaderDebate);
        assert_eq!(kinds[6], EventKind::IssueDisclosure);
    }

    #[test]
    fn test_roll_id_matches_all_order() {
        for (position, kind) in EventKind::all().into_iter().enumerate() {
            assert_eq!(kind.roll_id(), position);
        }
    }

    #[test]
    fn test_leader_event_predicate() {
        assert!(EventKind::LeaderBout.is_leader_event());
        assert!(EventKind::LeaderDebate.is_leader_event());
        assert!(!EventKind::Debate.is_leader_event());
        assert!(!EventKind::InternationalIssue.is_leader_event());
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&EventKind::LeaderDebate).unwrap();
        assert_eq!(json, "\"leader_debate\"");
        let back: EventKind = serde_json::from_str("\"issue_disclosure\"").unwrap();
        assert_eq!(back, EventKind::IssueDisclosure);
    }

    #[test]
    fn test_outcome_reports_its_kind() {
        let outcome = EventOutcome::InternationalIssue {
            issue: "Global Warming".to_string(),
            swayed: true,
        };
        assert_eq!(outcome.kind(), EventKind::InternationalIssue);
    }

    #[test]
    fn test_jsonl_round_trip() {
        let event = sample_debate();
        let line = event.to_jsonl().unwrap();
        assert!(!line.contains('\n'));
        let back = CampaignEvent::from_jsonl(&line).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_jsonl_flattens_kind_field() {
        let line = sample_debate().to_jsonl().unwrap();
        assert!(line.contains("\"kind\":\"debate\""));
        assert!(line.contains("\"electorate\":\"Grayndler\""));
    }

    #[test]
    fn test_tied_debate_has_no_winner() {
        let event = CampaignEvent {
            event_id: generate_event_id(2),
            day: 3,
            electorate: "Cook".to_string(),
            outcome: EventOutcome::Debate {
                contenders: [
                    Contender::new("Alice North", "Labor Party"),
                    Contender::new("Omar Reid", "Liberal Party"),
                ],
                winner: None,
            },
        };
        let back = CampaignEvent::from_jsonl(&event.to_jsonl().unwrap()).unwrap();
        match back.outcome {
            EventOutcome::Debate { winner, .. } => assert!(winner.is_none()),
            other => panic!("wrong outcome: {:?}", other),
        }
    }

    #[test]
    fn test_from_jsonl_rejects_garbage() {
        assert!(CampaignEvent::from_jsonl("not json").is_err());
        assert!(CampaignEvent::from_jsonl("{}").is_err());
    }
}
