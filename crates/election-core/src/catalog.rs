//! Issue and event catalogs.
//!
//! Both catalogs are built once at startup and read-only for the rest of
//! the run. Construction validates shape and ordering; the rest of the
//! engine indexes them positionally and relies on that validation.

use crate::error::SetupError;
use crate::model::Characteristic;
use election_events::EventKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of issues contested in every election.
pub const ISSUE_COUNT: usize = 5;

/// Number of entries in the event roll table.
pub const EVENT_KIND_COUNT: usize = 7;

/// The five fixed issue categories, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    Economic,
    Social,
    Logistics,
    Environmental,
    Health,
}

impl IssueCategory {
    /// All categories, in catalog order.
    pub fn all() -> [IssueCategory; ISSUE_COUNT] {
        [
            IssueCategory::Economic,
            IssueCategory::Social,
            IssueCategory::Logistics,
            IssueCategory::Environmental,
            IssueCategory::Health,
        ]
    }

    /// Position of this category in catalog order.
    pub fn position(self) -> usize {
        match self {
            IssueCategory::Economic => 0,
            IssueCategory::Social => 1,
            IssueCategory::Logistics => 2,
            IssueCategory::Environmental => 3,
            IssueCategory::Health => 4,
        }
    }

    /// Lowercase label for reports and log lines.
    pub fn label(self) -> &'static str {
        match self {
            IssueCategory::Economic => "economic",
            IssueCategory::Social => "social",
            IssueCategory::Logistics => "logistics",
            IssueCategory::Environmental => "environmental",
            IssueCategory::Health => "health",
        }
    }
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single contested issue. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Identifying code, unique within the catalog.
    pub code: String,
    /// One-line statement of the question put to voters.
    pub statement: String,
    pub category: IssueCategory,
}

impl Issue {
    pub fn new(
        code: impl Into<String>,
        statement: impl Into<String>,
        category: IssueCategory,
    ) -> Self {
        Self {
            code: code.into(),
            statement: statement.into(),
            category,
        }
    }
}

/// The fixed, ordered list of issues every stance vector indexes into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCatalog {
    issues: Vec<Issue>,
}

impl IssueCatalog {
    /// Builds a catalog, enforcing the size and category-order invariant
    /// that positional indexing depends on.
    pub fn new(issues: Vec<Issue>) -> Result<Self, SetupError> {
        if issues.len() != ISSUE_COUNT {
            return Err(SetupError::CatalogSize {
                expected: ISSUE_COUNT,
                got: issues.len(),
            });
        }
        for (position, issue) in issues.iter().enumerate() {
            if issue.category.position() != position {
                return Err(SetupError::CatalogOrder { position });
            }
        }
        Ok(Self { issues })
    }

    /// The canonical five issues of the campaign.
    pub fn standard() -> Self {
        let issues = vec![
            Issue::new(
                "COVID-19 Financial Situation",
                "How should the state cushion households through the downturn?",
                IssueCategory::Economic,
            ),
            Issue::new(
                "Sauce Debate",
                "Which condiment deserves official standing at the national barbecue?",
                IssueCategory::Social,
            ),
            Issue::new(
                "Toilet Paper Shortage",
                "Who keeps the shelves stocked when panic buying strikes?",
                IssueCategory::Logistics,
            ),
            Issue::new(
                "Global Warming",
                "How fast should the grid move off coal?",
                IssueCategory::Environmental,
            ),
            Issue::new(
                "Mandatory Vaccines",
                "Should vaccination be a condition of front-line public work?",
                IssueCategory::Health,
            ),
        ];
        Self { issues }
    }

    /// The issue filed under `category`.
    pub fn by_category(&self, category: IssueCategory) -> &Issue {
        &self.issues[category.position()]
    }

    /// Issues in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Blueprint for one kind of campaign event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTemplate {
    pub kind: EventKind,
    /// Magnitude applied to traits when the event resolves.
    pub impact: i32,
    /// The characteristic the event acts on.
    pub impacted: Characteristic,
}

impl EventTemplate {
    pub fn new(kind: EventKind, impact: i32, impacted: Characteristic) -> Self {
        Self {
            kind,
            impact,
            impacted,
        }
    }
}

/// The fixed event roster, indexed by roll-table id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCatalog {
    templates: Vec<EventTemplate>,
}

impl EventCatalog {
    /// Builds an event catalog, enforcing roll-table order and positive
    /// impacts.
    pub fn new(templates: Vec<EventTemplate>) -> Result<Self, SetupError> {
        if templates.len() != EVENT_KIND_COUNT {
            return Err(SetupError::EventTableSize {
                expected: EVENT_KIND_COUNT,
                got: templates.len(),
            });
        }
        for (position, template) in templates.iter().enumerate() {
            if template.kind.roll_id() != position {
                return Err(SetupError::EventTableOrder { position });
            }
            if template.impact <= 0 {
                return Err(SetupError::EventImpact {
                    kind: template.kind.label().to_string(),
                });
            }
        }
        Ok(Self { templates })
    }

    /// The canonical seven-event roster.
    pub fn standard() -> Self {
        let templates = vec![
            EventTemplate::new(EventKind::Debate, 6, Characteristic::Debating),
            EventTemplate::new(EventKind::Scandal, 10, Characteristic::Popularity),
            EventTemplate::new(EventKind::Prank, 5, Characteristic::Popularity),
            EventTemplate::new(EventKind::LeaderBout, 10, Characteristic::Popularity),
            EventTemplate::new(EventKind::LeaderDebate, 10, Characteristic::Popularity),
            EventTemplate::new(EventKind::InternationalIssue, 7, Characteristic::Popularity),
            EventTemplate::new(EventKind::IssueDisclosure, 5, Characteristic::Popularity),
        ];
        Self { templates }
    }

    /// Template for one event kind.
    pub fn template(&self, kind: EventKind) -> &EventTemplate {
        &self.templates[kind.roll_id()]
    }
}
