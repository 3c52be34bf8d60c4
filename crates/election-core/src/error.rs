//! Engine error types.
//!
//! Only structural preconditions are errors. In-play value excursions
//! (traits or approaches pushed outside their range) are clamped where they
//! happen and never surface here.

use thiserror::Error;

/// Fatal precondition violations detected while building an election.
///
/// Structurally bad input is refused outright, never clamped into shape.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("issue catalog must hold exactly {expected} issues, got {got}")]
    CatalogSize { expected: usize, got: usize },

    #[error("issue catalog out of category order at position {position}")]
    CatalogOrder { position: usize },

    #[error("event table must hold exactly {expected} templates, got {got}")]
    EventTableSize { expected: usize, got: usize },

    #[error("event table out of roll order at position {position}")]
    EventTableOrder { position: usize },

    #[error("event template '{kind}' must have a positive impact")]
    EventImpact { kind: String },

    #[error("need at least 2 parties to contest an election, got {got}")]
    TooFewParties { got: usize },

    #[error("need at least 1 electorate")]
    NoElectorates,

    #[error("duplicate electorate name '{0}'")]
    DuplicateElectorate(String),

    #[error("electorate '{electorate}' must have a positive population")]
    ZeroPopulation { electorate: String },

    #[error("party '{party}' stance-range template must have {expected} rows, got {got}")]
    StanceRangeRows {
        party: String,
        expected: usize,
        got: usize,
    },

    #[error("party '{party}' stance range for '{issue}': {detail}")]
    StanceRangeBounds {
        party: String,
        issue: String,
        detail: String,
    },

    #[error("party '{party}' fields {got} candidates for {expected} electorates")]
    CandidateShortfall {
        party: String,
        expected: usize,
        got: usize,
    },
}
