//! The election data model.
//!
//! Plain owned data, no interior references: candidates live inside their
//! party, stances inside their holder. Components address candidates as
//! (party index, electorate index) pairs.

pub mod candidate;
pub mod electorate;
pub mod party;
pub mod stance;
pub mod traits;

pub use candidate::Candidate;
pub use electorate::{Cluster, Electorate, CLUSTERS_PER_ELECTORATE};
pub use party::{ManagerialTeam, Party, StanceRange};
pub use stance::{Stance, APPROACH_MAX, APPROACH_MIN, SIGNIFICANCE_MAX, SIGNIFICANCE_MIN};
pub use traits::{Campaigner, Characteristic, TraitSet, TRAIT_MAX, TRAIT_MIN};
