//! Electorates and their population clusters.

use super::stance::Stance;
use serde::{Deserialize, Serialize};

/// Number of opinion clusters generated per electorate.
pub const CLUSTERS_PER_ELECTORATE: usize = 4;

/// A sub-segment of an electorate's population.
///
/// Clusters are fixed voter blocks: population never changes after
/// generation, only the approach values of their stances move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    pub population: u32,
    /// One stance per catalog issue, in catalog order.
    pub stances: Vec<Stance>,
}

impl Cluster {
    pub fn new(population: u32, stances: Vec<Stance>) -> Self {
        Self {
            population,
            stances,
        }
    }
}

/// A voting district returning one seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Electorate {
    pub name: String,
    /// Total population. Set to the sum of cluster populations once, at
    /// generation time, and never resynchronized afterwards.
    pub population: u32,
    pub clusters: Vec<Cluster>,
}

impl Electorate {
    pub fn new(name: impl Into<String>, population: u32, clusters: Vec<Cluster>) -> Self {
        Self {
            name: name.into(),
            population,
            clusters,
        }
    }
}
