//! Random draw sources.
//!
//! Every stochastic component takes a `RandomSource` by mutable reference;
//! there is no global engine. All draws come off one shared stream, so the
//! fixed traversal order (days, then electorates, then event resolution,
//! then tally) pins the whole run for a given seed.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use std::collections::VecDeque;

/// Source of every random draw the engine makes.
pub trait RandomSource {
    /// Uniform integer draw, inclusive on both ends.
    fn uniform(&mut self, min: i32, max: i32) -> i32;

    /// Normal draw centered on `center`, rounded to the nearest integer
    /// with ties going away from zero.
    fn normal_round(&mut self, center: i32, stddev: f64) -> i32;

    /// Random permutation of `0..n`, used to pick distinct participants
    /// out of the party pool.
    fn permutation(&mut self, n: usize) -> Vec<usize>;
}

/// Production draw source backed by a small, fast, seedable PRNG.
#[derive(Debug, Clone)]
pub struct CampaignRng {
    rng: SmallRng,
}

impl CampaignRng {
    /// Creates a source with a fixed seed. Two sources built from the same
    /// seed yield identical streams.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Creates a source seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }
}

impl RandomSource for CampaignRng {
    fn uniform(&mut self, min: i32, max: i32) -> i32 {
        self.rng.gen_range(min..=max)
    }

    fn normal_round(&mut self, center: i32, stddev: f64) -> i32 {
        let z: f64 = self.rng.sample(StandardNormal);
        (center as f64 + stddev * z).round() as i32
    }

    fn permutation(&mut self, n: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(&mut self.rng);
        order
    }
}

/// Replays a fixed queue of draws.
///
/// Built for tests and for reproducing a recorded draw stream: `uniform` and
/// `normal_round` both pop the next scripted value verbatim (bounds and
/// distribution parameters are checked against the request but not
/// re-drawn), and `permutation` pops a scripted ordering, falling back to
/// the identity permutation when none is queued.
///
/// Panics if the draw script runs dry, or if a scripted value lies outside
/// the range the caller asked for.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    draws: VecDeque<i32>,
    permutations: VecDeque<Vec<usize>>,
}

impl ScriptedRandom {
    /// Creates a scripted source from an ordered list of draw values.
    pub fn new(draws: impl IntoIterator<Item = i32>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            permutations: VecDeque::new(),
        }
    }

    /// Queues participant orderings returned by successive `permutation`
    /// calls.
    pub fn with_permutations(mut self, perms: impl IntoIterator<Item = Vec<usize>>) -> Self {
        self.permutations = perms.into_iter().collect();
        self
    }

    /// Returns true once every scripted draw has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.draws.is_empty() && self.permutations.is_empty()
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform(&mut self, min: i32, max: i32) -> i32 {
        let value = self
            .draws
            .pop_front()
            .unwrap_or_else(|| panic!("draw script ran dry on uniform({}, {})", min, max));
        assert!(
            value >= min && value <= max,
            "scripted value {} outside uniform({}, {})",
            value,
            min,
            max
        );
        value
    }

    fn normal_round(&mut self, center: i32, stddev: f64) -> i32 {
        self.draws.pop_front().unwrap_or_else(|| {
            panic!("draw script ran dry on normal_round({}, {})", center, stddev)
        })
    }

    fn permutation(&mut self, n: usize) -> Vec<usize> {
        match self.permutations.pop_front() {
            Some(order) => {
                assert_eq!(order.len(), n, "scripted permutation has wrong length");
                order
            }
            None => (0..n).collect(),
        }
    }
}
