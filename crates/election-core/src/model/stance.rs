//! Stances on contested issues.

use crate::catalog::Issue;
use serde::{Deserialize, Serialize};

/// Lower bound of an approach value.
pub const APPROACH_MIN: i32 = 0;

/// Upper bound of an approach value.
pub const APPROACH_MAX: i32 = 100;

/// Lowest significance a stance can carry.
pub const SIGNIFICANCE_MIN: i32 = 1;

/// Highest significance a stance can carry.
pub const SIGNIFICANCE_MAX: i32 = 9;

/// One opinion on one issue.
///
/// Significance (how much the holder cares, 1-9) is fixed at creation.
/// Approach (where they stand, 0-100) moves during the campaign, always
/// through the clamped setter. Each stance is owned by exactly one
/// candidate or one cluster; they are never shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stance {
    issue: Issue,
    significance: i32,
    approach: i32,
}

impl Stance {
    /// Creates a stance, clamping both values into their domains.
    pub fn new(issue: Issue, significance: i32, approach: i32) -> Self {
        Self {
            issue,
            significance: significance.clamp(SIGNIFICANCE_MIN, SIGNIFICANCE_MAX),
            approach: approach.clamp(APPROACH_MIN, APPROACH_MAX),
        }
    }

    pub fn issue(&self) -> &Issue {
        &self.issue
    }

    pub fn significance(&self) -> i32 {
        self.significance
    }

    pub fn approach(&self) -> i32 {
        self.approach
    }

    /// Overwrites the approach, clamped into [0,100].
    pub fn set_approach(&mut self, value: i32) {
        self.approach = value.clamp(APPROACH_MIN, APPROACH_MAX);
    }

    /// Moves the approach by a signed step, clamped into [0,100].
    pub fn shift_approach(&mut self, delta: i32) {
        self.set_approach(self.approach.saturating_add(delta));
    }
}
