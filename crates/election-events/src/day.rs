//! Campaign Calendar Types
//!
//! The campaign clock counts down: a day stamp records how many days remain
//! until polling day, and the final day of campaigning is day 1.
//!
//! # Example
//!
//! ```
//! use election_events::CampaignDay;
//!
//! let day = CampaignDay::new(12);
//! assert_eq!(day.to_string(), "12 days until the election");
//! assert!(!day.is_final());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the campaign calendar, measured in days remaining.
///
/// Serializes as a bare integer so event records stay compact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CampaignDay {
    /// Days left until polling day, inclusive of this one.
    pub remaining: u32,
}

impl CampaignDay {
    /// Creates a day stamp with the given number of days remaining.
    pub fn new(remaining: u32) -> Self {
        Self { remaining }
    }

    /// Iterates the campaign window from the opening day down to day 1.
    pub fn countdown(total_days: u32) -> impl Iterator<Item = CampaignDay> {
        (1..=total_days).rev().map(CampaignDay::new)
    }

    /// Returns true on the last day of campaigning.
    pub fn is_final(self) -> bool {
        self.remaining == 1
    }
}

impl fmt::Display for CampaignDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.remaining == 1 {
            write!(f, "1 day until the election")
        } else {
            write!(f, "{} days until the election", self.remaining)
        }
    }
}
