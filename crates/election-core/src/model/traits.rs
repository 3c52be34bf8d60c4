//! Characteristics and trait sets.
//!
//! Every campaigning entity owns a `TraitSet` by value; there is no person
//! hierarchy. Writes clamp into the playable range instead of erroring,
//! since in-play excursions are normal campaign wear and tear.

use serde::{Deserialize, Serialize};

/// Lower bound of every characteristic value.
pub const TRAIT_MIN: i32 = 0;

/// Upper bound of every characteristic value.
pub const TRAIT_MAX: i32 = 100;

/// Named characteristics tracked for campaigners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Characteristic {
    Popularity,
    Charisma,
    Debating,
    EventHandling,
}

/// A campaigner's characteristic values, clamped to [0,100] on every write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitSet {
    popularity: i32,
    charisma: i32,
    debating: i32,
    event_handling: i32,
}

impl TraitSet {
    /// Builds a trait set, clamping each starting value.
    pub fn new(popularity: i32, charisma: i32, debating: i32, event_handling: i32) -> Self {
        let mut set = TraitSet::default();
        set.set(Characteristic::Popularity, popularity);
        set.set(Characteristic::Charisma, charisma);
        set.set(Characteristic::Debating, debating);
        set.set(Characteristic::EventHandling, event_handling);
        set
    }

    /// Current value of one characteristic.
    pub fn get(&self, characteristic: Characteristic) -> i32 {
        match characteristic {
            Characteristic::Popularity => self.popularity,
            Characteristic::Charisma => self.charisma,
            Characteristic::Debating => self.debating,
            Characteristic::EventHandling => self.event_handling,
        }
    }

    /// Overwrites one characteristic, clamped into [0,100].
    pub fn set(&mut self, characteristic: Characteristic, value: i32) {
        let slot = match characteristic {
            Characteristic::Popularity => &mut self.popularity,
            Characteristic::Charisma => &mut self.charisma,
            Characteristic::Debating => &mut self.debating,
            Characteristic::EventHandling => &mut self.event_handling,
        };
        *slot = value.clamp(TRAIT_MIN, TRAIT_MAX);
    }

    /// Applies a signed delta to one characteristic, clamped into [0,100].
    pub fn update(&mut self, characteristic: Characteristic, delta: i32) {
        self.set(characteristic, self.get(characteristic).saturating_add(delta));
    }
}

/// Shared capability surface for anything that campaigns.
///
/// Candidates, leaders and managerial teams all expose a name and a trait
/// set; event resolution and reporting work against this trait rather than
/// a concrete type.
pub trait Campaigner {
    fn name(&self) -> &str;
    fn traits(&self) -> &TraitSet;
    fn traits_mut(&mut self) -> &mut TraitSet;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_starting_values() {
        let set = TraitSet::new(150, -20, 50, 5);
        assert_eq!(set.get(Characteristic::Popularity), 100);
        assert_eq!(set.get(Characteristic::Charisma), 0);
        assert_eq!(set.get(Characteristic::Debating), 50);
        assert_eq!(set.get(Characteristic::EventHandling), 5);
    }

    #[test]
    fn test_update_clamps_both_ends() {
        let mut set = TraitSet::new(95, 5, 50, 0);
        set.update(Characteristic::Popularity, 20);
        assert_eq!(set.get(Characteristic::Popularity), 100);
        set.update(Characteristic::Charisma, -10);
        assert_eq!(set.get(Characteristic::Charisma), 0);
    }

    #[test]
    fn test_update_survives_extreme_deltas() {
        let mut set = TraitSet::new(50, 50, 50, 50);
        set.update(Characteristic::Debating, i32::MAX);
        assert_eq!(set.get(Characteristic::Debating), 100);
        set.update(Characteristic::Debating, i32::MIN);
        assert_eq!(set.get(Characteristic::Debating), 0);
    }

    #[test]
    fn test_set_then_get_round_trip() {
        let mut set = TraitSet::default();
        set.set(Characteristic::EventHandling, 3);
        assert_eq!(set.get(Characteristic::EventHandling), 3);
    }

    #[test]
    fn test_serde_uses_snake_case_fields() {
        let set = TraitSet::new(10, 20, 30, 4);
        let json = serde_json::to_string(&set).unwrap();
        assert!(json.contains("\"event_handling\":4"));
        let back: TraitSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
