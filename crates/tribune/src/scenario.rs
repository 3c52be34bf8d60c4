//! Scenario loading.
//!
//! A scenario file is a TOML document naming the parties and electorates an
//! election draws from. Parsing produces engine definitions; the structural
//! checks on stance ranges, party counts and candidate rosters live in the
//! engine, which refuses bad definitions before the first draw. A
//! compiled-in default scenario carries the canonical three-party contest.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use election_core::model::StanceRange;
use election_core::setup::{ElectionDefs, ElectorateDef, PartyDef};

/// Smallest electorate count a campaign may cover.
pub const MIN_ELECTORATES: usize = 1;

/// Largest electorate count a campaign may cover.
pub const MAX_ELECTORATES: usize = 10;

/// Errors raised while loading or applying a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("could not read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse scenario TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("could not render scenario TOML: {0}")]
    Render(#[from] toml::ser::Error),

    #[error("number of electorates must be between 1 and 10 inclusive, got {got}")]
    ElectorateCount { got: usize },

    #[error("scenario only defines {available} electorates but {requested} were requested")]
    NotEnoughElectorates { requested: usize, available: usize },
}

/// A complete election scenario as read from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub parties: Vec<PartyEntry>,
    #[serde(default)]
    pub electorates: Vec<ElectorateEntry>,
}

/// One contesting party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyEntry {
    pub name: String,
    /// Flavor line shown in the pre-campaign briefing.
    #[serde(default)]
    pub blurb: String,
    pub leader: String,
    /// Candidate names, consumed in electorate order.
    pub candidates: Vec<String>,
    /// Stance draw windows, one per catalog issue in catalog order.
    pub stance_ranges: Vec<StanceRangeEntry>,
}

/// Draw window for one issue: `[min, max]` pairs, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StanceRangeEntry {
    pub significance: [i32; 2],
    pub approach: [i32; 2],
}

/// One electorate and its configured population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElectorateEntry {
    pub name: String,
    pub population: u32,
}

impl Scenario {
    /// Loads a scenario from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ScenarioError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parses a scenario from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(content)?)
    }

    /// Renders the scenario back to a TOML string.
    pub fn to_toml(&self) -> Result<String, ScenarioError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Builds engine definitions covering the first `electorate_count`
    /// electorates of the scenario.
    ///
    /// Candidate rosters are cut to the same length; deeper structural
    /// validation happens in the engine.
    pub fn to_defs(&self, electorate_count: usize) -> Result<ElectionDefs, ScenarioError> {
        if !(MIN_ELECTORATES..=MAX_ELECTORATES).contains(&electorate_count) {
            return Err(ScenarioError::ElectorateCount {
                got: electorate_count,
            });
        }
        if self.electorates.len() < electorate_count {
            return Err(ScenarioError::NotEnoughElectorates {
                requested: electorate_count,
                available: self.electorates.len(),
            });
        }

        let electorates = self.electorates[..electorate_count]
            .iter()
            .map(|entry| ElectorateDef {
                name: entry.name.clone(),
                population: entry.population,
            })
            .collect();
        let parties = self
            .parties
            .iter()
            .map(|entry| PartyDef {
                name: entry.name.clone(),
                blurb: entry.blurb.clone(),
                leader_name: entry.leader.clone(),
                stance_ranges: entry
                    .stance_ranges
                    .iter()
                    .map(|row| {
                        StanceRange::new(
                            row.significance[0],
                            row.significance[1],
                            row.approach[0],
                            row.approach[1],
                        )
                    })
                    .collect(),
                candidate_names: entry
                    .candidates
                    .iter()
                    .take(electorate_count)
                    .cloned()
                    .collect(),
            })
            .collect();

        Ok(ElectionDefs {
            parties,
            electorates,
        })
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::from_str(default_scenario_toml()).expect("compiled-in scenario should always parse")
    }
}

/// The compiled-in default scenario: the canonical three-party contest over
/// ten electorates.
pub fn default_scenario_toml() -> &'static str {
    r#"# Default election scenario

[[parties]]
name = "Labor Party"
leader = "Pat Doyle"
blurb = "The Labor Party wants to provide equal opportunities for everyone in the nation, and tries to make decisions on what is best for the people."
candidates = [
    "Alice North",
    "Ben Okafor",
    "Carla Reyes",
    "David Nguyen",
    "Erin Walsh",
    "Farid Karimi",
    "Grace Holt",
    "Harry Liu",
    "Isla McBride",
    "Jack Turner",
]
stance_ranges = [
    { significance = [5, 9], approach = [55, 85] },
    { significance = [2, 6], approach = [30, 70] },
    { significance = [4, 8], approach = [50, 80] },
    { significance = [5, 9], approach = [60, 90] },
    { significance = [6, 9], approach = [65, 95] },
]

[[parties]]
name = "Liberal Party"
leader = "Kim Vu"
blurb = "The Liberal Party makes decisions on what it thinks is best for the nation, even when that weighs on the people of the nation."
candidates = [
    "Omar Reid",
    "Priya Sharma",
    "Quentin Ash",
    "Rosa Marino",
    "Stuart Webb",
    "Tara Singh",
    "Uma Patel",
    "Victor Crane",
    "Wendy Lau",
    "Xavier Boyd",
]
stance_ranges = [
    { significance = [6, 9], approach = [20, 50] },
    { significance = [2, 5], approach = [40, 75] },
    { significance = [3, 7], approach = [35, 65] },
    { significance = [2, 6], approach = [10, 45] },
    { significance = [4, 8], approach = [30, 60] },
]

[[parties]]
name = "Foam Party"
leader = "Sam Reeve"
blurb = "The Foam Party just wants everyone to have a good time, and struggles with making choices on the bigger issues."
candidates = [
    "Dana Wells",
    "Eddie Plum",
    "Fiona Frost",
    "Gil Harper",
    "Holly Glade",
    "Ivan Spry",
    "Jess Bloom",
    "Kit Sorrel",
    "Lola Brine",
    "Max Feather",
]
stance_ranges = [
    { significance = [1, 4], approach = [25, 75] },
    { significance = [6, 9], approach = [45, 95] },
    { significance = [1, 5], approach = [10, 90] },
    { significance = [2, 7], approach = [30, 80] },
    { significance = [1, 5], approach = [20, 70] },
]

[[electorates]]
name = "Grayndler"
population = 9600

[[electorates]]
name = "Bennelong"
population = 11200

[[electorates]]
name = "Cook"
population = 8800

[[electorates]]
name = "Wentworth"
population = 10400

[[electorates]]
name = "Warringah"
population = 9200

[[electorates]]
name = "Kooyong"
population = 10800

[[electorates]]
name = "Higgins"
population = 9900

[[electorates]]
name = "Melbourne"
population = 12000

[[electorates]]
name = "Sydney"
population = 12800

[[electorates]]
name = "Curtin"
population = 8400
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scenario_parses() {
        let scenario = Scenario::default();
        assert_eq!(scenario.parties.len(), 3);
        assert_eq!(scenario.electorates.len(), 10);
        assert_eq!(scenario.parties[0].name, "Labor Party");
        assert_eq!(scenario.parties[2].leader, "Sam Reeve");
        assert_eq!(scenario.electorates[0].name, "Grayndler");
    }

    #[test]
    fn test_default_scenario_is_engine_valid() {
        let defs = Scenario::default().to_defs(10).unwrap();
        assert!(defs.validate().is_ok());
    }

    #[test]
    fn test_to_defs_takes_electorate_prefix() {
        let defs = Scenario::default().to_defs(3).unwrap();
        assert_eq!(defs.electorates.len(), 3);
        assert_eq!(defs.electorates[2].name, "Cook");
        for party in &defs.parties {
            assert_eq!(party.candidate_names.len(), 3);
        }
    }

    #[test]
    fn test_to_defs_rejects_out_of_range_counts() {
        let scenario = Scenario::default();
        assert!(matches!(
            scenario.to_defs(0),
            Err(ScenarioError::ElectorateCount { got: 0 })
        ));
        assert!(matches!(
            scenario.to_defs(11),
            Err(ScenarioError::ElectorateCount { got: 11 })
        ));
    }

    #[test]
    fn test_to_defs_rejects_short_scenarios() {
        let mut scenario = Scenario::default();
        scenario.electorates.truncate(2);
        match scenario.to_defs(5) {
            Err(ScenarioError::NotEnoughElectorates {
                requested: 5,
                available: 2,
            }) => {}
            other => panic!("expected shortage error, got {:?}", other),
        }
    }

    #[test]
    fn test_partial_party_defaults_blurb() {
        let toml = r#"
            [[parties]]
            name = "Quiet Party"
            leader = "Lee Park"
            candidates = ["A"]
            stance_ranges = [
                { significance = [1, 9], approach = [0, 100] },
                { significance = [1, 9], approach = [0, 100] },
                { significance = [1, 9], approach = [0, 100] },
                { significance = [1, 9], approach = [0, 100] },
                { significance = [1, 9], approach = [0, 100] },
            ]

            [[electorates]]
            name = "Somewhere"
            population = 1000
        "#;
        let scenario = Scenario::from_str(toml).unwrap();
        assert_eq!(scenario.parties[0].blurb, "");
        assert_eq!(scenario.parties[0].stance_ranges.len(), 5);
    }

    #[test]
    fn test_round_trip_through_toml() {
        let scenario = Scenario::default();
        let rendered = scenario.to_toml().unwrap();
        let back = Scenario::from_str(&rendered).unwrap();
        assert_eq!(back, scenario);
    }

    #[test]
    fn test_garbage_is_a_parse_error() {
        assert!(matches!(
            Scenario::from_str("not = [valid"),
            Err(ScenarioError::Parse(_))
        ));
    }

    #[test]
    fn test_stance_windows_map_into_defs() {
        let defs = Scenario::default().to_defs(1).unwrap();
        let labor = &defs.parties[0];
        assert_eq!(labor.stance_ranges[0], StanceRange::new(5, 9, 55, 85));
        assert_eq!(labor.stance_ranges[4], StanceRange::new(6, 9, 65, 95));
    }
}
