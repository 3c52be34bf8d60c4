//! Electorate and cluster generation.

use crate::catalog::IssueCatalog;
use crate::model::{Cluster, Electorate, Stance, CLUSTERS_PER_ELECTORATE};
use crate::model::{APPROACH_MAX, APPROACH_MIN, SIGNIFICANCE_MAX, SIGNIFICANCE_MIN};
use crate::rng::RandomSource;
use crate::setup::ElectorateDef;

/// Generates one electorate: four population clusters drawn off the
/// configured population, each with its own opinion on every issue.
///
/// Cluster populations land between an eighth and a quarter of the
/// configured total, so four of them never exceed it. The electorate's
/// population is then set to their sum, once, and clusters stay fixed voter
/// blocks for the rest of the run.
pub fn generate_electorate<R: RandomSource>(
    def: &ElectorateDef,
    issues: &IssueCatalog,
    rng: &mut R,
) -> Electorate {
    let max_pop = (def.population / 4) as i32;
    let min_pop = max_pop / 2;

    let mut clusters: Vec<Cluster> = (0..CLUSTERS_PER_ELECTORATE)
        .map(|_| Cluster::new(rng.uniform(min_pop, max_pop) as u32, Vec::new()))
        .collect();

    for cluster in &mut clusters {
        cluster.stances = issues
            .iter()
            .map(|issue| {
                let significance = rng.uniform(SIGNIFICANCE_MIN, SIGNIFICANCE_MAX);
                let approach = rng.uniform(APPROACH_MIN, APPROACH_MAX);
                Stance::new(issue.clone(), significance, approach)
            })
            .collect();
    }

    let population = clusters.iter().map(|cluster| cluster.population).sum();
    Electorate::new(def.name.clone(), population, clusters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::CampaignRng;

    #[test]
    fn test_population_is_exactly_the_cluster_sum() {
        let issues = IssueCatalog::standard();
        let def = ElectorateDef {
            name: "Bennelong".to_string(),
            population: 8000,
        };
        let mut rng = CampaignRng::from_seed(5);
        let electorate = generate_electorate(&def, &issues, &mut rng);

        let sum: u32 = electorate.clusters.iter().map(|c| c.population).sum();
        assert_eq!(electorate.population, sum);
        assert_eq!(electorate.clusters.len(), CLUSTERS_PER_ELECTORATE);
    }

    #[test]
    fn test_cluster_populations_stay_in_band() {
        let issues = IssueCatalog::standard();
        let def = ElectorateDef {
            name: "Cook".to_string(),
            population: 10000,
        };
        for seed in 0..20 {
            let mut rng = CampaignRng::from_seed(seed);
            let electorate = generate_electorate(&def, &issues, &mut rng);
            for cluster in &electorate.clusters {
                assert!((1250..=2500).contains(&cluster.population));
            }
            assert!(electorate.population <= def.population);
        }
    }

    #[test]
    fn test_every_cluster_holds_one_stance_per_issue() {
        let issues = IssueCatalog::standard();
        let def = ElectorateDef {
            name: "Grayndler".to_string(),
            population: 6000,
        };
        let mut rng = CampaignRng::from_seed(9);
        let electorate = generate_electorate(&def, &issues, &mut rng);

        for cluster in &electorate.clusters {
            assert_eq!(cluster.stances.len(), issues.len());
            for (stance, issue) in cluster.stances.iter().zip(issues.iter()) {
                assert_eq!(stance.issue().code, issue.code);
                assert!((SIGNIFICANCE_MIN..=SIGNIFICANCE_MAX).contains(&stance.significance()));
                assert!((APPROACH_MIN..=APPROACH_MAX).contains(&stance.approach()));
            }
        }
    }
}
