use serde::Serialize;
use statrs::statistics::Statistics;

use crate::distribute::BucketMap;
use crate::label::BucketId;
use crate::team::Standing;

/// Combined strength of one bucket.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BucketStrength {
    #[serde(rename = "label")]
    pub id: BucketId,
    pub teams: usize,
    pub total_points: u64,
    pub mean_points: f64,
}

/// How evenly points are spread across the buckets of one layout.
///
/// Statistics are taken over bucket totals, treating the buckets as the
/// whole population.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BalanceSummary {
    pub buckets: Vec<BucketStrength>,
    pub mean_total: f64,
    pub std_dev_total: f64,
    /// Difference between the strongest and weakest bucket totals
    pub spread: u64,
}

impl BalanceSummary {
    pub fn of<T: Standing>(map: &BucketMap<'_, T>) -> Self {
        let buckets: Vec<BucketStrength> = map
            .iter()
            .map(|bucket| {
                let total_points: u64 = bucket.teams.iter().map(|t| u64::from(t.points())).sum();
                let mean_points = if bucket.is_empty() {
                    0.0
                } else {
                    total_points as f64 / bucket.len() as f64
                };
                BucketStrength {
                    id: bucket.id,
                    teams: bucket.len(),
                    total_points,
                    mean_points,
                }
            })
            .collect();

        if buckets.is_empty() {
            return BalanceSummary {
                buckets,
                mean_total: 0.0,
                std_dev_total: 0.0,
                spread: 0,
            };
        }

        let totals: Vec<f64> = buckets.iter().map(|b| b.total_points as f64).collect();

        BalanceSummary {
            mean_total: totals.iter().mean(),
            std_dev_total: totals.iter().population_std_dev(),
            spread: spread(buckets.iter().map(|b| b.total_points)),
            buckets,
        }
    }
}

/// Strongest minus weakest total, kept in integers so large totals stay exact.
fn spread(totals: impl Iterator<Item = u64> + Clone) -> u64 {
    let strongest = totals.clone().max().unwrap_or(0);
    let weakest = totals.min().unwrap_or(0);
    strongest - weakest
}
