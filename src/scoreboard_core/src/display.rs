//! Derived views for renderers. Each call recomputes the layout from the
//! snapshot it is given; nothing is cached between calls.

use serde::Serialize;
use std::collections::HashMap;

use crate::distribute::{distribute, BucketMap};
use crate::label::{labels, BucketId};
use crate::selector::{select_configuration, BucketConfiguration};
use crate::strength::BalanceSummary;
use crate::team::Standing;

/// Layout metadata together with the seeded buckets.
#[derive(Debug, Serialize)]
#[serde(bound = "T: Serialize")]
pub struct BucketLayout<'a, T> {
    pub config: BucketConfiguration,
    pub buckets: BucketMap<'a, T>,
}

impl<'a, T: Standing> BucketLayout<'a, T> {
    pub fn balance(&self) -> BalanceSummary {
        BalanceSummary::of(&self.buckets)
    }
}

/// Select a configuration for `teams` and seed them into it.
pub fn bucket_display<T: Standing>(teams: &[T]) -> BucketLayout<'_, T> {
    let config = select_configuration(teams.len());
    let buckets = distribute(teams, &config);
    BucketLayout { config, buckets }
}

/// Map of team id to the bucket it lands in for this snapshot.
pub fn team_bucket_assignments<T: Standing>(teams: &[T]) -> HashMap<String, BucketId> {
    bucket_display(teams)
        .buckets
        .assignments()
        .into_iter()
        .map(|(id, bucket)| (id.to_string(), bucket))
        .collect()
}

/// Buckets a leaderboard of `team_count` teams renders, in order.
pub fn available_buckets(team_count: usize) -> Vec<BucketId> {
    labels(select_configuration(team_count).buckets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::team::Team;

    fn league() -> Vec<Team> {
        vec![
            Team::new("falcons", "Falcons", 18).with_record(6, 0),
            Team::new("otters", "Otters", 15).with_record(5, 1),
            Team::new("wolves", "Wolves", 12).with_record(4, 2),
            Team::new("herons", "Herons", 9).with_record(3, 3),
            Team::new("badgers", "Badgers", 6).with_record(2, 4),
            Team::new("moles", "Moles", 3).with_record(1, 5),
        ]
    }

    #[test]
    fn test_bucket_display() {
        let teams = league();
        let layout = bucket_display(&teams);

        assert_eq!(layout.config.buckets, 2);
        assert_eq!(layout.config.teams_per_bucket, 3);
        assert_eq!(layout.buckets.len(), 2);
        assert_eq!(layout.buckets.total_teams(), 6);
    }

    #[test]
    fn test_assignments_cover_every_team() {
        let teams = league();
        let assignments = team_bucket_assignments(&teams);

        assert_eq!(assignments.len(), teams.len());
        assert_eq!(assignments["falcons"].label(), "A");
        assert_eq!(assignments["otters"].label(), "B");
        assert_eq!(assignments["wolves"].label(), "B");
        assert_eq!(assignments["herons"].label(), "A");
        assert_eq!(assignments["badgers"].label(), "A");
        assert_eq!(assignments["moles"].label(), "B");
    }

    #[test]
    fn test_available_buckets() {
        let render = |n| -> Vec<String> {
            available_buckets(n).into_iter().map(BucketId::label).collect()
        };
        assert_eq!(render(0), ["A"]);
        assert_eq!(render(13), ["A"]);
        assert_eq!(render(12), ["A", "B", "C"]);
        assert_eq!(render(16), ["A", "B", "C", "D"]);
    }

    #[test]
    fn test_layout_serializes_for_renderer() {
        let teams = league();
        let json = serde_json::to_value(bucket_display(&teams)).unwrap();
        assert_eq!(json["config"]["total_teams"], 6);
        assert_eq!(json["buckets"][1]["label"], "B");
        assert_eq!(json["buckets"][0]["teams"][0]["name"], "Falcons");
    }
}
