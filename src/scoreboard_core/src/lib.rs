//! Scoreboard Core - balanced bucket layouts for tournament leaderboards.
//!
//! Splits a list of teams into evenly sized display groups ("buckets"). The
//! bucket count comes from factorizing the team count, and teams are seeded
//! into buckets by points in snake-draft order. Everything here is a pure
//! function of the snapshot passed in. Optional Python bindings are built
//! with the `python` feature.

pub mod constants;
pub mod display;
pub mod distribute;
pub mod label;
pub mod selector;
pub mod snapshot;
pub mod strength;
pub mod team;

#[cfg(feature = "python")]
mod python;

pub use display::{available_buckets, bucket_display, team_bucket_assignments, BucketLayout};
pub use distribute::{distribute, Bucket, BucketMap, SnakeOrder};
pub use label::BucketId;
pub use selector::{
    factor_pairs, is_prime, required_bucket_count, select_configuration, BucketConfiguration,
    ConfigurationNote,
};
pub use snapshot::{Snapshot, SnapshotError};
pub use strength::{BalanceSummary, BucketStrength};
pub use team::{Standing, Team};
