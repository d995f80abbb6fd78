#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::constants::{NOTE_NO_FACTOR_PAIRS, NOTE_NO_TEAMS, NOTE_PRIME_COUNT, NOTE_SINGLE_TEAM};

/// Why a layout fell back to a single bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigurationNote {
    NoTeams,
    SingleTeam,
    PrimeCount,
    NoFactorPairs,
}

impl ConfigurationNote {
    pub fn message(self) -> &'static str {
        match self {
            ConfigurationNote::NoTeams => NOTE_NO_TEAMS,
            ConfigurationNote::SingleTeam => NOTE_SINGLE_TEAM,
            ConfigurationNote::PrimeCount => NOTE_PRIME_COUNT,
            ConfigurationNote::NoFactorPairs => NOTE_NO_FACTOR_PAIRS,
        }
    }
}

impl fmt::Display for ConfigurationNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for ConfigurationNote {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// How many buckets a leaderboard is split into and how large each one is.
///
/// When `balanced` is set and there is more than one bucket,
/// `buckets * teams_per_bucket == total_teams` exactly.
#[cfg_attr(feature = "python", pyclass)]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BucketConfiguration {
    #[cfg_attr(feature = "python", pyo3(get))]
    pub total_teams: usize,

    #[cfg_attr(feature = "python", pyo3(get))]
    pub buckets: usize,

    #[cfg_attr(feature = "python", pyo3(get))]
    pub teams_per_bucket: usize,

    #[cfg_attr(feature = "python", pyo3(get))]
    pub balanced: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<ConfigurationNote>,
}

impl BucketConfiguration {
    fn single(total_teams: usize, note: ConfigurationNote) -> Self {
        BucketConfiguration {
            total_teams,
            buckets: 1,
            teams_per_bucket: total_teams,
            balanced: true,
            note: Some(note),
        }
    }
}

/// Primality by trial division over 6k ± 1.
pub fn is_prime(n: usize) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i = 5;
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// All `(buckets, teams_per_bucket)` pairs whose product is `n`, sorted by
/// bucket count. Both orientations of each pair are included.
pub fn factor_pairs(n: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    let mut i = 1;
    while i <= n / i {
        if n % i == 0 {
            pairs.push((i, n / i));
            if i != n / i {
                pairs.push((n / i, i));
            }
        }
        i += 1;
    }
    pairs.sort_by_key(|&(buckets, _)| buckets);
    pairs
}

/// Pick the bucket layout for `total_teams`.
///
/// Composite counts are split into equal buckets, choosing the bucket count
/// nearest to the square root so the grid stays roughly square. Equidistant
/// candidates resolve to the smaller bucket count. Counts of 0, 1 and primes
/// get a single bucket with a note explaining why.
pub fn select_configuration(total_teams: usize) -> BucketConfiguration {
    if total_teams <= 1 {
        let note = if total_teams == 0 {
            ConfigurationNote::NoTeams
        } else {
            ConfigurationNote::SingleTeam
        };
        return BucketConfiguration::single(total_teams, note);
    }

    if is_prime(total_teams) {
        tracing::debug!(total_teams, "prime team count, using a single bucket");
        return BucketConfiguration::single(total_teams, ConfigurationNote::PrimeCount);
    }

    let target = (total_teams as f64).sqrt();
    let mut best: Option<((usize, usize), f64)> = None;
    for (buckets, size) in factor_pairs(total_teams) {
        if buckets <= 1 || buckets >= total_teams {
            continue;
        }
        let distance = (buckets as f64 - target).abs();
        // Strict comparison keeps the first (smallest) bucket count on ties.
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some(((buckets, size), distance));
        }
    }

    let Some(((buckets, teams_per_bucket), _)) = best else {
        return BucketConfiguration::single(total_teams, ConfigurationNote::NoFactorPairs);
    };

    tracing::debug!(total_teams, buckets, teams_per_bucket, "selected bucket layout");
    BucketConfiguration {
        total_teams,
        buckets,
        teams_per_bucket,
        balanced: true,
        note: None,
    }
}

/// Number of buckets a leaderboard of `team_count` teams is shown in.
pub fn required_bucket_count(team_count: usize) -> usize {
    select_configuration(team_count).buckets
}
