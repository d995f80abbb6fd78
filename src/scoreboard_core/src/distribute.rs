use serde::Serialize;
use std::collections::HashMap;

use crate::label::BucketId;
use crate::selector::BucketConfiguration;
use crate::team::Standing;

/// Bucket indices in snake-draft order: `0, 1, .., k-1, k-1, .., 0, 0, 1, ..`.
///
/// Infinite for `k >= 1`; empty for `k == 0`.
#[derive(Clone, Debug)]
pub struct SnakeOrder {
    buckets: usize,
    index: usize,
    forward: bool,
}

impl SnakeOrder {
    pub fn new(buckets: usize) -> Self {
        SnakeOrder {
            buckets,
            index: 0,
            forward: true,
        }
    }
}

impl Iterator for SnakeOrder {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.buckets == 0 {
            return None;
        }
        let current = self.index;

        if self.forward {
            if self.index + 1 >= self.buckets {
                self.forward = false;
            } else {
                self.index += 1;
            }
        } else if self.index == 0 {
            self.forward = true;
        } else {
            self.index -= 1;
        }

        Some(current)
    }
}

/// One display group and the teams seeded into it, strongest first.
#[derive(Debug, Serialize)]
#[serde(bound = "T: Serialize")]
pub struct Bucket<'a, T> {
    #[serde(rename = "label")]
    pub id: BucketId,
    pub teams: Vec<&'a T>,
}

impl<'a, T> Bucket<'a, T> {
    pub fn label(&self) -> String {
        self.id.label()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

impl<T> Clone for Bucket<'_, T> {
    fn clone(&self) -> Self {
        Bucket {
            id: self.id,
            teams: self.teams.clone(),
        }
    }
}

/// Result of [`distribute`]: every input team in exactly one bucket,
/// buckets in label order.
#[derive(Debug, Serialize)]
#[serde(transparent, bound = "T: Serialize")]
pub struct BucketMap<'a, T> {
    buckets: Vec<Bucket<'a, T>>,
}

impl<'a, T> BucketMap<'a, T> {
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bucket<'a, T>> {
        self.buckets.iter()
    }

    pub fn bucket(&self, id: BucketId) -> Option<&Bucket<'a, T>> {
        self.buckets.get(id.index())
    }

    /// Look up a bucket by its rendered label, e.g. `"B"`.
    pub fn get(&self, label: &str) -> Option<&Bucket<'a, T>> {
        self.buckets.iter().find(|bucket| bucket.label() == label)
    }

    /// Bucket ids in rendering order
    pub fn labels(&self) -> Vec<BucketId> {
        self.buckets.iter().map(|bucket| bucket.id).collect()
    }

    pub fn total_teams(&self) -> usize {
        self.buckets.iter().map(Bucket::len).sum()
    }
}

impl<'a, T: Standing> BucketMap<'a, T> {
    /// Reverse lookup from team id to the bucket holding it.
    pub fn assignments(&self) -> HashMap<&'a str, BucketId> {
        let mut out = HashMap::with_capacity(self.total_teams());
        for bucket in &self.buckets {
            for &team in &bucket.teams {
                out.insert(team.team_id(), bucket.id);
            }
        }
        out
    }
}

impl<T> Clone for BucketMap<'_, T> {
    fn clone(&self) -> Self {
        BucketMap {
            buckets: self.buckets.clone(),
        }
    }
}

impl<'m, 'a, T> IntoIterator for &'m BucketMap<'a, T> {
    type Item = &'m Bucket<'a, T>;
    type IntoIter = std::slice::Iter<'m, Bucket<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}

impl<'a, T> IntoIterator for BucketMap<'a, T> {
    type Item = Bucket<'a, T>;
    type IntoIter = std::vec::IntoIter<Bucket<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.into_iter()
    }
}

/// Seed `teams` into the buckets described by `config`.
///
/// Teams are ranked by points, highest first, with ties kept in input order,
/// then dealt out in snake-draft order so each bucket gets a comparable mix
/// of strong and weak teams. Each bucket's list comes out already ranked.
///
/// A configuration computed for a different team count is not an error; the
/// buckets are just filled unevenly.
pub fn distribute<'a, T: Standing>(
    teams: &'a [T],
    config: &BucketConfiguration,
) -> BucketMap<'a, T> {
    let count = config.buckets.max(1);
    // Sized from the input, not the configuration, which may be stale.
    let per_bucket = teams.len().div_ceil(count);
    let mut buckets: Vec<Bucket<'a, T>> = (0..count)
        .map(|i| Bucket {
            id: BucketId(i),
            teams: Vec::with_capacity(per_bucket),
        })
        .collect();

    if teams.is_empty() {
        return BucketMap { buckets };
    }

    let mut ranked: Vec<&'a T> = teams.iter().collect();
    ranked.sort_by(|a, b| b.points().cmp(&a.points()));

    for (team, slot) in ranked.into_iter().zip(SnakeOrder::new(count)) {
        buckets[slot].teams.push(team);
    }

    tracing::debug!(
        teams = teams.len(),
        buckets = count,
        expected = config.total_teams,
        "distributed teams"
    );
    BucketMap { buckets }
}
