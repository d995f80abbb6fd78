use std::fmt;

use serde::{Serialize, Serializer};

use crate::constants::{FIRST_LABEL, LABEL_ALPHABET};

/// Position of a bucket within one layout.
///
/// Bucket ids are only meaningful for the computation that produced them;
/// they are recomputed whenever the team count changes. Letters are a
/// rendering concern, see [`BucketId::label`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BucketId(pub usize);

impl BucketId {
    pub fn index(self) -> usize {
        self.0
    }

    /// Spreadsheet-style label: `A`..`Z`, then `AA`, `AB`, ...
    pub fn label(self) -> String {
        let mut letters = Vec::new();
        let mut n = self.0 + 1;
        while n > 0 {
            let rem = (n - 1) % LABEL_ALPHABET;
            letters.push(FIRST_LABEL + rem as u8);
            n = (n - 1) / LABEL_ALPHABET;
        }
        letters.reverse();
        letters.into_iter().map(char::from).collect()
    }
}

impl fmt::Display for BucketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl Serialize for BucketId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

/// Labels for the first `count` buckets, in rendering order.
pub fn labels(count: usize) -> Vec<BucketId> {
    (0..count).map(BucketId).collect()
}
