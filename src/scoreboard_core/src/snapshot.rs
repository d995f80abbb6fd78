use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::display::{bucket_display, BucketLayout};
use crate::team::Team;

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("team at position {position} has an empty id")]
    EmptyId { position: usize },
    #[error("duplicate team id {id:?}")]
    DuplicateId { id: String },
}

/// A validated, point-in-time list of teams as read from the data store.
///
/// Ids are non-empty and unique. Row order is preserved since it decides
/// ties when seeding buckets.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    teams: Vec<Team>,
}

impl Snapshot {
    pub fn new(teams: Vec<Team>) -> Result<Self, SnapshotError> {
        let mut seen = HashSet::with_capacity(teams.len());
        for (position, team) in teams.iter().enumerate() {
            if team.id.trim().is_empty() {
                return Err(SnapshotError::EmptyId { position });
            }
            if !seen.insert(team.id.as_str()) {
                return Err(SnapshotError::DuplicateId { id: team.id.clone() });
            }
        }
        Ok(Snapshot { teams })
    }

    /// Parse a JSON array of team rows.
    pub fn from_json_str(json: &str) -> Result<Self, SnapshotError> {
        let teams: Vec<Team> = serde_json::from_str(json)?;
        Self::new(teams)
    }

    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot = Self::from_json_str(&contents)?;
        tracing::debug!(path = %path.display(), teams = snapshot.len(), "loaded team snapshot");
        Ok(snapshot)
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn into_teams(self) -> Vec<Team> {
        self.teams
    }

    pub fn layout(&self) -> BucketLayout<'_, Team> {
        bucket_display(&self.teams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_duplicate_ids() {
        let teams = vec![
            Team::new("a", "A", 1),
            Team::new("b", "B", 2),
            Team::new("a", "A2", 3),
        ];
        match Snapshot::new(teams) {
            Err(SnapshotError::DuplicateId { id }) => assert_eq!(id, "a"),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_blank_ids() {
        let teams = vec![Team::new("a", "A", 1), Team::new("  ", "Blank", 2)];
        assert!(matches!(Snapshot::new(teams), Err(SnapshotError::EmptyId { position: 1 })));
    }

    #[test]
    fn test_from_json_keeps_row_order() {
        let json = r#"[
            { "id": "b", "name": "Bees", "points": 4 },
            { "id": "a", "name": "Ants", "points": 4 }
        ]"#;
        let snapshot = Snapshot::from_json_str(json).unwrap();
        let ids: Vec<&str> = snapshot.teams().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn test_invalid_json() {
        let err = Snapshot::from_json_str(r#"{ "id": "a" }"#).unwrap_err();
        assert!(matches!(err, SnapshotError::Json(_)));
        assert!(err.to_string().starts_with("invalid snapshot JSON"));
    }

    #[test]
    fn test_missing_file() {
        let err = Snapshot::read_from_file("/nonexistent/teams.json").unwrap_err();
        assert!(matches!(err, SnapshotError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/teams.json"));
    }
}
