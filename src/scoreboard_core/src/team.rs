#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Anything that can be seeded into a bucket: a stable id and a score.
///
/// The bucketing functions only ever read these two values, so callers can
/// pass their own row types instead of converting to [`Team`].
pub trait Standing {
    fn team_id(&self) -> &str;
    fn points(&self) -> u32;
}

impl<S: Standing + ?Sized> Standing for &S {
    fn team_id(&self) -> &str {
        (**self).team_id()
    }

    fn points(&self) -> u32 {
        (**self).points()
    }
}

/// Read-only view of a registered team as stored by the scoreboard.
///
/// Identity is by `id`; two snapshots with the same id are the same team.
#[cfg_attr(feature = "python", pyclass)]
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Team {
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub id: String,

    #[cfg_attr(feature = "python", pyo3(get, set))]
    #[serde(default)]
    pub name: String,

    #[cfg_attr(feature = "python", pyo3(get, set))]
    #[serde(default)]
    pub wins: u32,

    #[cfg_attr(feature = "python", pyo3(get, set))]
    #[serde(default)]
    pub losses: u32,

    /// League points, the only value used for seeding
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub points: u32,
}

impl Team {
    pub fn new(id: impl Into<String>, name: impl Into<String>, points: u32) -> Self {
        Team {
            id: id.into(),
            name: name.into(),
            wins: 0,
            losses: 0,
            points,
        }
    }

    /// Same team with a win/loss record attached
    pub fn with_record(mut self, wins: u32, losses: u32) -> Self {
        self.wins = wins;
        self.losses = losses;
        self
    }
}

impl PartialEq for Team {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Team {}

impl Hash for Team {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Standing for Team {
    fn team_id(&self) -> &str {
        &self.id
    }

    fn points(&self) -> u32 {
        self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_store_row() {
        let row = r#"{
            "id": "7c1e",
            "name": "Night Owls",
            "logo_url": null,
            "wins": 3,
            "losses": 1,
            "points": 9,
            "group_name": "A",
            "created_at": "2024-05-01T10:00:00Z"
        }"#;

        let team: Team = serde_json::from_str(row).unwrap();
        assert_eq!(team.id, "7c1e");
        assert_eq!(team.name, "Night Owls");
        assert_eq!((team.wins, team.losses, team.points), (3, 1, 9));
    }

    #[test]
    fn test_identity_is_by_id() {
        let before = Team::new("x", "X", 1);
        let after = Team::new("x", "X Renamed", 5).with_record(2, 0);
        assert_eq!(before, after);
        assert_ne!(before, Team::new("y", "X", 1));

        let mut seen = std::collections::HashSet::new();
        assert!(seen.insert(before));
        assert!(!seen.insert(after));
    }

    #[test]
    fn test_negative_points_rejected() {
        let row = r#"{ "id": "x", "points": -2 }"#;
        assert!(serde_json::from_str::<Team>(row).is_err());
    }

    #[test]
    fn test_standing_through_reference() {
        let team = Team::new("t1", "One", 4);
        let by_ref: &Team = &team;
        assert_eq!(Standing::team_id(&by_ref), "t1");
        assert_eq!(Standing::points(&by_ref), 4);
    }
}
