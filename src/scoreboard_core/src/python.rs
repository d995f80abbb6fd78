use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;
use std::collections::HashMap;

use crate::display::{available_buckets, bucket_display, team_bucket_assignments};
use crate::distribute::{distribute, BucketMap};
use crate::selector::{select_configuration, BucketConfiguration, ConfigurationNote};
use crate::snapshot::{Snapshot, SnapshotError};
use crate::team::Team;

impl From<SnapshotError> for PyErr {
    fn from(err: SnapshotError) -> PyErr {
        match err {
            SnapshotError::Io { .. } => PyIOError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

#[pymethods]
impl Team {
    #[new]
    #[pyo3(signature = (id, name, points, wins = 0, losses = 0))]
    fn py_new(id: String, name: String, points: u32, wins: u32, losses: u32) -> Self {
        Team::new(id, name, points).with_record(wins, losses)
    }

    fn __repr__(&self) -> String {
        format!(
            "Team({:?}, {:?}, points={}, wins={}, losses={})",
            self.id, self.name, self.points, self.wins, self.losses
        )
    }
}

#[pymethods]
impl BucketConfiguration {
    /// Why the layout fell back to a single bucket, if it did
    #[getter]
    fn note(&self) -> Option<&'static str> {
        self.note.map(ConfigurationNote::message)
    }

    fn __repr__(&self) -> String {
        format!(
            "BucketConfiguration({} teams, {} x {})",
            self.total_teams, self.buckets, self.teams_per_bucket
        )
    }
}

/// Owned `(label, teams)` pairs in label order, since Python can't hold
/// borrowed buckets.
fn to_owned_buckets(map: &BucketMap<'_, Team>) -> Vec<(String, Vec<Team>)> {
    map.iter()
        .map(|bucket| (bucket.label(), bucket.teams.iter().map(|&t| t.clone()).collect()))
        .collect()
}

#[pyfunction]
#[pyo3(name = "select_configuration")]
fn py_select_configuration(total_teams: usize) -> BucketConfiguration {
    select_configuration(total_teams)
}

#[pyfunction]
#[pyo3(name = "distribute")]
fn py_distribute(teams: Vec<Team>, config: &BucketConfiguration) -> Vec<(String, Vec<Team>)> {
    to_owned_buckets(&distribute(&teams, config))
}

#[pyfunction]
#[pyo3(name = "team_bucket_assignments")]
fn py_team_bucket_assignments(teams: Vec<Team>) -> HashMap<String, String> {
    team_bucket_assignments(&teams)
        .into_iter()
        .map(|(id, bucket)| (id, bucket.label()))
        .collect()
}

#[pyfunction]
#[pyo3(name = "available_buckets")]
fn py_available_buckets(team_count: usize) -> Vec<String> {
    available_buckets(team_count).into_iter().map(|id| id.label()).collect()
}

#[pyfunction]
#[pyo3(name = "bucket_display")]
fn py_bucket_display(teams: Vec<Team>) -> (BucketConfiguration, Vec<(String, Vec<Team>)>) {
    let layout = bucket_display(&teams);
    let buckets = to_owned_buckets(&layout.buckets);
    (layout.config, buckets)
}

/// Read and validate a JSON team snapshot.
#[pyfunction]
fn load_snapshot(path: &str) -> PyResult<Vec<Team>> {
    Ok(Snapshot::read_from_file(path)?.into_teams())
}

#[pymodule]
fn scoreboard_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Classes
    m.add_class::<Team>()?;
    m.add_class::<BucketConfiguration>()?;

    // Layout functions
    m.add_function(wrap_pyfunction!(py_select_configuration, m)?)?;
    m.add_function(wrap_pyfunction!(py_distribute, m)?)?;
    m.add_function(wrap_pyfunction!(py_team_bucket_assignments, m)?)?;
    m.add_function(wrap_pyfunction!(py_available_buckets, m)?)?;
    m.add_function(wrap_pyfunction!(py_bucket_display, m)?)?;
    m.add_function(wrap_pyfunction!(load_snapshot, m)?)?;

    Ok(())
}
