//! Roster records and their sources.
//!
//! The roster view never owns its data: it asks a [`RosterSource`] for the
//! record list, so the built-in seed rows and a TOML file are interchangeable.

mod filter;

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use filter::{PageSize, RosterPage, filter, matches, take};

/// One personnel assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: u32,
    pub location: String,
    pub team_head: String,
    pub shift_in_charge: String,
    pub security_staff: String,
    pub schedule_date: String,
    pub schedule_time: String,
}

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Failed to read roster from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse roster from {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Duplicate roster id {id}")]
    DuplicateId { id: u32 },
}

/// Anything that can list roster records.
pub trait RosterSource: Send + Sync {
    /// Returns every record, ids unique.
    ///
    /// # Errors
    /// Returns an error if the records cannot be loaded or ids collide.
    fn list(&self) -> Result<Vec<RosterEntry>, RosterError>;

    /// Short label for logs and the UI.
    fn describe(&self) -> String;
}

/// Built-in seed roster.
#[derive(Debug, Clone, Default)]
pub struct StaticRoster {
    entries: Vec<RosterEntry>,
}

impl StaticRoster {
    pub fn new(entries: Vec<RosterEntry>) -> Self {
        Self { entries }
    }

    /// The three seed rows the dashboard ships with.
    pub fn seed() -> Self {
        let entry = |id: u32, location: &str| RosterEntry {
            id,
            location: location.to_string(),
            team_head: "Arjun Patil".to_string(),
            shift_in_charge: "Amit Singh".to_string(),
            security_staff: "Suraj Das".to_string(),
            schedule_date: "12-04-2023".to_string(),
            schedule_time: "18:30 pm".to_string(),
        };
        Self::new(vec![
            entry(1, "Angul"),
            entry(2, "Raigarh"),
            entry(3, "Patratu"),
        ])
    }
}

impl RosterSource for StaticRoster {
    fn list(&self) -> Result<Vec<RosterEntry>, RosterError> {
        ensure_unique_ids(&self.entries)?;
        Ok(self.entries.clone())
    }

    fn describe(&self) -> String {
        "built-in roster".to_string()
    }
}

#[derive(Deserialize)]
struct RosterFile {
    #[serde(default, rename = "entry")]
    entries: Vec<RosterEntry>,
}

/// Roster read from a TOML file of `[[entry]]` tables on every `list()`.
#[derive(Debug, Clone)]
pub struct FileRoster {
    path: PathBuf,
}

impl FileRoster {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RosterSource for FileRoster {
    fn list(&self) -> Result<Vec<RosterEntry>, RosterError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| RosterError::Read {
            path: self.path.clone(),
            source,
        })?;
        let file: RosterFile = toml::from_str(&contents).map_err(|source| RosterError::Parse {
            path: self.path.clone(),
            source,
        })?;
        ensure_unique_ids(&file.entries)?;
        Ok(file.entries)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Picks the file source when a path is configured, else the seed roster.
pub fn source_for(file: Option<PathBuf>) -> Box<dyn RosterSource> {
    match file {
        Some(path) => Box::new(FileRoster::new(path)),
        None => Box::new(StaticRoster::seed()),
    }
}

/// # Errors
/// Returns [`RosterError::DuplicateId`] for the first repeated id.
pub fn ensure_unique_ids(entries: &[RosterEntry]) -> Result<(), RosterError> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.id) {
            return Err(RosterError::DuplicateId { id: entry.id });
        }
    }
    Ok(())
}

/// Distinct locations, sorted, for the location picker.
pub fn locations(entries: &[RosterEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|e| e.location.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_seed_has_three_unique_rows() {
        let rows = StaticRoster::seed().list().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_static_roster_rejects_duplicate_ids() {
        let mut rows = StaticRoster::seed().list().unwrap();
        rows[2].id = 1;
        let err = StaticRoster::new(rows).list().unwrap_err();
        assert!(matches!(err, RosterError::DuplicateId { id: 1 }));
    }

    #[test]
    fn test_file_roster_reads_entries() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roster.toml");
        fs::write(
            &path,
            r#"
[[entry]]
id = 7
location = "Tamnar"
team_head = "Priya Nair"
shift_in_charge = "Rahul Verma"
security_staff = "Kiran Rao"
schedule_date = "01-05-2023"
schedule_time = "22:00 pm"
"#,
        )
        .unwrap();

        let rows = FileRoster::new(&path).list().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 7);
        assert_eq!(rows[0].location, "Tamnar");
    }

    #[test]
    fn test_file_roster_empty_file_is_empty_roster() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roster.toml");
        fs::write(&path, "").unwrap();

        assert!(FileRoster::new(&path).list().unwrap().is_empty());
    }

    #[test]
    fn test_file_roster_missing_file_errors() {
        let dir = tempdir().unwrap();
        let err = FileRoster::new(dir.path().join("missing.toml"))
            .list()
            .unwrap_err();
        assert!(matches!(err, RosterError::Read { .. }));
    }

    #[test]
    fn test_file_roster_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roster.toml");
        fs::write(&path, "[[entry]]\nid = \"one\"\n").unwrap();

        let err = FileRoster::new(&path).list().unwrap_err();
        assert!(matches!(err, RosterError::Parse { .. }));
    }

    #[test]
    fn test_locations_are_distinct_and_sorted() {
        let mut rows = StaticRoster::seed().list().unwrap();
        rows.push(RosterEntry {
            id: 4,
            ..rows[0].clone()
        });
        assert_eq!(locations(&rows), vec!["Angul", "Patratu", "Raigarh"]);
    }

    #[test]
    fn test_source_for_prefers_file() {
        let source = source_for(Some(PathBuf::from("/tmp/roster.toml")));
        assert_eq!(source.describe(), "/tmp/roster.toml");
        assert_eq!(source_for(None).describe(), "built-in roster");
    }
}
