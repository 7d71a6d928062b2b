//! Batch username assignment for CSV rosters.
//!
//! Each row is assigned in file order and its username is added to the taken
//! set before the next row, so one batch never hands out the same name twice.

use std::collections::HashSet;
use std::hash::BuildHasher;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Result, RosternameError};
use crate::username::UsernameGenerator;

/// One input row: `first_name,last_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterRow {
    pub first_name: String,
    pub last_name: String,
}

/// Outcome for a single roster row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub first_name: String,
    pub last_name: String,
    pub username: Option<String>,
    pub error: Option<String>,
}

impl Assignment {
    pub fn is_assigned(&self) -> bool {
        self.username.is_some()
    }
}

/// Read roster rows from a CSV file with a `first_name,last_name` header.
pub fn read_roster(path: &Path) -> Result<Vec<RosterRow>> {
    let mut rdr =
        csv::Reader::from_path(path).map_err(|e| RosternameError::Io(std::io::Error::other(e)))?;

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let row: RosterRow = result.map_err(|e| {
            RosternameError::Serialization(format!("CSV parse error in {}: {e}", path.display()))
        })?;
        rows.push(row);
    }

    Ok(rows)
}

/// Write assignments as CSV with a `first_name,last_name,username,error` header.
pub fn write_assignments(path: &Path, assignments: &[Assignment]) -> Result<()> {
    let mut wtr =
        csv::Writer::from_path(path).map_err(|e| RosternameError::Io(std::io::Error::other(e)))?;
    for assignment in assignments {
        wtr.serialize(assignment).map_err(|e| {
            RosternameError::Serialization(format!("CSV write error in {}: {e}", path.display()))
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Assign a username to every row, recording per-row failures instead of aborting.
pub fn assign_usernames<S: BuildHasher>(
    generator: &UsernameGenerator,
    rows: &[RosterRow],
    min_length: usize,
    max_length: usize,
    existing: &mut HashSet<String, S>,
) -> Vec<Assignment> {
    let mut assignments = Vec::with_capacity(rows.len());
    let mut failed = 0usize;

    for (index, row) in rows.iter().enumerate() {
        let outcome = generator.generate_unique_username(
            &row.first_name,
            &row.last_name,
            min_length,
            max_length,
            &*existing,
        );

        let (username, error) = match outcome {
            Ok(username) => {
                existing.insert(username.clone());
                (Some(username), None)
            }
            Err(e) => {
                warn!(row = index + 1, error = %e, "failed to assign username");
                failed += 1;
                (None, Some(e.to_string()))
            }
        };

        assignments.push(Assignment {
            first_name: row.first_name.clone(),
            last_name: row.last_name.clone(),
            username,
            error,
        });
    }

    info!(
        total = rows.len(),
        assigned = rows.len() - failed,
        failed,
        "roster assignment complete"
    );

    assignments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(first: &str, last: &str) -> RosterRow {
        RosterRow {
            first_name: first.into(),
            last_name: last.into(),
        }
    }

    #[test]
    fn duplicate_names_get_distinct_usernames() {
        let generator = UsernameGenerator::default();
        let rows = vec![row("John", "Schmidt"), row("John", "Schmidt"), row("John", "Schmidt")];
        let mut existing = HashSet::new();

        let assignments = assign_usernames(&generator, &rows, 6, 12, &mut existing);
        let names: Vec<&str> = assignments
            .iter()
            .map(|a| a.username.as_deref().unwrap())
            .collect();
        assert_eq!(names, vec!["JohSmi", "JoSm01", "JoSm02"]);
        assert_eq!(existing.len(), 3);
    }

    #[test]
    fn respects_pre_existing_usernames() {
        let generator = UsernameGenerator::default();
        let mut existing: HashSet<String> = ["JueMue".to_string()].into_iter().collect();
        let assignments =
            assign_usernames(&generator, &[row("Jürgen", "Müller")], 6, 12, &mut existing);
        assert_eq!(assignments[0].username.as_deref(), Some("JuMu01"));
    }

    #[test]
    fn failed_rows_are_recorded_and_skipped() {
        let generator = UsernameGenerator::default();
        let rows = vec![row("", "Schmidt"), row("Anna", "Berg")];
        let mut existing = HashSet::new();

        let assignments = assign_usernames(&generator, &rows, 6, 12, &mut existing);
        assert!(!assignments[0].is_assigned());
        assert_eq!(
            assignments[0].error.as_deref(),
            Some("invalid argument: first name empty")
        );
        assert_eq!(assignments[1].username.as_deref(), Some("AnnBer"));
        assert_eq!(existing.len(), 1);
    }

    #[test]
    fn read_roster_from_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.csv");
        std::fs::write(&path, "first_name,last_name\nJohn,Schmidt\nJürgen,Müller\n").unwrap();

        let rows = read_roster(&path).expect("should read roster");
        assert_eq!(rows, vec![row("John", "Schmidt"), row("Jürgen", "Müller")]);
    }

    #[test]
    fn read_roster_missing_column_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.csv");
        std::fs::write(&path, "first_name\nJohn\n").unwrap();

        let result = read_roster(&path);
        assert!(matches!(result, Err(RosternameError::Serialization(_))));
    }

    #[test]
    fn read_roster_nonexistent_file_is_io_error() {
        let result = read_roster(Path::new("/nonexistent/roster.csv"));
        assert!(matches!(result, Err(RosternameError::Io(_))));
    }

    #[test]
    fn write_then_read_assignments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let assignments = vec![
            Assignment {
                first_name: "John".into(),
                last_name: "Schmidt".into(),
                username: Some("JohSmi".into()),
                error: None,
            },
            Assignment {
                first_name: "".into(),
                last_name: "Berg".into(),
                username: None,
                error: Some("invalid argument: first name empty".into()),
            },
        ];

        write_assignments(&path, &assignments).expect("should write");
        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("first_name,last_name,username,error"));
        assert_eq!(lines.next(), Some("John,Schmidt,JohSmi,"));
        assert_eq!(
            lines.next(),
            Some(",Berg,,invalid argument: first name empty")
        );
    }
}
