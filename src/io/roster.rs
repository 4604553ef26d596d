//! Read/write roster JSON files.
//!
//! Roster JSON is the portable representation of a set of students:
//! - a small header (`tool`, `saved_on`)
//! - every record with its scores in insertion order
//!
//! The schema is defined by `domain::RosterFile`. JSON has no NaN or
//! infinity: serde_json writes them as `null` and refuses numbers that
//! overflow `f64`. Both are reported as invalid scores rather than bad JSON.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::{Local, NaiveDate};
use serde::Deserialize;

use crate::domain::{Roster, RosterFile, StudentRecord};
use crate::error::AppError;

const TOOL_NAME: &str = "grades";

/// On-disk shape used while loading; scores may be `null`.
#[derive(Debug, Deserialize)]
struct StoredRoster {
    tool: String,
    saved_on: NaiveDate,
    students: Vec<StoredStudent>,
}

#[derive(Debug, Deserialize)]
struct StoredStudent {
    name: String,
    age: i32,
    #[serde(default)]
    scores: Vec<Option<f64>>,
}

impl StoredStudent {
    fn into_record(self) -> Result<StudentRecord, AppError> {
        let mut record = StudentRecord::new(self.name, self.age);
        for (i, score) in self.scores.into_iter().enumerate() {
            match score {
                Some(v) if v.is_finite() => record.append_score(v),
                _ => {
                    return Err(AppError::invalid_input(format!(
                        "Student '{}' has a non-finite score at position {}.",
                        record.name(),
                        i + 1
                    )));
                }
            }
        }
        Ok(record)
    }
}

/// Write a roster JSON file stamped with today's date.
pub fn write_roster_json(path: &Path, roster: &Roster) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::io(format!("Failed to create roster JSON '{}': {e}", path.display())))?;

    let doc = RosterFile {
        tool: TOOL_NAME.to_string(),
        saved_on: Local::now().date_naive(),
        students: roster.clone(),
    };

    serde_json::to_writer_pretty(file, &doc)
        .map_err(|e| AppError::io(format!("Failed to write roster JSON: {e}")))?;

    tracing::info!(path = %path.display(), students = roster.len(), "wrote roster JSON");
    Ok(())
}

/// Read a roster JSON file; any non-finite score fails with exit code 3.
pub fn read_roster_json(path: &Path) -> Result<RosterFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::io(format!("Failed to open roster JSON '{}': {e}", path.display())))?;
    let stored: StoredRoster = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        // serde_json has no dedicated category for f64 overflow.
        if e.to_string().starts_with("number out of range") {
            AppError::invalid_input(format!("Roster JSON has a non-finite score: {e}"))
        } else {
            AppError::io(format!("Invalid roster JSON: {e}"))
        }
    })?;

    let students = stored
        .students
        .into_iter()
        .map(StoredStudent::into_record)
        .collect::<Result<Roster, AppError>>()?;

    tracing::info!(path = %path.display(), students = students.len(), "loaded roster JSON");
    Ok(RosterFile {
        tool: stored.tool,
        saved_on: stored.saved_on,
        students,
    })
}
