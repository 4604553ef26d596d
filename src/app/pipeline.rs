//! Shared roster-building logic used by the CLI subcommands.
//!
//! Keeping this in one place means the demo scenario and ad-hoc students go
//! through the same steps: create records -> append scores -> report.
//! The CLI layer only decides where the text goes.

use crate::domain::{Roster, StudentRecord};
use crate::error::AppError;
use crate::report::{BANNER, format_roster};

/// One student of the demo scenario.
#[derive(Debug, Clone, Copy)]
pub struct DemoStudent {
    pub name: &'static str,
    pub age: i32,
    pub scores: &'static [f64],
}

pub const DEMO_STUDENTS: [DemoStudent; 2] = [
    DemoStudent {
        name: "Alice",
        age: 20,
        scores: &[95.5, 87.0, 92.3],
    },
    DemoStudent {
        name: "Bob",
        age: 21,
        scores: &[78.5, 82.0],
    },
];

/// All outputs of a demo run.
#[derive(Debug, Clone)]
pub struct DemoOutput {
    pub roster: Roster,
    pub transcript: String,
}

/// Run the demo scenario and return the roster plus the full stdout transcript.
pub fn run_demo() -> DemoOutput {
    let mut lines: Vec<String> = vec![BANNER.to_string()];

    let mut records: Vec<StudentRecord> = DEMO_STUDENTS
        .iter()
        .map(|s| StudentRecord::new(s.name, s.age))
        .collect();
    lines.push("Created students successfully".to_string());

    for (record, student) in records.iter_mut().zip(DEMO_STUDENTS.iter()) {
        lines.push(format!("Adding scores for {}...", record.name()));
        for &score in student.scores {
            record.append_score(score);
        }
    }

    let roster: Roster = records.into_iter().collect();
    lines.push(format_roster(&roster));

    DemoOutput {
        roster,
        transcript: lines.join("\n"),
    }
}

/// Build one record from raw inputs, rejecting non-finite scores.
pub fn build_student(name: &str, age: i32, scores: &[f64]) -> Result<StudentRecord, AppError> {
    if let Some(bad) = scores.iter().find(|s| !s.is_finite()) {
        return Err(AppError::invalid_input(format!(
            "Score for '{name}' must be a finite number (got {bad})."
        )));
    }

    let mut record = StudentRecord::new(name, age);
    for &score in scores {
        record.append_score(score);
    }
    Ok(record)
}
