//! Shared domain types.
//!
//! Records are plain owned values. They are serializable so a roster can be:
//!
//! - built in-memory by the demo or from CLI flags
//! - saved to JSON and reloaded later for reporting
//! - summarized to CSV

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::math::mean;

/// One student: a fixed name and age plus an appendable list of scores.
///
/// Fields are private so that `name` and `age` cannot change after creation
/// and `scores` only ever grows through [`StudentRecord::append_score`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    name: String,
    age: i32,
    #[serde(default)]
    scores: Vec<f64>,
}

impl StudentRecord {
    /// Create a record with no scores.
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        let name = name.into();
        tracing::debug!(%name, age, "created student record");
        Self {
            name,
            age,
            scores: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    /// Scores in insertion order.
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    pub fn score_count(&self) -> usize {
        self.scores.len()
    }

    /// Append one score to the end of the sequence.
    pub fn append_score(&mut self, score: f64) {
        self.scores.push(score);
        tracing::debug!(name = %self.name, score, count = self.scores.len(), "appended score");
    }

    /// Arithmetic mean of the recorded scores, `0.0` when there are none.
    pub fn average(&self) -> f64 {
        mean(&self.scores)
    }
}

/// Ordered collection of student records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    students: Vec<StudentRecord>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: StudentRecord) {
        self.students.push(record);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StudentRecord> {
        self.students.iter()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// First record with the given name.
    pub fn find(&self, name: &str) -> Option<&StudentRecord> {
        self.students.iter().find(|s| s.name() == name)
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a StudentRecord;
    type IntoIter = std::slice::Iter<'a, StudentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<StudentRecord> for Roster {
    fn from_iter<I: IntoIterator<Item = StudentRecord>>(iter: I) -> Self {
        Self {
            students: iter.into_iter().collect(),
        }
    }
}

/// Portable JSON representation of a roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterFile {
    pub tool: String,
    pub saved_on: NaiveDate,
    pub students: Roster,
}

/// Log verbosity accepted by `GRADES_LOG`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse a level name, ignoring ASCII case and surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    pub fn to_tracing(self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Runtime configuration gathered from the environment (and `.env`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerConfig {
    pub log_level: LogLevel,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
        }
    }
}

impl TrackerConfig {
    pub const LOG_ENV: &'static str = "GRADES_LOG";

    /// Load `.env` if present, then resolve against the process environment.
    ///
    /// Returns the config plus a warning to log when `GRADES_LOG` was set but unusable.
    pub fn from_env(verbose: bool) -> (Self, Option<String>) {
        dotenvy::dotenv().ok();
        Self::resolve(std::env::var(Self::LOG_ENV).ok().as_deref(), verbose)
    }

    /// `--verbose` wins over `GRADES_LOG`; an unknown level falls back to the default.
    pub fn resolve(raw: Option<&str>, verbose: bool) -> (Self, Option<String>) {
        if verbose {
            return (
                Self {
                    log_level: LogLevel::Debug,
                },
                None,
            );
        }
        match Self::from_log_var(raw) {
            Ok(config) => (config, None),
            Err(warning) => (Self::default(), Some(warning)),
        }
    }

    /// Build a config from the raw value of `GRADES_LOG` (if set).
    pub fn from_log_var(raw: Option<&str>) -> Result<Self, String> {
        let Some(raw) = raw else {
            return Ok(Self::default());
        };
        let log_level = LogLevel::parse(raw).ok_or_else(|| {
            format!(
                "Ignoring {}='{raw}' (expected error, warn, info, debug or trace).",
                Self::LOG_ENV
            )
        })?;
        Ok(Self { log_level })
    }
}
