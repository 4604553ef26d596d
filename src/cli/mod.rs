//! Command-line parsing for the grade tracker.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the record/report code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "grades", version, about = "Student Grade Tracker")]
pub struct Cli {
    /// Log at debug level (overrides GRADES_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the sample Alice/Bob scenario and print both reports (default).
    Demo(DemoArgs),
    /// Print reports for every student in a saved roster.
    Report(ReportArgs),
    /// Build one student from flags and print the report.
    Student(StudentArgs),
}

/// Options for the demo scenario.
#[derive(Debug, Args, Clone, Default)]
pub struct DemoArgs {
    /// Save the resulting roster as JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,

    /// Export a per-student summary to CSV.
    #[arg(long = "export-csv", value_name = "CSV")]
    pub export_csv: Option<PathBuf>,
}

/// Options for reporting a saved roster.
#[derive(Debug, Args, Clone)]
pub struct ReportArgs {
    /// Roster JSON file produced by `grades demo --export`.
    #[arg(long, value_name = "JSON")]
    pub roster: PathBuf,
}

/// Options for a single ad-hoc student.
#[derive(Debug, Args, Clone)]
pub struct StudentArgs {
    /// Student name.
    #[arg(long)]
    pub name: String,

    /// Student age.
    #[arg(long, allow_negative_numbers = true)]
    pub age: i32,

    /// A score to record; repeat for several, in order.
    #[arg(long = "score", value_name = "SCORE", allow_negative_numbers = true)]
    pub scores: Vec<f64>,
}
