//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads configuration and installs the log subscriber
//! - builds or loads a roster
//! - prints reports
//! - writes optional exports

use clap::Parser;
use tracing_subscriber::FmtSubscriber;

use crate::cli::{Command, DemoArgs, ReportArgs, StudentArgs};
use crate::domain::TrackerConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `grades` binary.
pub fn run() -> Result<(), AppError> {
    // Bare `grades` should behave like `grades demo`, but clap requires a
    // subcommand name, so the argv list is rewritten before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    let (config, warning) = TrackerConfig::from_env(cli.verbose);
    init_logging(&config)?;
    if let Some(warning) = warning {
        tracing::warn!("{warning}");
    }

    match cli.command {
        Command::Demo(args) => handle_demo(args),
        Command::Report(args) => handle_report(args),
        Command::Student(args) => handle_student(args),
    }
}

fn init_logging(config: &TrackerConfig) -> Result<(), AppError> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level.to_tracing())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| AppError::io(format!("Failed to install log subscriber: {e}")))
}

fn handle_demo(args: DemoArgs) -> Result<(), AppError> {
    let out = pipeline::run_demo();
    println!("{}", out.transcript);

    if let Some(path) = &args.export {
        crate::io::roster::write_roster_json(path, &out.roster)?;
    }
    if let Some(path) = &args.export_csv {
        crate::io::export::write_summary_csv(path, &out.roster)?;
    }

    Ok(())
}

fn handle_report(args: ReportArgs) -> Result<(), AppError> {
    let doc = crate::io::roster::read_roster_json(&args.roster)?;
    tracing::debug!(tool = %doc.tool, saved_on = %doc.saved_on, "roster header");
    println!("{}", crate::report::format_roster_listing(&doc.students));
    Ok(())
}

fn handle_student(args: StudentArgs) -> Result<(), AppError> {
    let record = pipeline::build_student(&args.name, args.age, &args.scores)?;
    println!("{}", crate::report::format_report(&record));
    Ok(())
}

const SUBCOMMANDS: [&str; 3] = ["demo", "report", "student"];
const GLOBAL_FLAGS: [&str; 2] = ["-v", "--verbose"];
const TOP_LEVEL_ONLY: [&str; 5] = ["-h", "--help", "-V", "--version", "help"];

/// Insert the `demo` subcommand when the user did not name one.
///
/// Leading global flags are skipped before deciding. The first remaining token:
/// - none, or any other flag            -> `demo` goes right after the program name
/// - a subcommand, help or version      -> unchanged
/// - any other word                     -> unchanged (clap reports it)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let first_non_global = argv
        .iter()
        .skip(1)
        .map(String::as_str)
        .find(|arg| !GLOBAL_FLAGS.contains(arg));

    let needs_demo = match first_non_global {
        None => true,
        Some(arg) if SUBCOMMANDS.contains(&arg) || TOP_LEVEL_ONLY.contains(&arg) => false,
        Some(arg) => arg.starts_with('-'),
    };

    if needs_demo {
        argv.insert(1, "demo".to_string());
    }
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_runs_demo() {
        assert_eq!(rewrite_args(argv(&["grades"])), argv(&["grades", "demo"]));
    }

    #[test]
    fn leading_flag_goes_to_demo() {
        assert_eq!(
            rewrite_args(argv(&["grades", "-v", "--export", "r.json"])),
            argv(&["grades", "demo", "-v", "--export", "r.json"])
        );
    }

    #[test]
    fn help_version_and_subcommands_pass_through() {
        for args in [
            argv(&["grades", "--help"]),
            argv(&["grades", "-V"]),
            argv(&["grades", "help"]),
            argv(&["grades", "report", "--roster", "r.json"]),
            argv(&["grades", "student", "--name", "Al", "--age", "9"]),
        ] {
            assert_eq!(rewrite_args(args.clone()), args);
        }
    }

    #[test]
    fn global_flag_before_subcommand_is_left_alone() {
        let args = argv(&["grades", "-v", "report", "--roster", "x"]);
        assert_eq!(rewrite_args(args.clone()), args);

        let args = argv(&["grades", "--verbose", "student", "--name", "A", "--age", "1"]);
        assert_eq!(rewrite_args(args.clone()), args);
        let cli = crate::cli::Cli::try_parse_from(rewrite_args(args)).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Student(_)));
    }

    #[test]
    fn lone_global_flag_runs_demo() {
        assert_eq!(rewrite_args(argv(&["grades", "-v"])), argv(&["grades", "demo", "-v"]));
    }

    #[test]
    fn rewritten_bare_args_parse_as_demo() {
        let cli = crate::cli::Cli::parse_from(rewrite_args(argv(&["grades"])));
        assert!(matches!(cli.command, Command::Demo(_)));
    }
}
