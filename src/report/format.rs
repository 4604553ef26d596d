//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the record type stays free of presentation concerns
//! - output changes are localized (the demo transcript is compared byte for byte)

use crate::domain::{Roster, StudentRecord};

/// Banner printed at the top of every roster listing.
pub const BANNER: &str = "=== Student Grade Tracker ===";

/// Two-line report for one student: name/age, then the average to two decimals.
pub fn format_report(record: &StudentRecord) -> String {
    format!(
        "Student: {}, Age: {}\nAverage score: {:.2}",
        record.name(),
        record.age(),
        record.average()
    )
}

/// Reports for every student in roster order, one per pair of lines.
pub fn format_roster(roster: &Roster) -> String {
    let reports: Vec<String> = roster.iter().map(format_report).collect();
    reports.join("\n")
}

/// Banner followed by the roster reports.
pub fn format_roster_listing(roster: &Roster) -> String {
    let mut out = String::from(BANNER);
    out.push('\n');
    if roster.is_empty() {
        out.push_str("(no students)");
    } else {
        out.push_str(&format_roster(roster));
    }
    out
}
