//! Export a per-student summary to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::Roster;
use crate::error::AppError;

/// Write one CSV row per student to `path`.
pub fn write_summary_csv(path: &Path, roster: &Roster) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::io(format!("Failed to create export CSV '{}': {e}", path.display())))?;
    let mut out = BufWriter::new(file);

    write_summary(&mut out, roster)
        .and_then(|()| out.flush())
        .map_err(|e| AppError::io(format!("Failed to write export CSV: {e}")))?;

    tracing::info!(path = %path.display(), rows = roster.len(), "wrote summary CSV");
    Ok(())
}

/// Render the CSV summary into any writer.
pub fn write_summary<W: Write>(out: &mut W, roster: &Roster) -> std::io::Result<()> {
    writeln!(out, "name,age,count,average,scores")?;
    for s in roster {
        let scores: Vec<String> = s.scores().iter().map(|v| v.to_string()).collect();
        writeln!(
            out,
            "{},{},{},{:.4},{}",
            csv_field(s.name()),
            s.age(),
            s.score_count(),
            s.average(),
            scores.join(";"),
        )?;
    }
    Ok(())
}

/// Quote a field when it contains a delimiter, quote or line break.
fn csv_field(raw: &str) -> String {
    if raw.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StudentRecord;

    #[test]
    fn summary_has_header_and_one_row_per_student() {
        let mut alice = StudentRecord::new("Alice", 20);
        alice.append_score(95.5);
        alice.append_score(87.0);
        let eve = StudentRecord::new("Eve, Jr.", 30);
        let roster: Roster = vec![alice, eve].into_iter().collect();

        let mut buf = Vec::new();
        write_summary(&mut buf, &roster).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "name,age,count,average,scores");
        assert_eq!(lines[1], "Alice,20,2,91.2500,95.5;87");
        assert_eq!(lines[2], "\"Eve, Jr.\",30,0,0.0000,");
    }

    #[test]
    fn summary_csv_writes_file() {
        let roster: Roster = vec![StudentRecord::new("Bob", 21)].into_iter().collect();
        let path = std::env::temp_dir().join(format!("grades-{}-summary.csv", std::process::id()));

        write_summary_csv(&path, &roster).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(text, "name,age,count,average,scores\nBob,21,0,0.0000,\n");
    }
}
