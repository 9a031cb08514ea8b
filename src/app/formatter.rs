use crate::app::models::{EntryReport, MatchOutcome};
use std::io::{self, Write};
use std::path::Path;

pub const NOT_FOUND_MARKER: &str = "\t=> NOT FOUND => ERROR !";
pub const SCAN_BANNER: &str =
    "Trying to replace each file in TARGET_DIR subdirs by the same file (name) from SOURCE_DIR subdirs";

pub struct Reporter;

impl Reporter {
    pub fn root_line(label: &str, path: &Path) -> String {
        format!("{}={}", label, path.display())
    }

    /// Two-column line: a two-wide indicator, a space, then the file name.
    pub fn entry_line(report: &EntryReport) -> String {
        let marker = match report.outcome {
            MatchOutcome::NotFound => "",
            MatchOutcome::Failed { .. } => "!",
            _ => "X",
        };
        format!("{:<2} {}", marker, report.file_name)
    }

    pub fn write_line(out: &mut impl Write, line: &str) -> io::Result<()> {
        writeln!(out, "{}", line)
    }
}
