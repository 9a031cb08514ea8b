use std::ffi::OsString;
use std::path::PathBuf;

/// Represents the final configuration after merging presets and CLI args.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub target_root: PathBuf,
    pub target_subdirs: Vec<String>,
    pub source_root: PathBuf,
    /// Searched in this order; the first hit wins.
    pub source_subdirs: Vec<String>,
    pub exclude: Vec<String>,
    pub dry_run: bool,
    pub keep_going: bool,
}

/// A regular file discovered in a target subdirectory.
#[derive(Debug)]
pub struct TargetEntry {
    pub path: PathBuf,
    /// Raw name, used for lookups.
    pub name: OsString,
    /// Lossy form of `name` for the report.
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    Copied { source: PathBuf },
    /// Source and target are the same file on disk, nothing to copy.
    SameFile { source: PathBuf },
    WouldCopy { source: PathBuf },
    NotFound,
    Failed { source: PathBuf, reason: String },
}

impl MatchOutcome {
    pub fn is_match(&self) -> bool {
        !matches!(self, MatchOutcome::NotFound)
    }
}

#[derive(Debug, Clone)]
pub struct EntryReport {
    pub file_name: String,
    pub outcome: MatchOutcome,
}

/// Totals for a whole run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SyncSummary {
    pub scanned: usize,
    pub matched: usize,
    pub failed: usize,
}

impl SyncSummary {
    pub fn record(&mut self, outcome: &MatchOutcome) {
        self.scanned += 1;
        if outcome.is_match() {
            self.matched += 1;
        }
        if matches!(outcome, MatchOutcome::Failed { .. }) {
            self.failed += 1;
        }
    }
}
