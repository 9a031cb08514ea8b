use crate::app::error::SyncError;
use crate::app::formatter::{Reporter, NOT_FOUND_MARKER, SCAN_BANNER};
use crate::app::models::{EntryReport, MatchOutcome, SyncConfig, SyncSummary, TargetEntry};
use crate::app::scanner::Scanner;
use pathdiff::diff_paths;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

pub struct Syncer {
    config: SyncConfig,
    scanner: Scanner,
}

impl Syncer {
    pub fn new(config: SyncConfig) -> Result<Self, SyncError> {
        let scanner = Scanner::new(&config)?;
        Ok(Self { config, scanner })
    }

    /// Echoes both roots and fails on the first one that is not a directory.
    pub fn check_roots(&self, out: &mut impl Write) -> Result<(), SyncError> {
        let target = &self.config.target_root;
        Reporter::write_line(out, &Reporter::root_line("TARGET_DIR", target))?;
        if !target.is_dir() {
            Reporter::write_line(out, NOT_FOUND_MARKER)?;
            return Err(SyncError::TargetRootNotFound(target.clone()));
        }

        let source = &self.config.source_root;
        Reporter::write_line(out, &Reporter::root_line("SOURCE_DIR", source))?;
        if !source.is_dir() {
            Reporter::write_line(out, NOT_FOUND_MARKER)?;
            return Err(SyncError::SourceRootNotFound(source.clone()));
        }

        Ok(())
    }

    /// Full run: root checks, then one report line per target file.
    ///
    /// Without `keep_going` the first failed copy aborts the run and files
    /// already replaced stay replaced.
    pub fn run(&self, out: &mut impl Write) -> Result<SyncSummary, SyncError> {
        self.check_roots(out)?;
        Reporter::write_line(out, SCAN_BANNER)?;

        let mut summary = SyncSummary::default();
        for subdir in &self.config.target_subdirs {
            let dir = self.config.target_root.join(subdir);
            log::debug!("Scanning {}", dir.display());

            let entries = self.scanner.list_target(&dir)?;
            self.sync_entries(entries, out, &mut summary)?;
        }

        log::debug!(
            "{} file(s) scanned, {} matched, {} failed",
            summary.scanned,
            summary.matched,
            summary.failed
        );
        Ok(summary)
    }

    fn sync_entries(
        &self,
        entries: Vec<TargetEntry>,
        out: &mut impl Write,
        summary: &mut SyncSummary,
    ) -> Result<(), SyncError> {
        for entry in entries {
            let report = self.sync_entry(entry)?;
            self.log_outcome(&report);
            summary.record(&report.outcome);
            Reporter::write_line(out, &Reporter::entry_line(&report))?;
        }
        Ok(())
    }

    fn sync_entry(&self, entry: TargetEntry) -> Result<EntryReport, SyncError> {
        let outcome = match self.scanner.find_source(&entry.name) {
            None => MatchOutcome::NotFound,
            Some(source) => {
                if is_same_file(&source, &entry.path) {
                    MatchOutcome::SameFile { source }
                } else if self.config.dry_run {
                    MatchOutcome::WouldCopy { source }
                } else {
                    match copy_contents(&source, &entry.path) {
                        Ok(()) => MatchOutcome::Copied { source },
                        Err(error) if self.config.keep_going => MatchOutcome::Failed {
                            source,
                            reason: error.to_string(),
                        },
                        Err(error) => {
                            return Err(SyncError::Copy {
                                source_path: source,
                                target: entry.path,
                                error,
                            })
                        }
                    }
                }
            }
        };

        Ok(EntryReport {
            file_name: entry.file_name,
            outcome,
        })
    }

    fn log_outcome(&self, report: &EntryReport) {
        let relative = |source: &Path| {
            diff_paths(source, &self.config.source_root)
                .unwrap_or_else(|| source.to_path_buf())
        };
        match &report.outcome {
            MatchOutcome::Copied { source } => {
                log::debug!("{} <- {}", report.file_name, relative(source).display())
            }
            MatchOutcome::SameFile { source } => {
                log::debug!("{} is {} already", report.file_name, source.display())
            }
            MatchOutcome::WouldCopy { source } => {
                log::debug!(
                    "{} would be replaced by {}",
                    report.file_name,
                    relative(source).display()
                )
            }
            MatchOutcome::Failed { source, reason } => {
                log::warn!(
                    "Failed to replace {} with {}: {}",
                    report.file_name,
                    source.display(),
                    reason
                )
            }
            MatchOutcome::NotFound => log::debug!("{} has no replacement", report.file_name),
        }
    }
}

/// Compares file identity (device and inode on unix), so hard links and
/// symlinks to the source count as the source itself.
fn is_same_file(a: &Path, b: &Path) -> bool {
    same_file::is_same_file(a, b).unwrap_or(false)
}

/// Overwrites the contents of an existing `target`; its permissions are kept.
fn copy_contents(source: &Path, target: &Path) -> io::Result<()> {
    let mut reader = File::open(source)?;
    let mut writer = OpenOptions::new().write(true).truncate(true).open(target)?;
    io::copy(&mut reader, &mut writer)?;
    writer.flush()
}
