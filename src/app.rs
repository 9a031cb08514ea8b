// Declare modules
pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod models;
pub mod scanner;
pub mod syncer;

use anyhow::{Context, Result};
use std::env;
use std::io::{self, Write};

use self::cli::Cli;
use self::config::resolve_config;
use self::error::SyncError;
use self::syncer::Syncer;

/// Resolves configuration and runs one sync pass, reporting on stdout.
pub fn run(args: Cli) -> Result<()> {
    // 1. Identify Project Name (used to auto-pick a preset)
    let current_dir = env::current_dir().context("Failed to get current directory")?;
    let project_name = current_dir.file_name().and_then(|n| n.to_str());

    // 2. Resolve Configuration
    let config = resolve_config(args, project_name)?;
    log::debug!("Resolved configuration: {:?}", config);

    if config.dry_run {
        log::warn!("Dry run: no file will be written.");
    }

    // 3. Sync
    let syncer = Syncer::new(config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = syncer.run(&mut out)?;
    out.flush().context("Failed to flush stdout")?;

    if summary.scanned == 0 {
        log::warn!("⚠️ No files found in the target subdirectories.");
    }

    if summary.failed > 0 {
        return Err(SyncError::FailedCopies(summary.failed).into());
    }

    Ok(())
}
