use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Target directory not found: {}", .0.display())]
    TargetRootNotFound(PathBuf),
    #[error("Source directory not found: {}", .0.display())]
    SourceRootNotFound(PathBuf),
    #[error("Failed to list {}", .dir.display())]
    ListDir {
        dir: PathBuf,
        #[source]
        error: std::io::Error,
    },
    #[error("Failed to copy {} to {}", .source_path.display(), .target.display())]
    Copy {
        source_path: PathBuf,
        target: PathBuf,
        #[source]
        error: std::io::Error,
    },
    #[error("{0} file(s) could not be replaced")]
    FailedCopies(usize),
    #[error("Invalid exclude pattern: {0}")]
    InvalidGlob(#[from] globset::Error),
    #[error("Failed to write report: {0}")]
    Report(#[from] std::io::Error),
}

impl SyncError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SyncError::TargetRootNotFound(_) => ExitCode::from(2),
            SyncError::SourceRootNotFound(_) => ExitCode::from(3),
            _ => ExitCode::FAILURE,
        }
    }

    /// Missing roots are already reported on stdout.
    pub fn is_reported(&self) -> bool {
        matches!(
            self,
            SyncError::TargetRootNotFound(_) | SyncError::SourceRootNotFound(_)
        )
    }
}
