use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileOpsError {
    #[error("Cannot use directory {}: {reason}", path.display())]
    Directory { path: PathBuf, reason: String },

    #[error("No matching files found in {}", dir.display())]
    NoMatchFound { dir: PathBuf },

    #[error("Failed to read source file {}: {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    DestinationWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to copy {} over {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid filename pattern {pattern:?}: {reason}")]
    Pattern { pattern: String, reason: String },
}

impl FileOpsError {
    /// Conditions the user is warned about rather than treated as failures.
    pub fn is_warning(&self) -> bool {
        matches!(self, FileOpsError::NoMatchFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, FileOpsError>;
