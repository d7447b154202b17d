//! Error type for catalog operations.
//!
//! | Variant | Raised when |
//! |---------|-------------|
//! | [`FileAccess`](InstcatError::FileAccess) | a file cannot be opened, read, created, written or moved into place |
//! | [`Parse`](InstcatError::Parse) | an `object` line lacks a usable identifier, RA or Dec |
//! | [`InvalidArgument`](InstcatError::InvalidArgument) | caller input is rejected before any I/O |
//! | [`Angle`](InstcatError::Angle) | coordinate text fails to parse |

use instcat_core::CoreError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The file step that failed, carried by [`InstcatError::FileAccess`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    Open,
    Read,
    Create,
    Write,
    Persist,
    Remove,
}

impl std::fmt::Display for FileOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FileOperation::Open => "open",
            FileOperation::Read => "read",
            FileOperation::Create => "create",
            FileOperation::Write => "write",
            FileOperation::Persist => "persist",
            FileOperation::Remove => "remove",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum InstcatError {
    #[error("Failed to {operation} {path:?}: {source}")]
    FileAccess {
        path: PathBuf,
        operation: FileOperation,
        #[source]
        source: io::Error,
    },

    #[error("Malformed object line {line_number}: {reason}: {line:?}")]
    Parse {
        /// 1-based line number in the input file.
        line_number: u64,
        line: String,
        reason: String,
    },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error(transparent)]
    Angle(#[from] CoreError),
}

/// Convenience alias for `Result<T, InstcatError>`.
pub type Result<T> = std::result::Result<T, InstcatError>;

impl InstcatError {
    pub fn file_access(
        path: impl AsRef<Path>,
        operation: FileOperation,
        source: io::Error,
    ) -> Self {
        Self::FileAccess {
            path: path.as_ref().to_path_buf(),
            operation,
            source,
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Returns `true` for errors caused by the filesystem rather than the data.
    pub fn is_file_access(&self) -> bool {
        matches!(self, Self::FileAccess { .. })
    }
}

/// Attaches a path and operation to an `io::Result`.
pub(crate) trait IoResultExt<T> {
    fn with_file(self, path: &Path, operation: FileOperation) -> Result<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_file(self, path: &Path, operation: FileOperation) -> Result<T> {
        self.map_err(|source| InstcatError::file_access(path, operation, source))
    }
}
