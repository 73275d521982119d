// Typed errors for the check.
//
// Pipeline and CLI code work in `anyhow::Result`, but the two failure kinds
// a caller can act on are kept distinct so they can be matched in tests and
// reported with the right wording.

use std::path::{Path, PathBuf};

/// Errors that can terminate a plagiarism check.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// Bad caller input, rejected before any file is touched.
    #[error("{0}")]
    Input(String),

    /// A file or directory could not be opened, listed, or decoded.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CheckError {
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input(message.into())
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// True for errors raised during request validation.
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Input(_))
    }
}
