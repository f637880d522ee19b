//! Error types for codeguard-core

use std::path::PathBuf;

/// Result type for codeguard-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in codeguard-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The generated rule directory is missing or cannot be listed
    #[error("Source rules unreadable at {path}: {message}")]
    SourceUnreadable { path: PathBuf, message: String },

    /// A rule document carries malformed front-matter
    #[error("Invalid front-matter in {filename}: {message}")]
    FrontMatter { filename: String, message: String },

    /// Filesystem error from codeguard-fs
    #[error(transparent)]
    Fs(#[from] codeguard_fs::Error),
}

impl Error {
    pub(crate) fn source_unreadable(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::SourceUnreadable {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
