//! Error types for codeguard-fs

use std::path::PathBuf;

/// Result type for codeguard-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in codeguard-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to swap staged directory into {path}: {message}")]
    Staging { path: PathBuf, message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The path the failing operation was acting on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } | Self::Staging { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display_includes_path() {
        let err = Error::io(
            "/cache/rules",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("/cache/rules"));
        assert!(err.to_string().contains("denied"));
        assert_eq!(err.path(), std::path::Path::new("/cache/rules"));
    }
}
