//! Error types for codeguard-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from codeguard-core
    #[error(transparent)]
    Core(#[from] codeguard_core::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_user() {
        let error = CliError::user("Some rules failed validation");
        assert_eq!(error.to_string(), "Some rules failed validation");
    }

    #[test]
    fn test_core_error_is_transparent() {
        let core = codeguard_core::Error::FrontMatter {
            filename: "x.md".into(),
            message: "bad".into(),
        };
        let expected = core.to_string();
        assert_eq!(CliError::from(core).to_string(), expected);
    }
}
