//! # View-State Error Types
//!
//! Errors for building and running the view layer.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      View-State Error Categories                        │
//! │                                                                         │
//! │  ┌─────────────────────┐  ┌─────────────────────┐  ┌────────────────┐  │
//! │  │   Construction      │  │     Lifecycle       │  │ Configuration  │  │
//! │  │                     │  │                     │  │                │  │
//! │  │  MissingCollaborator│  │  AlreadyStarted     │  │  Invalid       │  │
//! │  │                     │  │  NoRuntime          │  │  Io / Parse    │  │
//! │  └─────────────────────┘  └─────────────────────┘  └────────────────┘  │
//! │                                                                         │
//! │  Operator commands are NOT errors: they return a CommandOutcome.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for view-state operations.
pub type UiResult<T> = Result<T, UiError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while wiring or running the view layer.
///
/// All of these are programmer errors: a correctly built composition root
/// never sees them at runtime.
#[derive(Debug, Error)]
pub enum UiError {
    /// A collaborator was not supplied to the session builder.
    #[error("{0} is required to build a view session")]
    MissingCollaborator(&'static str),

    /// `start()` called twice without an intervening `stop()`.
    #[error("{0} is already started")]
    AlreadyStarted(&'static str),

    /// `start()` called outside a tokio runtime.
    #[error("No async runtime available: {0}")]
    NoRuntime(String),

    /// Configuration problem surfaced while building.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A value failed validation.
    #[error("Invalid UI configuration: {0}")]
    Invalid(String),

    /// Config file could not be read or written.
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for [`crate::config::UiConfig`].
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be serialized.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = UiError::MissingCollaborator("store");
        assert_eq!(err.to_string(), "store is required to build a view session");

        let err = UiError::AlreadyStarted("ViewStateManager");
        assert_eq!(err.to_string(), "ViewStateManager is already started");
    }

    #[test]
    fn test_config_error_converts() {
        let err: UiError = ConfigError::Invalid("zoom".into()).into();
        assert!(matches!(err, UiError::Config(ConfigError::Invalid(_))));
        assert_eq!(err.to_string(), "Invalid UI configuration: zoom");
    }
}
