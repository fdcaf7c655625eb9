//! # Error Types
//!
//! Domain-specific error types for pos-view-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pos-view-core errors (this file)                                      │
//! │  └── CoreError        - Identifier parsing / domain violations         │
//! │                                                                         │
//! │  pos-view-state errors (separate crate)                                │
//! │  ├── UiError          - Lifecycle & construction contract              │
//! │  └── ConfigError      - Configuration loading / validation             │
//! │                                                                         │
//! │  Operator commands never error: they return a CommandOutcome.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core view-state errors.
///
/// These only surface when text coming from outside (configuration files,
/// environment variables, the operator console) is turned into a typed value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// View identifier is not one of the five known views.
    #[error("Unknown view: '{0}'. Valid options: sales, orders, reports, settings, ai-dashboard")]
    UnknownView(String),

    /// Theme identifier is not one of the six fixed themes.
    #[error("Unknown theme: '{0}'. Valid options: light, dark, ocean, forest, sunset, high-contrast")]
    UnknownTheme(String),

    /// Modal identifier is not a known modal.
    #[error("Unknown modal: '{0}'")]
    UnknownModal(String),

    /// Zoom size lies outside the configured domain.
    #[error("Zoom size {size}px is outside [{min}, {max}]")]
    ZoomOutOfRange { size: u32, min: u32, max: u32 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ZoomOutOfRange {
            size: 21,
            min: 12,
            max: 20,
        };
        assert_eq!(err.to_string(), "Zoom size 21px is outside [12, 20]");

        let err = CoreError::UnknownModal("popup".to_string());
        assert_eq!(err.to_string(), "Unknown modal: 'popup'");
    }
}
