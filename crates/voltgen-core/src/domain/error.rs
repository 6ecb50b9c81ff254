// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Classification, rendering and binding are total; the only domain failure
/// is a request whose options cannot be turned into a valid artifact.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("invalid option --{option}: {reason}")]
    InvalidOption { option: String, reason: String },

    #[error("invalid model name '{name}': {reason}")]
    InvalidModelName { name: String, reason: String },
}

impl DomainError {
    /// An enum-like option received a value outside its choice set.
    pub fn invalid_choice(option: &str, value: &str, choices: &[&str]) -> Self {
        Self::InvalidOption {
            option: option.to_string(),
            reason: format!(
                "'{value}' is not supported. Must be one of: {}",
                choices.join(", ")
            ),
        }
    }

    /// An option was given without the option it depends on.
    pub fn missing_companion(requires: &str, when: &str) -> Self {
        Self::InvalidOption {
            option: requires.to_string(),
            reason: format!("required when using {when}"),
        }
    }

    /// A column option holds something other than a plain identifier.
    pub fn invalid_column(option: &str, value: &str) -> Self {
        Self::InvalidOption {
            option: option.to_string(),
            reason: format!(
                "'{value}' is not a column name. Use letters, digits and '_', starting with a letter or '_'"
            ),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidOption { option, .. } => vec![
                format!("Check the value passed to --{option}"),
                "Run with --help to see the accepted values".into(),
            ],
            Self::InvalidModelName { .. } => vec![
                "Model names are StudlyCase identifiers, e.g. User or BlogPost".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidOption { .. } | Self::InvalidModelName { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
