//! Unified error hierarchy for PacePilot
//!
//! Calculation outcomes such as "no solution" are not errors and never pass
//! through here; see [`crate::assess::Outcome`]. These types cover rejected
//! input, malformed tokens, and configuration faults.

use crate::models::Field;
use thiserror::Error;

/// Top-level error type for all PacePilot operations
#[derive(Debug, Error)]
pub enum PacePilotError {
    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A duration or pace token could not be parsed
    #[error("Could not parse '{token}': {reason}")]
    Parse { token: String, reason: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// JSON serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Input validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A duration or pace was zero, negative or not a number
    #[error("{field} must be positive (got {value})")]
    NotPositive { field: Field, value: f64 },

    /// Seconds sub-field outside 0-59
    #[error("Seconds must be between 0 and 59 (got {seconds})")]
    SecondsOutOfRange { seconds: u32 },
}

/// Result type alias for PacePilot operations
pub type Result<T> = std::result::Result<T, PacePilotError>;

impl PacePilotError {
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PacePilotError::Validation(_) => ErrorSeverity::Warning,
            PacePilotError::Parse { .. } => ErrorSeverity::Warning,
            PacePilotError::Configuration(_) => ErrorSeverity::Error,
            PacePilotError::Serialization(_) => ErrorSeverity::Critical,
        }
    }

    /// Record this error as a tracing event at its severity's level
    pub fn log(&self) {
        let level = self.severity().to_tracing_level();
        if level == tracing::Level::ERROR {
            tracing::error!(error = %self, severity = ?self.severity(), "operation failed");
        } else {
            tracing::info!(error = %self, severity = ?self.severity(), "input rejected");
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            PacePilotError::Validation(ValidationError::NotPositive { field, .. }) => {
                field.invalid_message().to_string()
            }
            PacePilotError::Validation(ValidationError::SecondsOutOfRange { seconds }) => {
                format!("Seconds must be between 0 and 59, but {} was entered.", seconds)
            }
            PacePilotError::Parse { token, .. } => {
                format!(
                    "Could not understand '{}'. Enter times as M:SS, for example 7:30.",
                    token
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Internal fault that should never happen
    Critical,
    /// Error that prevents the operation
    Error,
    /// User input problem, fixed by re-entering a value
    Warning,
}

impl ErrorSeverity {
    /// Convert to tracing level
    ///
    /// Input problems are already shown to the user, so they log at info.
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            ErrorSeverity::Critical => tracing::Level::ERROR,
            ErrorSeverity::Error => tracing::Level::ERROR,
            ErrorSeverity::Warning => tracing::Level::INFO,
        }
    }
}
