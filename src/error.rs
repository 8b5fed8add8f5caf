//! Error types for the showcase operations.

use thiserror::Error;

/// Raised when a configuration map lacks required keys.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// One or more required keys are absent, listed in declaration order.
    #[error("Missing required keys: {}", .missing.join(", "))]
    MissingRequiredKeys { missing: Vec<&'static str> },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationError {
    #[error("Division by zero")]
    DivisionByZero,
}
