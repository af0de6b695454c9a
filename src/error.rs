//! Error types for reckon operations.
//!
//! Defines the error conditions for the two fallible subsystems:
//! - Arithmetic evaluation (division by zero)
//! - History persistence (missing or unreadable history files)
//!
//! All conditions are reported as values at the call boundary, never as
//! printed diagnostics.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while evaluating an arithmetic operation.
///
/// This is the caller-visible error marker stored in history records: it is
/// distinguishable from every valid numeric result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum CalcError {
    /// The divisor of a division was zero.
    #[error("division by zero")]
    DivisionByZero,
}

/// Errors that can occur while saving or loading a history file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No target file is configured, or the file could not be opened.
    #[error("history file unavailable: {0}")]
    ResourceUnavailable(String),

    /// The configured file does not exist.
    #[error("history file not found: {}", .0.display())]
    NotFound(PathBuf),
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
