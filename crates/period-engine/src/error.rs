//! Error types for period-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PeriodError {
    #[error("Zero offset: {0}() requires a non-zero count")]
    ZeroOffset(&'static str),

    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    #[error("Invalid quarter: {0} (expected 1-4)")]
    InvalidQuarter(u32),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Out of range: {0}")]
    OutOfRange(String),

    #[error("Nonexistent local time: {0}")]
    NonexistentLocalTime(String),

    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

pub type Result<T> = std::result::Result<T, PeriodError>;

/// Unwrap the result of a checked operation, treating any error as a caller bug.
///
/// The panic is reported at the location of the public entry point's caller.
#[track_caller]
pub(crate) fn precondition<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("precondition violated: {err}"),
    }
}
