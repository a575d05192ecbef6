//! Library error type.
//!
//! Scoring and the threshold gate are total and never produce these; they
//! come from the session layer (identity checks) and the CSV codec.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QceError {
    /// An operator field required for recording is blank.
    #[error("missing identification: {field} is required before recording")]
    MissingIdentity { field: &'static str },

    /// `record_last` was called before any reading was taken.
    #[error("no reading to record; run a reading first")]
    NoReading,

    #[error("invalid CSV at line {line}: {reason}")]
    InvalidCsv { line: usize, reason: String },

    #[error("unknown wave '{0}'")]
    UnknownWave(String),

    #[error("unknown consent status '{0}'")]
    UnknownStatus(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, QceError>;
