//! Operator identification and legacy gate log records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::QceError;

/// The person running a session. The token is never logged or exported.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Operator {
    pub name: String,
    #[serde(skip_serializing)]
    pub token: String,
}

impl Operator {
    pub fn new(name: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            token: token.into(),
        }
    }

    /// Both name and token must be non-blank.
    pub fn validate(&self) -> Result<(), QceError> {
        if self.name.trim().is_empty() {
            return Err(QceError::MissingIdentity { field: "name" });
        }
        if self.token.trim().is_empty() {
            return Err(QceError::MissingIdentity { field: "token" });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GateRecord {
    pub operator: String,
    pub timestamp: DateTime<Utc>,
    pub intent: f64,
    pub discordance: f64,
    pub wave: String,
    pub passed: bool,
}
