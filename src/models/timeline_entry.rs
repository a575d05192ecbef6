//! Timeline entry: the recorded projection of a reading.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{join_waves, ConsentStatus, ReadingResult};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimelineEntry {
    pub timestamp: DateTime<Utc>,
    pub input_hash: String,
    pub intent: f64,
    pub discordance: f64,
    pub consent_score: f64,
    /// Pipe-joined wave names, e.g. `theta|gamma`.
    pub waves: String,
    pub status: ConsentStatus,
}

impl TimelineEntry {
    pub fn from_reading(result: &ReadingResult, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            input_hash: result.input_hash.clone(),
            intent: result.intent,
            discordance: result.discordance,
            consent_score: result.consent_score,
            waves: join_waves(&result.waves),
            status: result.status,
        }
    }
}
