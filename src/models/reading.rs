//! Reading data models: feature flags, wave scores, and the reading result.

use serde::{Deserialize, Serialize};

use crate::error::QceError;
use crate::models::Wave;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConsentStatus {
    Granted,
    NeedsClarification,
    Denied,
}

impl ConsentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsentStatus::Granted => "Granted",
            ConsentStatus::NeedsClarification => "NeedsClarification",
            ConsentStatus::Denied => "Denied",
        }
    }

    /// Human-facing label shown by the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            ConsentStatus::Granted => "Consent Granted",
            ConsentStatus::NeedsClarification => "Needs Clarification",
            ConsentStatus::Denied => "Consent Denied",
        }
    }

    /// Accepts both the machine name and the label.
    pub fn parse(value: &str) -> Result<Self, QceError> {
        match value.trim() {
            "Granted" | "Consent Granted" => Ok(ConsentStatus::Granted),
            "NeedsClarification" | "Needs Clarification" => Ok(ConsentStatus::NeedsClarification),
            "Denied" | "Consent Denied" => Ok(ConsentStatus::Denied),
            other => Err(QceError::UnknownStatus(other.to_string())),
        }
    }
}

/// Boolean signals derived once per reading.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeatureFlags {
    pub hedge: bool,
    pub assertive: bool,
    pub neg_conflict: bool,
    pub theta: bool,
    pub gamma: bool,
    pub alpha: bool,
    pub beta: bool,
    pub delta: bool,
    /// Whether the "no need to speak" phrase appears.
    pub unspoken: bool,
    /// Whether the secondary core/essence vocabulary appears.
    pub essence: bool,
    pub short: bool,
    pub very_short: bool,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct WaveScores {
    pub alpha: f64,
    pub beta: f64,
    pub theta: f64,
    pub gamma: f64,
    pub delta: f64,
}

impl WaveScores {
    pub fn get(&self, wave: Wave) -> f64 {
        match wave {
            Wave::Alpha => self.alpha,
            Wave::Beta => self.beta,
            Wave::Theta => self.theta,
            Wave::Gamma => self.gamma,
            Wave::Delta => self.delta,
        }
    }

    pub fn add(&mut self, wave: Wave, amount: f64) {
        let slot = match wave {
            Wave::Alpha => &mut self.alpha,
            Wave::Beta => &mut self.beta,
            Wave::Theta => &mut self.theta,
            Wave::Gamma => &mut self.gamma,
            Wave::Delta => &mut self.delta,
        };
        *slot += amount;
    }
}

/// Unrounded internals, only attached when debug output is requested.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReadingDiagnostics {
    pub char_len: usize,
    pub flags: FeatureFlags,
    pub wave_scores: WaveScores,
    pub raw_consent_score: f64,
}

/// Output of one reading. Numeric fields are rounded to 3 decimals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReadingResult {
    pub input_hash: String,
    pub raw_text: String,
    pub intent: f64,
    pub discordance: f64,
    pub waves: Vec<Wave>,
    pub wave_multiplier: f64,
    pub consent_score: f64,
    pub status: ConsentStatus,
    pub reasons: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<ReadingDiagnostics>,
}
