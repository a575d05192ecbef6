//! Wave (harmonic) categories attached to a reading.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QceError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Wave {
    Alpha,
    Beta,
    Theta,
    Gamma,
    Delta,
}

impl Wave {
    /// Canonical order used for presence filtering, rendering and export.
    pub const ALL: [Wave; 5] = [Wave::Alpha, Wave::Beta, Wave::Theta, Wave::Gamma, Wave::Delta];

    pub fn as_str(&self) -> &'static str {
        match self {
            Wave::Alpha => "alpha",
            Wave::Beta => "beta",
            Wave::Theta => "theta",
            Wave::Gamma => "gamma",
            Wave::Delta => "delta",
        }
    }

    /// Position in [`Wave::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Wave::Alpha => 0,
            Wave::Beta => 1,
            Wave::Theta => 2,
            Wave::Gamma => 3,
            Wave::Delta => 4,
        }
    }
}

impl fmt::Display for Wave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Wave {
    type Err = QceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "alpha" => Ok(Wave::Alpha),
            "beta" => Ok(Wave::Beta),
            "theta" => Ok(Wave::Theta),
            "gamma" => Ok(Wave::Gamma),
            "delta" => Ok(Wave::Delta),
            _ => Err(QceError::UnknownWave(value.to_string())),
        }
    }
}

/// Join waves with `|`, the timeline/export representation.
pub fn join_waves(waves: &[Wave]) -> String {
    waves
        .iter()
        .map(Wave::as_str)
        .collect::<Vec<_>>()
        .join("|")
}

/// Inverse of [`join_waves`]. Empty segments are ignored.
pub fn split_waves(joined: &str) -> Result<Vec<Wave>, QceError> {
    joined
        .split('|')
        .filter(|part| !part.trim().is_empty())
        .map(Wave::from_str)
        .collect()
}
