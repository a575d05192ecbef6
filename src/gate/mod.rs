//! Threshold consent gate.
//!
//! The earlier, slider-driven engine: externally supplied intent,
//! discordance and wave are checked against three fixed conditions. Kept as
//! a degenerate special case next to the lexical reader.

use serde::{Deserialize, Serialize};

use crate::models::Wave;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GateConfig {
    pub intent_threshold: f64,
    pub discordance_threshold: f64,
    pub allowed_waves: Vec<Wave>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            intent_threshold: 0.88,
            discordance_threshold: 0.7,
            allowed_waves: vec![Wave::Alpha, Wave::Beta],
        }
    }
}

/// Thresholds are fixed once the engine is built.
#[derive(Debug, Clone)]
pub struct GateEngine {
    config: GateConfig,
}

impl GateEngine {
    pub fn new(config: GateConfig) -> Self {
        Self { config }
    }

    /// Passes iff intent ≥ threshold, discordance ≤ threshold, and the wave
    /// name is on the allow-list. The name must match exactly: no trimming,
    /// no case folding. Unrecognised names never pass.
    pub fn evaluate(&self, intent: f64, discordance: f64, wave: &str) -> bool {
        intent >= self.config.intent_threshold
            && discordance <= self.config.discordance_threshold
            && self
                .config
                .allowed_waves
                .iter()
                .any(|allowed| allowed.as_str() == wave)
    }
}

impl Default for GateEngine {
    fn default() -> Self {
        Self::new(GateConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_when_all_three_conditions_hold() {
        let engine = GateEngine::default();
        assert!(engine.evaluate(0.9, 0.5, "alpha"));
        assert!(engine.evaluate(0.88, 0.7, "beta"));
    }

    #[test]
    fn wave_outside_allow_list_always_fails() {
        let engine = GateEngine::default();
        assert!(!engine.evaluate(0.9, 0.5, "theta"));
        assert!(!engine.evaluate(1.0, 0.0, "gamma"));
        assert!(!engine.evaluate(1.0, 0.0, "omega"));
    }

    #[test]
    fn each_threshold_is_enforced() {
        let engine = GateEngine::default();
        assert!(!engine.evaluate(0.8799, 0.5, "alpha"));
        assert!(!engine.evaluate(0.9, 0.7001, "alpha"));
    }

    #[test]
    fn custom_allow_list() {
        let engine = GateEngine::new(GateConfig {
            allowed_waves: vec![Wave::Theta],
            ..GateConfig::default()
        });
        assert!(engine.evaluate(0.9, 0.1, "theta"));
        assert!(!engine.evaluate(0.9, 0.1, "alpha"));
    }

    #[test]
    fn wave_name_must_match_exactly() {
        let engine = GateEngine::default();
        assert!(!engine.evaluate(0.9, 0.5, "ALPHA"));
        assert!(!engine.evaluate(0.9, 0.5, "Beta"));
        assert!(!engine.evaluate(0.9, 0.5, " alpha "));
        assert!(!engine.evaluate(0.9, 0.5, ""));
    }
}
