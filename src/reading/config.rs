use serde::{Deserialize, Serialize};

use crate::models::Wave;

/// Additive adjustments applied to the 0.5 intent baseline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct IntentWeights {
    pub baseline: f64,
    pub assertive: f64,
    pub theta: f64,
    pub gamma: f64,
    pub alpha: f64,
    pub beta: f64,
    pub hedge: f64,
    pub neg_conflict: f64,
    pub short: f64,
    /// Applied only when the text is very short AND gamma fired.
    pub very_short_gamma: f64,
}

impl Default for IntentWeights {
    fn default() -> Self {
        Self {
            baseline: 0.5,
            assertive: 0.18,
            theta: 0.15,
            gamma: 0.15,
            alpha: 0.05,
            beta: 0.03,
            hedge: -0.12,
            neg_conflict: -0.20,
            short: 0.05,
            very_short_gamma: 0.03,
        }
    }
}

/// Additive adjustments applied to the 0.30 discordance baseline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DiscordanceWeights {
    pub baseline: f64,
    pub hedge: f64,
    pub neg_conflict: f64,
    pub assertive: f64,
    pub theta: f64,
    pub unspoken: f64,
    /// Beta without theta or gamma: analysis without a core.
    pub beta_without_core: f64,
}

impl Default for DiscordanceWeights {
    fn default() -> Self {
        Self {
            baseline: 0.30,
            hedge: 0.20,
            neg_conflict: 0.25,
            assertive: -0.15,
            theta: -0.12,
            unspoken: -0.08,
            beta_without_core: 0.05,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WaveWeights {
    pub alpha: f64,
    pub beta: f64,
    pub theta: f64,
    pub gamma: f64,
    pub delta: f64,
    pub short_gamma_bonus: f64,
    pub essence_theta_bonus: f64,
    /// A wave is present when its score reaches this value (inclusive).
    pub presence_threshold: f64,
}

impl Default for WaveWeights {
    fn default() -> Self {
        Self {
            alpha: 0.6,
            beta: 0.6,
            theta: 0.7,
            gamma: 0.7,
            delta: 0.6,
            short_gamma_bonus: 0.1,
            essence_theta_bonus: 0.1,
            presence_threshold: 0.6,
        }
    }
}

impl WaveWeights {
    pub fn increment(&self, wave: Wave) -> f64 {
        match wave {
            Wave::Alpha => self.alpha,
            Wave::Beta => self.beta,
            Wave::Theta => self.theta,
            Wave::Gamma => self.gamma,
            Wave::Delta => self.delta,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WaveMultipliers {
    pub alpha: f64,
    pub beta: f64,
    pub theta: f64,
    pub gamma: f64,
    pub delta: f64,
}

impl Default for WaveMultipliers {
    fn default() -> Self {
        Self {
            alpha: 1.00,
            beta: 0.95,
            theta: 1.05,
            gamma: 1.10,
            delta: 0.90,
        }
    }
}

impl WaveMultipliers {
    pub fn get(&self, wave: Wave) -> f64 {
        match wave {
            Wave::Alpha => self.alpha,
            Wave::Beta => self.beta,
            Wave::Theta => self.theta,
            Wave::Gamma => self.gamma,
            Wave::Delta => self.delta,
        }
    }
}

/// Lower bounds (inclusive) of the Granted and NeedsClarification bands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StatusCutoffs {
    pub granted: f64,
    pub clarification: f64,
}

impl Default for StatusCutoffs {
    fn default() -> Self {
        Self {
            granted: 0.75,
            clarification: 0.50,
        }
    }
}

/// Every tunable parameter of a reading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReadingConfig {
    /// At most this many input lines are considered.
    pub max_lines: usize,
    /// `short` holds when the character length is at most this.
    pub short_len: usize,
    pub very_short_len: usize,

    pub intent: IntentWeights,
    pub discordance: DiscordanceWeights,
    pub waves: WaveWeights,
    pub multipliers: WaveMultipliers,

    /// Blend weights for net intent and coherence in the consent score.
    pub net_intent_weight: f64,
    pub coherence_weight: f64,

    pub cutoffs: StatusCutoffs,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            max_lines: 3,
            short_len: 30,
            very_short_len: 15,
            intent: IntentWeights::default(),
            discordance: DiscordanceWeights::default(),
            waves: WaveWeights::default(),
            multipliers: WaveMultipliers::default(),
            net_intent_weight: 0.7,
            coherence_weight: 0.3,
            cutoffs: StatusCutoffs::default(),
        }
    }
}
