use sha2::{Digest, Sha256};

use crate::models::{ConsentStatus, FeatureFlags, Wave, WaveScores};
use crate::reading::config::{
    DiscordanceWeights, IntentWeights, ReadingConfig, StatusCutoffs, WaveMultipliers,
    WaveWeights,
};

pub const REASON_ASSERTIVE: &str = "Affirmation / clear intention found → supports Intent";
pub const REASON_HEDGE: &str = "Hedging or conditional wording → raises Discordance";
pub const REASON_NEG_CONFLICT: &str = "Signs of uncertainty or inner conflict";
pub const REASON_THETA: &str = "Wording points to a core or inner state → classed as THETA";
pub const REASON_GAMMA: &str = "Sharp, short or declarative wording → classed as GAMMA";
pub const REASON_ALPHA: &str = "Calm, relaxed tone → supports ALPHA";
pub const REASON_BETA: &str = "Reasoned explanation → supports BETA";

pub fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Round to 3 decimals for reporting, on the exact decimal value of the
/// float: 0.3705 is stored as 0.37049999... and reports 0.37.
pub fn round3(value: f64) -> f64 {
    format!("{value:.3}").parse().unwrap_or(value)
}

pub fn compute_intent(flags: &FeatureFlags, weights: &IntentWeights) -> f64 {
    let mut intent = weights.baseline;
    if flags.assertive {
        intent += weights.assertive;
    }
    if flags.theta {
        intent += weights.theta;
    }
    if flags.gamma {
        intent += weights.gamma;
    }
    if flags.alpha {
        intent += weights.alpha;
    }
    if flags.beta {
        intent += weights.beta;
    }
    if flags.hedge {
        intent += weights.hedge;
    }
    if flags.neg_conflict {
        intent += weights.neg_conflict;
    }
    if flags.short {
        intent += weights.short;
    }
    if flags.very_short && flags.gamma {
        intent += weights.very_short_gamma;
    }
    clamp01(intent)
}

/// Lower is better.
pub fn compute_discordance(flags: &FeatureFlags, weights: &DiscordanceWeights) -> f64 {
    let mut discord = weights.baseline;
    if flags.hedge {
        discord += weights.hedge;
    }
    if flags.neg_conflict {
        discord += weights.neg_conflict;
    }
    if flags.assertive {
        discord += weights.assertive;
    }
    if flags.theta {
        discord += weights.theta;
    }
    if flags.unspoken {
        discord += weights.unspoken;
    }
    if flags.beta && !flags.theta && !flags.gamma {
        discord += weights.beta_without_core;
    }
    clamp01(discord)
}

pub fn compute_wave_scores(flags: &FeatureFlags, weights: &WaveWeights) -> WaveScores {
    let mut scores = WaveScores::default();
    let fired = [
        (Wave::Alpha, flags.alpha),
        (Wave::Beta, flags.beta),
        (Wave::Theta, flags.theta),
        (Wave::Gamma, flags.gamma),
        (Wave::Delta, flags.delta),
    ];
    for (wave, hit) in fired {
        if hit {
            scores.add(wave, weights.increment(wave));
        }
    }

    if flags.short {
        scores.add(Wave::Gamma, weights.short_gamma_bonus);
    }
    if flags.essence {
        scores.add(Wave::Theta, weights.essence_theta_bonus);
    }
    scores
}

/// Waves at or above the threshold, in canonical order. Never empty: falls
/// back to alpha.
pub fn present_waves(scores: &WaveScores, threshold: f64) -> Vec<Wave> {
    let present: Vec<Wave> = Wave::ALL
        .iter()
        .copied()
        .filter(|wave| scores.get(*wave) >= threshold)
        .collect();

    if present.is_empty() {
        vec![Wave::Alpha]
    } else {
        present
    }
}

/// Mean multiplier over the present waves.
pub fn wave_multiplier(waves: &[Wave], multipliers: &WaveMultipliers) -> f64 {
    if waves.is_empty() {
        return multipliers.alpha;
    }
    let total: f64 = waves.iter().map(|wave| multipliers.get(*wave)).sum();
    total / waves.len() as f64
}

pub fn compute_consent(intent: f64, discordance: f64, multiplier: f64, config: &ReadingConfig) -> f64 {
    let net_intent = (intent - discordance).max(0.0);
    let coherence = 1.0 - (intent - (1.0 - discordance)).abs();
    clamp01(
        (config.net_intent_weight * net_intent + config.coherence_weight * coherence) * multiplier,
    )
}

pub fn classify_status(consent_score: f64, cutoffs: &StatusCutoffs) -> ConsentStatus {
    if consent_score >= cutoffs.granted {
        ConsentStatus::Granted
    } else if consent_score >= cutoffs.clarification {
        ConsentStatus::NeedsClarification
    } else {
        ConsentStatus::Denied
    }
}

/// One explanation per fired signal, in a fixed order. Gamma and short share
/// a single reason.
pub fn build_reasons(flags: &FeatureFlags) -> Vec<String> {
    let checks = [
        (flags.assertive, REASON_ASSERTIVE),
        (flags.hedge, REASON_HEDGE),
        (flags.neg_conflict, REASON_NEG_CONFLICT),
        (flags.theta, REASON_THETA),
        (flags.gamma || flags.short, REASON_GAMMA),
        (flags.alpha, REASON_ALPHA),
        (flags.beta, REASON_BETA),
    ];

    checks
        .into_iter()
        .filter(|(fired, _)| *fired)
        .map(|(_, reason)| reason.to_string())
        .collect()
}

/// First 16 hex chars of the SHA-256 of the normalized text. Used only for
/// de-identified logging.
pub fn input_hash(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    digest[..16].to_string()
}
