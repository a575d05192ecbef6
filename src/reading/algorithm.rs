use log::debug;

use crate::models::{ReadingDiagnostics, ReadingResult};
use crate::reading::config::ReadingConfig;
use crate::reading::features::{char_len, extract_features, normalize_lines};
use crate::reading::progress::{NoProgress, ProgressObserver, ProgressPhase};
use crate::reading::scoring::{
    build_reasons, classify_status, compute_consent, compute_discordance, compute_intent,
    compute_wave_scores, input_hash, present_waves, round3, wave_multiplier,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ReadOptions {
    /// Attach unrounded internals to the result.
    pub debug: bool,
}

/// Score 0-3 conversational lines with the default configuration.
pub fn evaluate<S: AsRef<str>>(lines: &[S]) -> ReadingResult {
    evaluate_with(lines, &ReadingConfig::default(), ReadOptions::default())
}

pub fn evaluate_with<S: AsRef<str>>(
    lines: &[S],
    config: &ReadingConfig,
    options: ReadOptions,
) -> ReadingResult {
    evaluate_observed(lines, config, options, &mut NoProgress)
}

/// Main reading function. Total over its input: any text, including none,
/// produces a complete result.
pub fn evaluate_observed<S: AsRef<str>>(
    lines: &[S],
    config: &ReadingConfig,
    options: ReadOptions,
    observer: &mut dyn ProgressObserver,
) -> ReadingResult {
    // Step 1: normalize and detect features
    observer.on_phase(ProgressPhase::Scanning, ProgressPhase::Scanning.start_percent());
    let text = normalize_lines(lines, config.max_lines);
    let flags = extract_features(&text, config);

    // Step 2: intent and discordance
    observer.on_phase(ProgressPhase::Extracting, ProgressPhase::Extracting.start_percent());
    let intent = compute_intent(&flags, &config.intent);
    let discordance = compute_discordance(&flags, &config.discordance);

    // Step 3: waves
    observer.on_phase(ProgressPhase::Mapping, ProgressPhase::Mapping.start_percent());
    let wave_scores = compute_wave_scores(&flags, &config.waves);
    let waves = present_waves(&wave_scores, config.waves.presence_threshold);
    let multiplier = wave_multiplier(&waves, &config.multipliers);

    // Step 4: consent, status, reasons
    observer.on_phase(ProgressPhase::Finalizing, ProgressPhase::Finalizing.start_percent());
    let raw_consent = compute_consent(intent, discordance, multiplier, config);
    // Cutoffs see full precision; rounding is for the reported score only.
    let status = classify_status(raw_consent, &config.cutoffs);
    let consent_score = round3(raw_consent);
    let reasons = build_reasons(&flags);
    let hash = input_hash(&text);

    debug!(
        "reading {hash}: consent={consent_score:.3} status={} waves={}",
        status.as_str(),
        waves.len()
    );
    observer.on_complete();

    let diagnostics = options.debug.then(|| ReadingDiagnostics {
        char_len: char_len(&text),
        flags,
        wave_scores,
        raw_consent_score: raw_consent,
    });

    ReadingResult {
        input_hash: hash,
        raw_text: text,
        intent: round3(intent),
        discordance: round3(discordance),
        waves,
        wave_multiplier: round3(multiplier),
        consent_score,
        status,
        reasons,
        diagnostics,
    }
}
