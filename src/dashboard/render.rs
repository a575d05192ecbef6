//! Plain-text rendering of readings, the timeline, and its charts.

use std::fmt::Write;

use crate::models::{GateRecord, ReadingResult, Wave};
use crate::session::Timeline;

const BAR_WIDTH: usize = 20;

pub fn render_reading(result: &ReadingResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Reading Complete");
    let _ = writeln!(out, "  {:<16}{:.2}", "Intent", result.intent);
    let _ = writeln!(out, "  {:<16}{:.2}", "Discordance", result.discordance);
    let _ = writeln!(out, "  {:<16}{:.2}", "Consent Score", result.consent_score);
    let _ = writeln!(out, "  {:<16}{:.2}", "Wave Multiplier", result.wave_multiplier);
    let _ = writeln!(out);
    let _ = writeln!(out, "Waves detected: {}", upper_waves(&result.waves));
    let _ = writeln!(out, "Decision: {}", result.status.label());

    if !result.reasons.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Explainability:");
        for reason in &result.reasons {
            let _ = writeln!(out, "  - {reason}");
        }
    }
    out
}

pub fn upper_waves(waves: &[Wave]) -> String {
    waves
        .iter()
        .map(|wave| wave.as_str().to_uppercase())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn render_timeline_table(timeline: &Timeline) -> String {
    if timeline.is_empty() {
        return "No timeline data yet. Run a reading and add it first.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<4} {:<20} {:<16} {:>6} {:>6} {:>7}  {:<22} {}",
        "#", "timestamp", "input_hash", "intent", "disc", "consent", "waves", "status"
    );
    for (i, entry) in timeline.entries().iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<4} {:<20} {:<16} {:>6.3} {:>6.3} {:>7.3}  {:<22} {}",
            i + 1,
            entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
            entry.input_hash,
            entry.intent,
            entry.discordance,
            entry.consent_score,
            entry.waves,
            entry.status.label()
        );
    }
    out
}

/// Rows are waves, columns are rounds; a check marks presence.
pub fn render_wave_grid(timeline: &Timeline) -> String {
    let presence = timeline.wave_presence();
    let mut out = String::new();

    let _ = write!(out, "{:<7}", "");
    for round in 1..=presence.len() {
        let _ = write!(out, "{:>4}", format!("R{round}"));
    }
    let _ = writeln!(out);

    for wave in Wave::ALL {
        let _ = write!(out, "{:<7}", wave.as_str().to_uppercase());
        for row in &presence {
            let mark = if row[wave.index()] { "✓" } else { "·" };
            let _ = write!(out, "{:>4}", mark);
        }
        let _ = writeln!(out);
    }
    out
}

/// One horizontal bar per round, scaled to [0, 1].
pub fn render_consent_chart(timeline: &Timeline) -> String {
    let mut out = String::new();
    for (i, score) in timeline.consent_series().iter().enumerate() {
        let filled = (score.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
        let _ = writeln!(
            out,
            "R{:<3} {}{} {:.2}",
            i + 1,
            "█".repeat(filled),
            "░".repeat(BAR_WIDTH - filled),
            score
        );
    }
    out
}

pub fn render_gate_records(records: &[&GateRecord]) -> String {
    if records.is_empty() {
        return "No gate evaluations recorded yet.\n".to_string();
    }

    let mut out = String::new();
    for record in records {
        let _ = writeln!(
            out,
            "{} @ {}  intent={:.2} discordance={:.2} wave={} -> {}",
            record.operator,
            record.timestamp.to_rfc3339(),
            record.intent,
            record.discordance,
            record.wave,
            if record.passed { "passed" } else { "not passed" }
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimelineEntry;
    use crate::reading::evaluate;
    use chrono::Utc;

    fn timeline_of(inputs: Vec<Vec<&str>>) -> Timeline {
        let mut timeline = Timeline::new();
        for input in inputs {
            let result = evaluate(input.as_slice());
            timeline.append(TimelineEntry::from_reading(&result, Utc::now()));
        }
        timeline
    }

    #[test]
    fn reading_shows_metrics_waves_and_reasons() {
        let text = render_reading(&evaluate(&["แก่น", "ตกลง"]));
        assert!(text.contains(&format!("{:<16}{:.2}", "Intent", 1.0)));
        assert!(text.contains("Waves detected: THETA, GAMMA"));
        assert!(text.contains("Decision: Consent Granted"));
        assert!(text.contains("Explainability:"));
    }

    #[test]
    fn reading_without_reasons_omits_section() {
        let text = render_reading(&evaluate(&["hello there, this is a neutral sentence of text"]));
        assert!(!text.contains("Explainability"));
        assert!(text.contains("Waves detected: ALPHA"));
    }

    #[test]
    fn empty_timeline_has_hint() {
        assert!(render_timeline_table(&Timeline::new()).contains("No timeline data"));
    }

    #[test]
    fn table_lists_every_entry() {
        let timeline = timeline_of(vec![vec!["ตกลง"], vec!["maybe"]]);
        let table = render_timeline_table(&timeline);
        assert_eq!(table.lines().count(), 3);
        assert!(table.contains("Consent Denied"));
    }

    #[test]
    fn wave_grid_marks_presence() {
        let timeline = timeline_of(vec![
            vec!["แก่น", "ตกลง"],
            vec!["เหนื่อย อยากพัก หลับสักหน่อย ช่วงนี้ร่างกายล้ามาก"],
        ]);
        let grid = render_wave_grid(&timeline);
        let rows: Vec<&str> = grid.lines().collect();
        assert_eq!(rows.len(), 6);
        assert!(rows[0].contains("R1") && rows[0].contains("R2"));
        let theta = rows[3];
        assert!(theta.starts_with("THETA"));
        assert_eq!(theta.matches('✓').count(), 1);
        let delta = rows[5];
        assert!(delta.starts_with("DELTA"));
        assert_eq!(delta.matches('✓').count(), 1);
    }

    #[test]
    fn consent_chart_scales_bars() {
        let timeline = timeline_of(vec![vec!["แก่น", "ตกลง"], vec!["maybe"]]);
        let chart = render_consent_chart(&timeline);
        let rows: Vec<&str> = chart.lines().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].matches('█').count(), BAR_WIDTH);
        assert!(rows[0].ends_with("1.00"));
        // 0.279 * 20 = 5.58 -> 6
        assert_eq!(rows[1].matches('█').count(), 6);
    }
}
