//! CSV export of the timeline and parsing it back.
//!
//! Columns: timestamp, input_hash, intent, discordance, consent_score,
//! waves (pipe-joined), status. Fields are quoted only when they contain a
//! comma, a quote, or a line break.

use std::{fs, path::Path};

use chrono::{DateTime, Utc};

use crate::error::{QceError, Result};
use crate::models::{split_waves, ConsentStatus, TimelineEntry};

pub const CSV_HEADER: [&str; 7] = [
    "timestamp",
    "input_hash",
    "intent",
    "discordance",
    "consent_score",
    "waves",
    "status",
];

pub fn to_csv(entries: &[TimelineEntry]) -> String {
    let mut out = String::new();
    push_row(&mut out, CSV_HEADER.iter().map(|h| h.to_string()));
    for entry in entries {
        push_row(
            &mut out,
            [
                entry.timestamp.to_rfc3339(),
                entry.input_hash.clone(),
                entry.intent.to_string(),
                entry.discordance.to_string(),
                entry.consent_score.to_string(),
                entry.waves.clone(),
                entry.status.as_str().to_string(),
            ]
            .into_iter(),
        );
    }
    out
}

/// Write the export to `path`, returning the number of data rows.
pub fn write_csv(path: &Path, entries: &[TimelineEntry]) -> Result<usize> {
    fs::write(path, to_csv(entries))?;
    Ok(entries.len())
}

pub fn parse_csv(input: &str) -> Result<Vec<TimelineEntry>> {
    let records = split_records(input)?;
    let mut records = records.into_iter();

    match records.next() {
        Some((_, header)) if header == CSV_HEADER => {}
        Some((line, header)) => {
            return Err(QceError::InvalidCsv {
                line,
                reason: format!("unexpected header {header:?}"),
            })
        }
        None => {
            return Err(QceError::InvalidCsv {
                line: 1,
                reason: "missing header".into(),
            })
        }
    }

    records
        .map(|(line, fields)| parse_entry(line, &fields))
        .collect()
}

fn parse_entry(line: usize, fields: &[String]) -> Result<TimelineEntry> {
    let invalid = |reason: String| QceError::InvalidCsv { line, reason };

    if fields.len() != CSV_HEADER.len() {
        return Err(invalid(format!(
            "expected {} fields, found {}",
            CSV_HEADER.len(),
            fields.len()
        )));
    }

    let timestamp = parse_datetime(&fields[0]).map_err(&invalid)?;
    let intent = parse_score(&fields[2], "intent").map_err(&invalid)?;
    let discordance = parse_score(&fields[3], "discordance").map_err(&invalid)?;
    let consent_score = parse_score(&fields[4], "consent_score").map_err(&invalid)?;
    // Validate, but keep the pipe-joined text as written.
    split_waves(&fields[5]).map_err(|err| invalid(err.to_string()))?;
    let status = ConsentStatus::parse(&fields[6]).map_err(|err| invalid(err.to_string()))?;

    Ok(TimelineEntry {
        timestamp,
        input_hash: fields[1].clone(),
        intent,
        discordance,
        consent_score,
        waves: fields[5].clone(),
        status,
    })
}

fn parse_datetime(value: &str) -> std::result::Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|err| format!("invalid timestamp '{value}': {err}"))
}

fn parse_score(value: &str, field: &str) -> std::result::Result<f64, String> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("invalid {field} '{value}': {err}"))
}

fn push_row(out: &mut String, fields: impl Iterator<Item = String>) {
    let row = fields
        .map(|field| escape_field(&field))
        .collect::<Vec<_>>()
        .join(",");
    out.push_str(&row);
    out.push('\n');
}

fn escape_field(field: &str) -> String {
    if field.contains(&[',', '"', '\n', '\r'][..]) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Split CSV text into records of fields, tagged with the 1-based line the
/// record starts on. Blank lines are skipped.
fn split_records(input: &str) -> Result<Vec<(usize, Vec<String>)>> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut record_line = 1;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if field.is_empty() => in_quotes = true,
            ',' => fields.push(std::mem::take(&mut field)),
            '\r' => {}
            '\n' => {
                fields.push(std::mem::take(&mut field));
                if !(fields.len() == 1 && fields[0].is_empty()) {
                    records.push((record_line, std::mem::take(&mut fields)));
                }
                fields.clear();
                line += 1;
                record_line = line;
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(QceError::InvalidCsv {
            line: record_line,
            reason: "unterminated quoted field".into(),
        });
    }

    if !field.is_empty() || !fields.is_empty() {
        fields.push(field);
        records.push((record_line, fields));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> TimelineEntry {
        TimelineEntry {
            timestamp: Utc.with_ymd_and_hms(2025, 3, 1, 8, 30, 0).unwrap(),
            input_hash: "bbf77b4c45552ade".into(),
            intent: 0.88,
            discordance: 0.15,
            consent_score: 0.882,
            waves: "gamma".into(),
            status: ConsentStatus::Granted,
        }
    }

    #[test]
    fn export_has_header_and_one_row_per_entry() {
        let csv = to_csv(&[sample(), sample()]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "timestamp,input_hash,intent,discordance,consent_score,waves,status"
        );
        assert_eq!(
            lines[1],
            "2025-03-01T08:30:00+00:00,bbf77b4c45552ade,0.88,0.15,0.882,gamma,Granted"
        );
    }

    #[test]
    fn parse_back_preserves_entries() {
        let mut second = sample();
        second.waves = "alpha|theta|gamma".into();
        second.status = ConsentStatus::NeedsClarification;
        second.consent_score = 0.64;
        let entries = vec![sample(), second];

        let parsed = parse_csv(&to_csv(&entries)).unwrap();
        assert_eq!(parsed, entries);
    }

    #[test]
    fn accepts_crlf_and_status_labels() {
        let csv = "timestamp,input_hash,intent,discordance,consent_score,waves,status\r\n\
                   2025-03-01T08:30:00Z,95d7e76ba786d81a,0.23,0.75,0.294,alpha,Consent Denied\r\n";
        let parsed = parse_csv(csv).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].status, ConsentStatus::Denied);
        assert_eq!(parsed[0].consent_score, 0.294);
    }

    #[test]
    fn quoted_fields_round_trip() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");

        let records = split_records("a,\"b,c\",\"d\"\"e\"\n\"multi\nline\",x\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].1, vec!["a", "b,c", "d\"e"]);
        assert_eq!(records[1], (2, vec!["multi\nline".to_string(), "x".to_string()]));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(parse_csv(""), Err(QceError::InvalidCsv { line: 1, .. })));
        assert!(parse_csv("a,b,c\n").is_err());

        let header = CSV_HEADER.join(",");
        let short_row = format!("{header}\n2025-03-01T08:30:00Z,abc,0.5\n");
        assert!(matches!(
            parse_csv(&short_row),
            Err(QceError::InvalidCsv { line: 2, .. })
        ));

        let bad_wave = format!("{header}\n2025-03-01T08:30:00Z,abc,0.5,0.3,0.4,omega,Denied\n");
        assert!(parse_csv(&bad_wave).is_err());

        assert!(split_records("\"open").is_err());
    }

    #[test]
    fn header_only_parses_to_empty() {
        let csv = to_csv(&[]);
        assert!(parse_csv(&csv).unwrap().is_empty());
    }
}
