use std::path::Path;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::{QceError, Result},
    gate::GateEngine,
    models::{GateRecord, Operator, ReadingResult, TimelineEntry},
    reading::{self, LogProgress, ProgressObserver, ReadOptions, ReadingConfig},
    session::{export, Timeline},
    settings::Settings,
};
use crate::{log_debug, log_info, log_warn};

const ENABLE_LOGS: bool = true;

/// One interactive session. Owns its timeline and gate log; nothing is
/// shared between sessions.
pub struct Session {
    id: Uuid,
    operator: Option<Operator>,
    reading_config: ReadingConfig,
    gate: GateEngine,
    timeline: Timeline,
    gate_log: Vec<GateRecord>,
    last_reading: Option<ReadingResult>,
}

impl Session {
    pub fn new(operator: Option<Operator>, settings: &Settings) -> Self {
        let id = Uuid::new_v4();
        log_info!("Session {id} started");

        Self {
            id,
            operator,
            reading_config: settings.reading.clone(),
            gate: GateEngine::new(settings.gate.clone()),
            timeline: Timeline::new(),
            gate_log: Vec::new(),
            last_reading: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn operator(&self) -> Option<&Operator> {
        self.operator.as_ref()
    }

    pub fn set_operator(&mut self, operator: Operator) {
        self.operator = Some(operator);
    }

    /// Score `lines` and remember the result as the session's last reading.
    pub fn read<S: AsRef<str>>(&mut self, lines: &[S]) -> &ReadingResult {
        self.read_observed(lines, ReadOptions::default(), &mut LogProgress)
    }

    pub fn read_observed<S: AsRef<str>>(
        &mut self,
        lines: &[S],
        options: ReadOptions,
        observer: &mut dyn ProgressObserver,
    ) -> &ReadingResult {
        let result = reading::evaluate_observed(lines, &self.reading_config, options, observer);
        log_debug!(
            "Session {}: reading {} -> {}",
            self.id,
            result.input_hash,
            result.status.as_str()
        );
        self.last_reading.insert(result)
    }

    pub fn last_reading(&self) -> Option<&ReadingResult> {
        self.last_reading.as_ref()
    }

    /// Append `result` to the timeline. Requires an identified operator;
    /// a failed check leaves the session untouched.
    pub fn record(&mut self, result: &ReadingResult) -> Result<TimelineEntry> {
        self.require_identity()?;

        let entry = TimelineEntry::from_reading(result, Utc::now());
        self.timeline.append(entry.clone());
        log_info!(
            "Session {}: recorded {} ({}), timeline size {}",
            self.id,
            entry.input_hash,
            entry.status.as_str(),
            self.timeline.len()
        );
        Ok(entry)
    }

    pub fn record_last(&mut self) -> Result<TimelineEntry> {
        let result = self.last_reading.clone().ok_or(QceError::NoReading)?;
        self.record(&result)
    }

    /// Run the threshold gate and log the outcome against the operator.
    pub fn gate(&mut self, intent: f64, discordance: f64, wave: &str) -> Result<GateRecord> {
        let operator = self.require_identity()?.name.clone();
        let passed = self.gate.evaluate(intent, discordance, wave);

        let record = GateRecord {
            operator,
            timestamp: Utc::now(),
            intent,
            discordance,
            wave: wave.to_string(),
            passed,
        };
        self.gate_log.push(record.clone());
        log_info!("Session {}: gate on '{}' passed={}", self.id, record.wave, passed);
        Ok(record)
    }

    /// Up to `limit` gate records, newest first.
    pub fn recent_gate_records(&self, limit: usize) -> Vec<&GateRecord> {
        self.gate_log.iter().rev().take(limit).collect()
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn export_csv(&self) -> String {
        export::to_csv(self.timeline.entries())
    }

    pub fn export_to(&self, path: &Path) -> Result<usize> {
        let rows = export::write_csv(path, self.timeline.entries())?;
        log_info!("Session {}: exported {rows} rows to {}", self.id, path.display());
        Ok(rows)
    }

    fn require_identity(&self) -> Result<&Operator> {
        let operator = self
            .operator
            .as_ref()
            .ok_or(QceError::MissingIdentity { field: "name" })?;
        if let Err(err) = operator.validate() {
            log_warn!("Session {}: recording blocked: {err}", self.id);
            return Err(err);
        }
        Ok(operator)
    }
}
