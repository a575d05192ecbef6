use crate::models::{split_waves, TimelineEntry, Wave};

/// Append-only log of recorded readings. Entries are never edited or removed.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: TimelineEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One row per entry, one column per wave in canonical order.
    pub fn wave_presence(&self) -> Vec<[bool; 5]> {
        self.entries
            .iter()
            .map(|entry| {
                let mut row = [false; Wave::ALL.len()];
                for wave in split_waves(&entry.waves).unwrap_or_default() {
                    row[wave.index()] = true;
                }
                row
            })
            .collect()
    }

    pub fn consent_series(&self) -> Vec<f64> {
        self.entries.iter().map(|entry| entry.consent_score).collect()
    }
}
