use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::gate::GateConfig;
use crate::reading::ReadingConfig;

/// Every tunable parameter, loaded once at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub reading: ReadingConfig,
    pub gate: GateConfig,
}

pub struct SettingsStore {
    path: Option<PathBuf>,
    data: Settings,
}

impl SettingsStore {
    /// Read settings from `path`, or fall back to defaults when the file does
    /// not exist. A file that exists but cannot be parsed is an error.
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse settings in {}", path.display()))?
        } else {
            log::info!("No settings at {}; using defaults", path.display());
            Settings::default()
        };

        Ok(Self {
            path: Some(path),
            data,
        })
    }

    pub fn defaults() -> Self {
        Self {
            path: None,
            data: Settings::default(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.data
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Write the current settings as pretty JSON to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let serialized = serde_json::to_string_pretty(&self.data)?;
        fs::write(path, serialized)
            .with_context(|| format!("Failed to write settings to {}", path.display()))
    }
}
