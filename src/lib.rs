pub mod cli;
pub mod dashboard;
pub mod error;
pub mod gate;
pub mod lexicon;
pub mod models;
pub mod reading;
pub mod session;
pub mod settings;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

pub use error::QceError;
pub use gate::{GateConfig, GateEngine};
pub use models::{ConsentStatus, Operator, ReadingResult, TimelineEntry, Wave};
pub use reading::{evaluate as qce_read, evaluate_with, ReadOptions, ReadingConfig};
pub use session::{Session, Timeline};
pub use settings::{Settings, SettingsStore};

use cli::Cli;

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG, when set, overrides the verbosity flag.
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .try_init();

    log::info!("QCE starting up...");

    let store = match &cli.config {
        Some(path) => SettingsStore::new(path.clone())?,
        None => SettingsStore::defaults(),
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    runtime.block_on(cli::execute(cli.command, &store))
}
