pub mod algorithm;
pub mod config;
pub mod features;
pub mod progress;
pub mod scoring;

pub use algorithm::{evaluate, evaluate_observed, evaluate_with, ReadOptions};
pub use config::ReadingConfig;
pub use progress::{LogProgress, NoProgress, ProgressObserver, ProgressPhase};
