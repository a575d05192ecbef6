pub mod operator;
pub mod reading;
pub mod timeline_entry;
pub mod wave;

pub use operator::{GateRecord, Operator};
pub use reading::{ConsentStatus, FeatureFlags, ReadingDiagnostics, ReadingResult, WaveScores};
pub use timeline_entry::TimelineEntry;
pub use wave::{join_waves, split_waves, Wave};
