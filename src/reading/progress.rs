//! Progress reporting for a reading. Purely informational: observers see the
//! phases as they pass but cannot influence the result.

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressPhase {
    Scanning,
    Extracting,
    Mapping,
    Finalizing,
}

impl ProgressPhase {
    pub const ALL: [ProgressPhase; 4] = [
        ProgressPhase::Scanning,
        ProgressPhase::Extracting,
        ProgressPhase::Mapping,
        ProgressPhase::Finalizing,
    ];

    /// Percentage at which the phase begins.
    pub fn start_percent(&self) -> u8 {
        match self {
            ProgressPhase::Scanning => 0,
            ProgressPhase::Extracting => 25,
            ProgressPhase::Mapping => 55,
            ProgressPhase::Finalizing => 85,
        }
    }

    pub fn for_percent(percent: u8) -> Self {
        match percent {
            0..=24 => ProgressPhase::Scanning,
            25..=54 => ProgressPhase::Extracting,
            55..=84 => ProgressPhase::Mapping,
            _ => ProgressPhase::Finalizing,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ProgressPhase::Scanning => "Scanning conversational cues...",
            ProgressPhase::Extracting => "Extracting intent & discordance signals...",
            ProgressPhase::Mapping => "Mapping wave harmonics...",
            ProgressPhase::Finalizing => "Finalizing consent evaluation...",
        }
    }
}

pub trait ProgressObserver {
    fn on_phase(&mut self, phase: ProgressPhase, percent: u8);

    fn on_complete(&mut self) {}
}

/// Observer that ignores everything.
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_phase(&mut self, _phase: ProgressPhase, _percent: u8) {}
}

/// Observer that emits debug logs per phase.
pub struct LogProgress;

impl ProgressObserver for LogProgress {
    fn on_phase(&mut self, phase: ProgressPhase, percent: u8) {
        debug!("[{percent:>3}%] {}", phase.message());
    }

    fn on_complete(&mut self) {
        debug!("[100%] Reading complete");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_maps_to_phase_boundaries() {
        assert_eq!(ProgressPhase::for_percent(0), ProgressPhase::Scanning);
        assert_eq!(ProgressPhase::for_percent(24), ProgressPhase::Scanning);
        assert_eq!(ProgressPhase::for_percent(25), ProgressPhase::Extracting);
        assert_eq!(ProgressPhase::for_percent(54), ProgressPhase::Extracting);
        assert_eq!(ProgressPhase::for_percent(55), ProgressPhase::Mapping);
        assert_eq!(ProgressPhase::for_percent(85), ProgressPhase::Finalizing);
        assert_eq!(ProgressPhase::for_percent(100), ProgressPhase::Finalizing);
    }

    #[test]
    fn start_percent_round_trips() {
        for phase in ProgressPhase::ALL {
            assert_eq!(ProgressPhase::for_percent(phase.start_percent()), phase);
        }
    }
}
