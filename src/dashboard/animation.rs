use std::io::{self, Write};
use std::time::Duration;

use rand::Rng;
use tokio::time;

use crate::reading::ProgressPhase;

/// Default per-step delay; each step adds up to the same again as jitter.
pub const STEP: Duration = Duration::from_millis(10);

/// Cosmetic 100-step progress bar. Has no bearing on the reading itself.
pub async fn animate_progress<W: Write>(out: &mut W, step: Duration) -> io::Result<()> {
    let mut last_phase = None;

    for percent in 1..=100u8 {
        let jitter = rand::thread_rng().gen_range(0.0..1.0);
        time::sleep(step + step.mul_f64(jitter)).await;

        let phase = ProgressPhase::for_percent(percent - 1);
        let filled = usize::from(percent) / 5;
        write!(
            out,
            "\r[{}{}] {:>3}% {:<45}",
            "#".repeat(filled),
            " ".repeat(20 - filled),
            percent,
            phase.message()
        )?;
        if last_phase != Some(phase) {
            last_phase = Some(phase);
            out.flush()?;
        }
    }

    writeln!(out)?;
    out.flush()
}
