use std::sync::Mutex;
use std::time::Instant;

/// Wall-clock timer for the pipeline stages.
///
/// The whole run is a one-shot in-memory batch, so there is nothing to
/// sample beyond elapsed time per stage and overall.
pub struct StageTimer {
    start_time: Instant,
    last_mark: Mutex<Instant>,
    enabled: bool,
}

impl StageTimer {
    pub fn new(enabled: bool) -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_mark: Mutex::new(now),
            enabled,
        }
    }

    pub fn log_stage(&self, phase: &str) {
        if !self.enabled {
            return;
        }

        if let Ok(mut last) = self.last_mark.lock() {
            let now = Instant::now();
            tracing::info!(
                "📊 {} - stage: {:?}, total: {:?}",
                phase,
                now.duration_since(*last),
                now.duration_since(self.start_time)
            );
            *last = now;
        }
    }

    pub fn log_final_stats(&self) {
        if self.enabled {
            tracing::info!("📊 Final Stats - Total Time: {:?}", self.start_time.elapsed());
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for StageTimer {
    fn default() -> Self {
        Self::new(false)
    }
}
