use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::StageTimer;

pub struct CalendarEngine<P: Pipeline> {
    pipeline: P,
    timer: StageTimer,
}

impl<P: Pipeline> CalendarEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            timer: StageTimer::default(),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            timer: StageTimer::new(monitor_enabled),
        }
    }

    pub fn run(&self) -> Result<String> {
        tracing::info!("Reading roster...");
        let roster = self.pipeline.extract()?;
        tracing::info!("Loaded {} teams", roster.len());
        self.timer.log_stage("Extract");

        tracing::info!("Building schedule...");
        let result = self.pipeline.transform(roster)?;
        tracing::info!(
            "Packed {} slots into {} available positions",
            result.positioned.len(),
            result.capacity
        );
        self.timer.log_stage("Transform");

        tracing::info!("Writing calendar...");
        let output_path = self.pipeline.load(result)?;
        tracing::info!("Calendar saved to: {}", output_path);
        self.timer.log_stage("Load");

        self.timer.log_final_stats();
        Ok(output_path)
    }
}
