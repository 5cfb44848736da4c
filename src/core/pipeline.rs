use crate::adapters::{render, roster};
use crate::core::{capacity, distribute, fixtures, packer};
use crate::domain::model::{Roster, ScheduleResult};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::Result;

/// One-shot scheduling pipeline: roster file in, calendar document out.
pub struct SchedulePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SchedulePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for SchedulePipeline<S, C> {
    fn extract(&self) -> Result<Roster> {
        let path = self.config.input_path();
        tracing::debug!("Reading roster from: {}", path);

        let data = self.storage.read_file(path)?;
        let roster = roster::parse_roster(path, &data)?;

        tracing::debug!("Roster holds {} teams", roster.len());
        Ok(roster)
    }

    fn transform(&self, roster: Roster) -> Result<ScheduleResult> {
        let start_date = self.config.start_date();
        let end_date = self.config.end_date();

        let games = fixtures::generate_games(&roster);
        let capacity = capacity::slot_capacity(start_date, end_date);
        tracing::debug!(
            "{} fixtures to place, {} slot-units between {} and {}",
            games.len(),
            capacity,
            start_date,
            end_date
        );

        let outcome = packer::pack(games, capacity);
        if !outcome.unplaced.is_empty() {
            // Overflow is not an error: surplus games just stay off the
            // calendar.
            tracing::warn!(
                "{} fixtures did not fit into the available {} slots and were left unscheduled",
                outcome.unplaced.len(),
                capacity
            );
        }

        let positioned = distribute::distribute(outcome.slots, capacity);

        Ok(ScheduleResult {
            start_date,
            capacity,
            positioned,
            unplaced: outcome.unplaced,
        })
    }

    fn load(&self, result: ScheduleResult) -> Result<String> {
        let output_path = self.config.output_path();

        let document = if self.config.json_output() {
            serde_json::to_string_pretty(&result)?
        } else {
            render::render_calendar(&result)
        };

        self.storage.write_file(output_path, document.as_bytes())?;
        Ok(output_path.to_string())
    }
}
