use crate::domain::model::{Roster, ScheduleResult};
use crate::utils::error::Result;
use chrono::NaiveDate;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn start_date(&self) -> NaiveDate;
    fn end_date(&self) -> NaiveDate;
    fn json_output(&self) -> bool;
}

/// The whole run, in three synchronous stages: read the roster, build
/// the schedule, write the rendered calendar.
pub trait Pipeline {
    fn extract(&self) -> Result<Roster>;
    fn transform(&self, roster: Roster) -> Result<ScheduleResult>;
    fn load(&self, result: ScheduleResult) -> Result<String>;
}
