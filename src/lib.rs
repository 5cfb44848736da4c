pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::LocalStorage;
pub use crate::config::{CliArgs, RunConfig};
pub use crate::core::{engine::CalendarEngine, pipeline::SchedulePipeline};
pub use crate::domain::model::{Game, PositionedSlot, Roster, ScheduleResult, Slot, Team};
pub use crate::utils::error::{CalendarError, Result};
