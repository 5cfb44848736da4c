pub mod capacity;
pub mod distribute;
pub mod engine;
pub mod fixtures;
pub mod packer;
pub mod pipeline;

pub use crate::domain::model::{Game, PositionedSlot, Roster, ScheduleResult, Slot, Team};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
