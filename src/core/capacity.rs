//! Slot capacity of a date range, and the mapping from slot positions
//! back to calendar dates.
//!
//! The scheduling cycle is anchored on Friday: each week offers three
//! game days (Friday, Saturday, Sunday) with three kickoff times each.
//!
//! # Capacity formula
//!
//! 1. `head` = days from the start date to the next Friday (0 on a
//!    Friday).
//! 2. add `max(0, head - 4)`: the partial leading group when the start
//!    date falls inside the tail of a cycle.
//! 3. drop `head` days, add 3 per whole remaining week.
//! 4. add `min(3, tail)` for the leftover days.
//!
//! The exact accumulation, floor division included, is the contract;
//! rendered calendars depend on it slot for slot. Do not replace it
//! with a slots-per-week derivation.

use chrono::{Datelike, Duration, NaiveDate};

/// Kickoff times of one game day, indexed by `position % 3`.
pub const KICKOFF_TIMES: [&str; 3] = ["12:00", "15:00", "18:00"];

/// Kickoff times per game day.
pub const TIMES_PER_DAY: usize = 3;

/// Game days per weekly cycle (Friday, Saturday, Sunday).
const DAYS_PER_CYCLE: i64 = 3;

const CYCLE_LENGTH_DAYS: i64 = 7;

/// Days from `date` forward to the next Friday, 0 if `date` is one.
fn anchor_offset(date: NaiveDate) -> i64 {
    let wday = i64::from(date.weekday().num_days_from_sunday());
    (7 - (wday + 2)).rem_euclid(7)
}

/// First game day of the window: the first Friday on or after `start`.
pub fn first_game_day(start: NaiveDate) -> NaiveDate {
    start + Duration::days(anchor_offset(start))
}

/// Total count of schedulable slot-units in `[start, end]`. This is the
/// ceiling on how many slots the packer may create.
pub fn slot_capacity(start: NaiveDate, end: NaiveDate) -> usize {
    let mut days = (end - start).num_days();
    let mut total: i64 = 0;

    let head = anchor_offset(start);
    total += (head - 4).max(0);
    days -= head;

    let whole_weeks = days.div_euclid(CYCLE_LENGTH_DAYS);
    total += whole_weeks * DAYS_PER_CYCLE;

    let tail = days - whole_weeks * CYCLE_LENGTH_DAYS;
    total += tail.min(DAYS_PER_CYCLE);

    total.max(0) as usize
}

/// Resolves a slot position to its calendar date and kickoff index.
///
/// `day-group = position / 3`, `kickoff = position % 3`, then the day
/// group splits into whole cycles (7 calendar days each) plus the day
/// within the Friday..Sunday run. The renderer needs nothing beyond
/// this mapping.
pub fn position_date(start: NaiveDate, position: usize) -> (NaiveDate, usize) {
    let day_group = (position / TIMES_PER_DAY) as i64;
    let kickoff = position % TIMES_PER_DAY;
    let week = day_group / DAYS_PER_CYCLE;
    let day_in_cycle = day_group % DAYS_PER_CYCLE;
    let date = first_game_day(start) + Duration::days(week * CYCLE_LENGTH_DAYS + day_in_cycle);
    (date, kickoff)
}
