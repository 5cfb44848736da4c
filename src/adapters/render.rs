//! Plain-text calendar rendering.
//!
//! Positioned slots arrive ordered by position, so slots landing on the
//! same calendar date are consecutive; they are collected into a
//! three-kickoff day grid and flushed whenever the date changes. The
//! position-to-date mapping comes from the scheduling core; nothing
//! here knows about cycles or capacity.

use crate::core::capacity::{position_date, KICKOFF_TIMES, TIMES_PER_DAY};
use crate::domain::model::{Game, ScheduleResult, Slot};
use chrono::NaiveDate;

pub fn render_calendar(result: &ScheduleResult) -> String {
    let mut out = String::new();
    let mut current: Option<(NaiveDate, [Option<&Slot>; TIMES_PER_DAY])> = None;

    for positioned in &result.positioned {
        let (date, kickoff) = position_date(result.start_date, positioned.position);

        match &mut current {
            Some((day, grid)) if *day == date => {
                grid[kickoff] = Some(&positioned.slot);
            }
            _ => {
                if let Some((day, grid)) = current.take() {
                    write_day(&mut out, day, &grid);
                }
                let mut grid = [None; TIMES_PER_DAY];
                grid[kickoff] = Some(&positioned.slot);
                current = Some((date, grid));
            }
        }
    }

    if let Some((day, grid)) = current {
        write_day(&mut out, day, &grid);
    }

    out
}

fn write_day(out: &mut String, date: NaiveDate, grid: &[Option<&Slot>; TIMES_PER_DAY]) {
    out.push_str(&format!("{}\n", date.format("%A, %B %e %Y")));

    for (kickoff, slot) in grid.iter().enumerate() {
        let Some(slot) = slot else { continue };
        out.push_str(&format!("\t{}:\n", KICKOFF_TIMES[kickoff]));
        for game in slot.games() {
            out.push_str(&game_line(game));
        }
    }
}

fn game_line(game: &Game) -> String {
    format!(
        "\t\tкоманда \"{}\" играет с \"{}\" в городе {}\n",
        game.home, game.away, game.city
    )
}
