//! Roster file parsing.
//!
//! Two formats are accepted, chosen by file extension:
//!
//! - the numbered table used by the original league documents, one team
//!   per line: `1. Зенит — Санкт-Петербург` (em-dash separator);
//! - `.csv` with `team,city` headers.

use crate::domain::model::{Roster, Team};
use crate::utils::error::{CalendarError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_unique_names};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

pub fn parse_roster(path: &str, data: &[u8]) -> Result<Roster> {
    let is_csv = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let roster = if is_csv {
        parse_csv(data)?
    } else {
        parse_table(data)?
    };

    if roster.is_empty() {
        return Err(CalendarError::RosterError {
            message: format!("roster file is empty: {}", path),
        });
    }

    let names: Vec<String> = roster.teams.iter().map(|t| t.name.clone()).collect();
    validate_unique_names("roster", &names)?;
    for team in &roster.teams {
        validate_non_empty_string("team name", &team.name)?;
        validate_non_empty_string("city", &team.city)?;
    }

    Ok(roster)
}

fn parse_table(data: &[u8]) -> Result<Roster> {
    let text = std::str::from_utf8(data).map_err(|_| CalendarError::RosterError {
        message: "roster table is not valid UTF-8".to_string(),
    })?;

    let line_re = Regex::new(r"^\s*\d+\.\s*(.+?)\s*—\s*(.+?)\s*$").unwrap();
    let mut teams = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let caps = line_re
            .captures(line)
            .ok_or_else(|| CalendarError::RosterError {
                message: format!(
                    "line {} is not of the form 'N. Team — City': {:?}",
                    idx + 1,
                    line
                ),
            })?;
        teams.push(Team {
            name: caps[1].to_string(),
            city: caps[2].to_string(),
        });
    }

    Ok(Roster::new(teams))
}

fn parse_csv(data: &[u8]) -> Result<Roster> {
    #[derive(Debug, Deserialize)]
    struct Row {
        team: String,
        city: String,
    }

    let mut reader = csv::Reader::from_reader(data);
    let mut teams = Vec::new();

    for row in reader.deserialize() {
        let row: Row = row?;
        teams.push(Team {
            name: row.team.trim().to_string(),
            city: row.city.trim().to_string(),
        });
    }

    Ok(Roster::new(teams))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbered_table_in_order() {
        let table = "1. Зенит — Санкт-Петербург\n2. Спартак — Москва\n3. ЦСКА — Москва\n";
        let roster = parse_roster("teams.txt", table.as_bytes()).unwrap();

        assert_eq!(roster.len(), 3);
        assert_eq!(roster.teams[0].name, "Зенит");
        assert_eq!(roster.teams[0].city, "Санкт-Петербург");
        assert_eq!(roster.teams[2].name, "ЦСКА");
        assert_eq!(roster.teams[2].city, "Москва");
    }

    #[test]
    fn rejects_malformed_table_line() {
        let table = "1. Зенит — Санкт-Петербург\nСпартак Москва\n";
        let err = parse_roster("teams.txt", table.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn rejects_empty_roster() {
        assert!(parse_roster("teams.txt", b"").is_err());
    }

    #[test]
    fn rejects_duplicate_team_names() {
        let table = "1. Зенит — Санкт-Петербург\n2. Зенит — Москва\n";
        assert!(parse_roster("teams.txt", table.as_bytes()).is_err());
    }

    #[test]
    fn parses_csv_by_extension() {
        let csv = "team,city\nЗенит,Санкт-Петербург\nСпартак,Москва\n";
        let roster = parse_roster("teams.csv", csv.as_bytes()).unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.teams[1].name, "Спартак");
        assert_eq!(roster.teams[1].city, "Москва");
    }
}
