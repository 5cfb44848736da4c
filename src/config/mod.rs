pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CalendarError, Result};
use crate::utils::validation::{
    validate_date_order, validate_input_file, validate_output_target, Validate,
};
use chrono::NaiveDate;
use clap::Parser;
use toml_config::TomlConfig;

pub const DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Clone, Parser)]
#[command(name = "league-calendar")]
#[command(about = "Builds a round-robin tournament calendar from a team roster")]
pub struct CliArgs {
    /// Roster file: numbered table ('1. Team — City') or .csv
    pub input: Option<String>,

    /// First day of the calendar window, dd.mm.yyyy
    pub start_date: Option<String>,

    /// Last day of the calendar window (inclusive), dd.mm.yyyy
    pub end_date: Option<String>,

    /// Output file; refuses to overwrite an existing one
    pub output: Option<String>,

    /// Load run settings from a TOML file; positional arguments override it
    #[arg(long)]
    pub config: Option<String>,

    /// Write the schedule as JSON instead of the text calendar
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Log per-stage timing
    #[arg(long)]
    pub monitor: bool,
}

impl CliArgs {
    /// Merges CLI arguments over the optional TOML file and parses the
    /// typed run configuration.
    pub fn resolve(&self) -> Result<RunConfig> {
        let file = match &self.config {
            Some(path) => Some(TomlConfig::from_file(path)?),
            None => None,
        };

        let input_path = pick(
            "input",
            self.input.clone(),
            file.as_ref().map(|f| f.schedule.roster.clone()),
        )?;
        let start_raw = pick(
            "start date",
            self.start_date.clone(),
            file.as_ref().map(|f| f.schedule.start_date.clone()),
        )?;
        let end_raw = pick(
            "end date",
            self.end_date.clone(),
            file.as_ref().map(|f| f.schedule.end_date.clone()),
        )?;
        let output_path = pick(
            "output",
            self.output.clone(),
            file.as_ref().and_then(|f| f.output.as_ref()?.path.clone()),
        )?;

        Ok(RunConfig {
            input_path,
            output_path,
            start_date: parse_date("start date", &start_raw)?,
            end_date: parse_date("end date", &end_raw)?,
            json: self.json || file.as_ref().is_some_and(TomlConfig::json_output),
        })
    }
}

fn pick(field: &str, cli: Option<String>, file: Option<String>) -> Result<String> {
    cli.or(file).ok_or_else(|| CalendarError::ConfigError {
        message: format!("missing {} (pass it as an argument or via --config)", field),
    })
}

fn parse_date(field: &str, raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| CalendarError::ConfigError {
        message: format!("invalid {} {:?} (expected dd.mm.yyyy): {}", field, raw, e),
    })
}

/// Fully resolved run settings; everything downstream of `main` works
/// off this.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input_path: String,
    pub output_path: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub json: bool,
}

impl ConfigProvider for RunConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    fn json_output(&self) -> bool {
        self.json
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_date_order(self.start_date, self.end_date)?;
        validate_input_file("input file", &self.input_path)?;
        validate_output_target("output file", &self.output_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args(values: &[&str]) -> CliArgs {
        CliArgs::parse_from(std::iter::once("league-calendar").chain(values.iter().copied()))
    }

    #[test]
    fn resolves_positional_arguments() {
        let config = args(&["teams.txt", "01.05.2026", "15.05.2026", "out.txt"])
            .resolve()
            .unwrap();

        assert_eq!(config.input_path, "teams.txt");
        assert_eq!(config.output_path, "out.txt");
        assert_eq!(config.start_date, NaiveDate::from_ymd_opt(2026, 5, 1).unwrap());
        assert_eq!(config.end_date, NaiveDate::from_ymd_opt(2026, 5, 15).unwrap());
        assert!(!config.json);
    }

    #[test]
    fn rejects_missing_arguments() {
        let err = args(&["teams.txt"]).resolve().unwrap_err();
        assert!(err.to_string().contains("start date"));
    }

    #[test]
    fn rejects_bad_date() {
        let err = args(&["teams.txt", "2026-05-01", "15.05.2026", "out.txt"])
            .resolve()
            .unwrap_err();
        assert!(err.to_string().contains("start date"));
    }

    #[test]
    fn cli_arguments_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[schedule]\nroster = \"file-teams.txt\"\nstart_date = \"01.05.2026\"\nend_date = \"15.05.2026\"\n\n[output]\npath = \"file-out.txt\"\nformat = \"json\"\n"
        )
        .unwrap();

        let mut cli = args(&["cli-teams.txt"]);
        cli.config = Some(file.path().to_str().unwrap().to_string());
        let config = cli.resolve().unwrap();

        assert_eq!(config.input_path, "cli-teams.txt");
        assert_eq!(config.output_path, "file-out.txt");
        assert!(config.json);
    }

    #[test]
    fn inverted_range_fails_validation() {
        let config = RunConfig {
            input_path: "teams.txt".to_string(),
            output_path: "out.txt".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 5, 15).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
            json: false,
        };
        assert!(config.validate().is_err());
    }
}
