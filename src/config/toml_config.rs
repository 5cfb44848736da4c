use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Run configuration loaded from a TOML file, an alternative to passing
/// everything on the command line.
///
/// ```toml
/// [schedule]
/// roster = "teams.txt"
/// start_date = "01.05.2026"
/// end_date = "15.05.2026"
///
/// [output]
/// path = "calendar.txt"
/// format = "text"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub schedule: ScheduleSection,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSection {
    pub roster: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub path: Option<String>,
    /// "text" (default) or "json".
    pub format: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        Ok(config)
    }

    pub fn json_output(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .is_some_and(|f| f.eq_ignore_ascii_case("json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let content = r#"
            [schedule]
            roster = "teams.txt"
            start_date = "01.05.2026"
            end_date = "15.05.2026"

            [output]
            path = "calendar.txt"
            format = "json"
        "#;
        let config = TomlConfig::from_toml_str(content).unwrap();

        assert_eq!(config.schedule.roster, "teams.txt");
        assert_eq!(config.schedule.start_date, "01.05.2026");
        assert_eq!(config.schedule.end_date, "15.05.2026");
        assert_eq!(config.output.as_ref().unwrap().path.as_deref(), Some("calendar.txt"));
        assert!(config.json_output());
    }

    #[test]
    fn output_section_is_optional() {
        let content = r#"
            [schedule]
            roster = "teams.txt"
            start_date = "01.05.2026"
            end_date = "15.05.2026"
        "#;
        let config = TomlConfig::from_toml_str(content).unwrap();
        assert!(config.output.is_none());
        assert!(!config.json_output());
    }

    #[test]
    fn rejects_missing_schedule_section() {
        assert!(TomlConfig::from_toml_str("[output]\npath = \"x\"").is_err());
    }
}
