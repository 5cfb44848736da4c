use crate::utils::error::{CalendarError, Result};
use chrono::NaiveDate;
use std::collections::HashSet;
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CalendarError::ValidationError {
            message: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

pub fn validate_date_order(start: NaiveDate, end: NaiveDate) -> Result<()> {
    if start > end {
        return Err(CalendarError::ValidationError {
            message: format!("start date {} is after end date {}", start, end),
        });
    }
    Ok(())
}

pub fn validate_input_file(field_name: &str, path: &str) -> Result<()> {
    validate_non_empty_string(field_name, path)?;
    if !Path::new(path).is_file() {
        return Err(CalendarError::ValidationError {
            message: format!("{} does not exist: {}", field_name, path),
        });
    }
    Ok(())
}

/// Refuses to clobber an existing file; the tool never overwrites output.
pub fn validate_output_target(field_name: &str, path: &str) -> Result<()> {
    validate_non_empty_string(field_name, path)?;
    if Path::new(path).exists() {
        return Err(CalendarError::ValidationError {
            message: format!("{} already exists: {}", field_name, path),
        });
    }
    Ok(())
}

pub fn validate_unique_names(field_name: &str, names: &[String]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(CalendarError::ValidationError {
                message: format!("{} contains duplicate entry: {}", field_name, name),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("team", "Зенит").is_ok());
        assert!(validate_non_empty_string("team", "").is_err());
        assert!(validate_non_empty_string("team", "   ").is_err());
    }

    #[test]
    fn test_validate_date_order() {
        let a = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
        let b = NaiveDate::from_ymd_opt(2026, 5, 15).unwrap();
        assert!(validate_date_order(a, b).is_ok());
        assert!(validate_date_order(a, a).is_ok());
        assert!(validate_date_order(b, a).is_err());
    }

    #[test]
    fn test_validate_unique_names() {
        let unique = vec!["Зенит".to_string(), "Спартак".to_string()];
        assert!(validate_unique_names("teams", &unique).is_ok());

        let dup = vec!["Зенит".to_string(), "Зенит".to_string()];
        assert!(validate_unique_names("teams", &dup).is_err());
    }
}
