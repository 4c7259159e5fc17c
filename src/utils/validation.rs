use crate::utils::error::{RecordsError, Result};
use std::fmt::Display;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Rejects the empty string. Whitespace counts as content.
pub fn validate_non_empty(field_name: &str, value: &str, reason: &str) -> Result<()> {
    if value.is_empty() {
        return Err(RecordsError::invalid_argument(field_name, value, reason));
    }
    Ok(())
}

/// Inclusive range check. NaN never falls inside a range.
pub fn validate_range<T: PartialOrd + Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
    reason: &str,
) -> Result<()> {
    if !(min..=max).contains(&value) {
        return Err(RecordsError::invalid_argument(field_name, value, reason));
    }
    Ok(())
}

pub fn validate_at_least<T: PartialOrd + Display + Copy>(
    field_name: &str,
    value: T,
    min_value: T,
    reason: &str,
) -> Result<()> {
    if value < min_value {
        return Err(RecordsError::invalid_argument(field_name, value, reason));
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RecordsError::invalid_argument(
            field_name,
            path,
            "Path cannot be empty",
        ));
    }

    if path.contains('\0') {
        return Err(RecordsError::invalid_argument(
            field_name,
            path,
            "Path contains null bytes",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty() {
        assert!(validate_non_empty("name", "Daksh", "blank").is_ok());
        assert!(validate_non_empty("name", " ", "blank").is_ok());
        assert!(validate_non_empty("name", "", "blank").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("age", 1, 1, 120, "out of range").is_ok());
        assert!(validate_range("age", 120, 1, 120, "out of range").is_ok());
        assert!(validate_range("age", 0, 1, 120, "out of range").is_err());
        assert!(validate_range("age", 121, 1, 120, "out of range").is_err());
        assert!(validate_range("grade", f64::NAN, 0.0, 100.0, "out of range").is_err());
    }

    #[test]
    fn test_validate_at_least() {
        assert!(validate_at_least("credits", 3, 1, "too small").is_ok());
        assert!(validate_at_least("credits", 0, 1, "too small").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("scenario", "demo.toml").is_ok());
        assert!(validate_path("scenario", "").is_err());
        assert!(validate_path("scenario", "bad\0path").is_err());
    }
}
