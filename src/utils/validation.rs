use crate::utils::error::{AocError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AocError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(AocError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(AocError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AocError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(AocError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Input file patterns must name the day exactly once and must not escape the input directory.
pub fn validate_day_pattern(field_name: &str, pattern: &str) -> Result<()> {
    validate_non_empty_string(field_name, pattern)?;

    let reason = if pattern.matches("{day}").count() != 1 {
        Some("Pattern must contain the {day} placeholder exactly once")
    } else if pattern.contains('/') || pattern.contains('\\') {
        Some("Pattern must be a file name, not a path")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(AocError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: pattern.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input_dir", "./input").is_ok());
        assert!(validate_path("input_dir", "").is_err());
        assert!(validate_path("input_dir", "in\0put").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("parallelism", 4, 1).is_ok());
        assert!(validate_positive_number("parallelism", 0, 1).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("days", 25u8, 1, 25).is_ok());
        assert!(validate_range("days", 0u8, 1, 25).is_err());
        assert!(validate_range("days", 26u8, 1, 25).is_err());
    }

    #[test]
    fn test_validate_day_pattern() {
        assert!(validate_day_pattern("input_pattern", "day{day}").is_ok());
        assert!(validate_day_pattern("input_pattern", "day{day}.txt").is_ok());
        assert!(validate_day_pattern("input_pattern", "input.txt").is_err());
        assert!(validate_day_pattern("input_pattern", "{day}-{day}").is_err());
        assert!(validate_day_pattern("input_pattern", "../day{day}").is_err());
        assert!(validate_day_pattern("input_pattern", "  ").is_err());
    }
}
