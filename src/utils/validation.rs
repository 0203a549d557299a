use crate::utils::error::{EcoCartError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(EcoCartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EcoCartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EcoCartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// NaN 不在任何範圍內
pub fn validate_range(field_name: &str, value: f64, min: f64, max: f64) -> Result<()> {
    if !(min..=max).contains(&value) {
        return Err(EcoCartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(EcoCartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    Ok(())
}

/// 名稱區分大小寫，完全相同才算重複
pub fn validate_unique_names<'a, I>(field_name: &str, names: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(EcoCartError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: name.to_string(),
                reason: "Duplicate name".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("catalog", "./catalog.toml").is_ok());
        assert!(validate_path("catalog", "").is_err());
        assert!(validate_path("catalog", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("products.score", 0.0, 0.0, 10.0).is_ok());
        assert!(validate_range("products.score", 10.0, 0.0, 10.0).is_ok());
        assert!(validate_range("products.score", 10.5, 0.0, 10.0).is_err());
        assert!(validate_range("products.score", -0.1, 0.0, 10.0).is_err());
        assert!(validate_range("products.score", f64::NAN, 0.0, 10.0).is_err());
    }

    #[test]
    fn test_validate_unique_names_is_case_sensitive() {
        assert!(validate_unique_names("products.name", ["Tofu", "tofu"]).is_ok());
        assert!(validate_unique_names("products.name", ["Tofu", "Cashews", "Tofu"]).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("catalog.name", "Grocery").is_ok());
        assert!(validate_non_empty_string("catalog.name", "   ").is_err());
    }
}
