use thiserror::Error;

/// 評分邊界上的領域錯誤，必須阻止加入購物車
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Score {score} is outside the range [0, {max}]")]
    ScoreOutOfRange { score: f64, max: f64 },
}

#[derive(Error, Debug)]
pub enum EcoCartError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Product not found: {name}")]
    ProductNotFound { name: String },

    #[error("Cart is no longer available")]
    CartUnavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EcoCartError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EcoCartError::Domain(_) | EcoCartError::ProductNotFound { .. } => ErrorSeverity::Medium,
            EcoCartError::ConfigError { .. }
            | EcoCartError::InvalidConfigValueError { .. }
            | EcoCartError::MissingConfigError { .. }
            | EcoCartError::SerializationError(_) => ErrorSeverity::High,
            EcoCartError::IoError(_) | EcoCartError::CartUnavailable => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EcoCartError::Domain(DomainError::ScoreOutOfRange { score, max }) => format!(
                "This product has an invalid eco score ({}, expected 0 to {}); it was not added to the cart",
                score, max
            ),
            EcoCartError::IoError(e) => format!("Could not read a file: {}", e),
            EcoCartError::SerializationError(e) => format!("Could not produce output: {}", e),
            EcoCartError::ConfigError { message } => format!("The catalog is invalid: {}", message),
            EcoCartError::InvalidConfigValueError { field, reason, .. } => {
                format!("The catalog field '{}' is invalid: {}", field, reason)
            }
            EcoCartError::MissingConfigError { field } => {
                format!("The catalog is missing '{}'", field)
            }
            EcoCartError::ProductNotFound { name } => {
                format!("No product named '{}' in the catalog", name)
            }
            EcoCartError::CartUnavailable => "The cart stopped responding".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EcoCartError::Domain(_) => "Check the product's score in the catalog; it must be between 0 and 10",
            EcoCartError::IoError(_) => "Make sure the catalog path exists and is readable",
            EcoCartError::SerializationError(_) => "Retry without --json or report the issue",
            EcoCartError::ConfigError { .. }
            | EcoCartError::InvalidConfigValueError { .. }
            | EcoCartError::MissingConfigError { .. } => {
                "Fix the catalog TOML file and run the command again"
            }
            EcoCartError::ProductNotFound { .. } => {
                "Run `eco-cart products` to see the available product names"
            }
            EcoCartError::CartUnavailable => "Restart the application",
        }
    }
}

pub type Result<T> = std::result::Result<T, EcoCartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_is_transparent() {
        let err: EcoCartError = DomainError::ScoreOutOfRange {
            score: 11.0,
            max: 10.0,
        }
        .into();

        assert_eq!(err.to_string(), "Score 11 is outside the range [0, 10]");
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_severity_mapping() {
        let not_found = EcoCartError::ProductNotFound {
            name: "Kale".to_string(),
        };
        assert_eq!(not_found.severity(), ErrorSeverity::Medium);
        assert!(not_found.user_friendly_message().contains("Kale"));

        let missing = EcoCartError::MissingConfigError {
            field: "catalog.name".to_string(),
        };
        assert_eq!(missing.severity(), ErrorSeverity::High);
        assert_eq!(EcoCartError::CartUnavailable.severity(), ErrorSeverity::Critical);
    }
}
