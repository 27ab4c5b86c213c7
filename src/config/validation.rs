//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (partition count, attempts, timeouts)
//! - Check the backend URL parses and uses a supported scheme
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: EngineConfig → Result<(), Vec<ValidationError>>

use url::Url;

use crate::config::schema::EngineConfig;

/// A single semantic violation in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidBaseUrl(String),
    UnsupportedScheme(String),
    ZeroMaxParallel,
    ZeroSearchAttempts,
    ZeroTimeout(&'static str),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBaseUrl(reason) => {
                write!(f, "backend.base_url is not a valid URL: {}", reason)
            }
            ValidationError::UnsupportedScheme(scheme) => {
                write!(f, "backend.base_url scheme '{}' is not http or https", scheme)
            }
            ValidationError::ZeroMaxParallel => {
                write!(f, "query.max_parallel must be at least 1")
            }
            ValidationError::ZeroSearchAttempts => {
                write!(f, "query.search_attempts must be at least 1")
            }
            ValidationError::ZeroTimeout(field) => {
                write!(f, "backend.{} must be greater than 0", field)
            }
        }
    }
}

/// Validate a configuration, collecting every violation.
pub fn validate_config(config: &EngineConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.backend.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::UnsupportedScheme(url.scheme().to_string())),
        Err(e) => errors.push(ValidationError::InvalidBaseUrl(e.to_string())),
    }

    if config.query.max_parallel == 0 {
        errors.push(ValidationError::ZeroMaxParallel);
    }
    if config.query.search_attempts == 0 {
        errors.push(ValidationError::ZeroSearchAttempts);
    }
    if config.backend.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("request_timeout_secs"));
    }
    if config.backend.connect_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("connect_timeout_secs"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
