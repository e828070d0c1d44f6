use crate::utils::error::{Result, ScannerError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Returns true when `candidate` parses as an absolute URL with a non-empty
/// scheme and host. Malformed input is simply invalid.
pub fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => !url.scheme().is_empty() && url.host_str().is_some_and(|host| !host.is_empty()),
        Err(e) => {
            tracing::debug!("Rejected candidate URL {:?}: {}", candidate, e);
            false
        }
    }
}

/// Same check as [`is_valid_url`], surfaced as an error for callers that propagate.
pub fn validate_url(candidate: &str) -> Result<()> {
    if is_valid_url(candidate) {
        Ok(())
    } else {
        Err(ScannerError::InvalidUrl {
            candidate: candidate.to_string(),
        })
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(ScannerError::ConfigError {
            message: format!("{} must be at least {} (got {})", field_name, min_value, value),
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
        return Err(ScannerError::ConfigError {
            message: format!("{} must be between {} and {} (got {})", field_name, min, max, value),
        });
    }
    Ok(())
}
