/*!
 * Error handling for NPI registry client operations
 *
 * Provides detailed error types with context, suggestions, and recovery guidance.
 */

use thiserror::Error;

/// NPI registry library result type
pub type Result<T> = std::result::Result<T, NpiRegistryError>;

/// Error types with context and suggestions
#[derive(Error, Debug)]
pub enum NpiRegistryError {
    /// Search-parameter validation errors with the offending field
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
        value: Option<String>,
    },

    /// The registry answered with a non-success HTTP status
    #[error("Registry request failed with HTTP status {status}")]
    Http { status: u16, url: Option<String> },

    /// Transport-level failures (connection refused, DNS, timeout)
    #[error("Unexpected error: {message}")]
    Unexpected {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body did not match the registry's documented JSON shape
    #[error("Failed to decode registry response: {message}")]
    ResponseDecode {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Invalid enumeration type code with valid options
    #[error("Invalid entity type code '{code}'")]
    InvalidEntityType {
        code: String,
        valid_options: Vec<String>,
    },

    /// Invalid NPI with format guidance
    #[error("Invalid NPI '{npi}': {reason}")]
    InvalidNpi {
        npi: String,
        reason: String,
        suggestion: String,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        suggestion: Option<String>,
    },
}

impl NpiRegistryError {
    /// Create a validation error for a result limit outside the allowed range
    pub fn limit_out_of_range(value: u32) -> Self {
        Self::Validation {
            message: format!(
                "limit must be between {} and {}, got {}",
                crate::constants::MIN_RESULT_LIMIT,
                crate::constants::MAX_RESULT_LIMIT,
                value
            ),
            field: Some("limit".to_string()),
            value: Some(value.to_string()),
        }
    }

    /// Create an invalid NPI error with validation details
    pub fn invalid_npi(npi: &str) -> Self {
        let (reason, suggestion) = if npi.is_empty() {
            (
                "NPI cannot be empty".to_string(),
                "Provide a valid 10-digit NPI number".to_string(),
            )
        } else if npi.len() != 10 {
            (
                format!("NPI must be exactly 10 digits, found {}", npi.len()),
                "Ensure the NPI is exactly 10 digits without spaces or special characters"
                    .to_string(),
            )
        } else if !npi.chars().all(|c| c.is_ascii_digit()) {
            (
                "NPI must contain only digits".to_string(),
                "Remove any non-numeric characters from the NPI".to_string(),
            )
        } else {
            (
                "Invalid NPI format".to_string(),
                "Verify the NPI number is correct".to_string(),
            )
        };

        Self::InvalidNpi {
            npi: npi.to_string(),
            reason,
            suggestion,
        }
    }

    /// Create an invalid entity type error with valid options
    pub fn invalid_entity_type(code: &str) -> Self {
        Self::InvalidEntityType {
            code: code.to_string(),
            valid_options: vec![
                "NPI-1 (Individual)".to_string(),
                "NPI-2 (Organization)".to_string(),
            ],
        }
    }

    /// Create an HTTP-status error carrying the requested URL for diagnostics
    pub fn http_status(status: u16, url: impl Into<String>) -> Self {
        Self::Http {
            status,
            url: Some(url.into()),
        }
    }

    /// Wrap a transport-level failure, preserving the original cause
    pub fn unexpected(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Unexpected {
            message: message.into(),
            source,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidNpi { suggestion, .. } => {
                format!("{}\n\nSuggestion: {}", self, suggestion)
            }
            Self::InvalidEntityType { valid_options, .. } => {
                format!("{}\n\nValid options: {}", self, valid_options.join(", "))
            }
            Self::Http { url: Some(url), .. } => {
                format!("{}\n\nRequested URL: {}", self, url)
            }
            Self::Configuration {
                suggestion: Some(sug),
                ..
            } => {
                format!("{}\n\nSuggestion: {}", self, sug)
            }
            _ => self.to_string(),
        }
    }
}

impl From<serde_json::Error> for NpiRegistryError {
    fn from(err: serde_json::Error) -> Self {
        let message = err.to_string();
        Self::ResponseDecode {
            message,
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_error_names_the_field() {
        let err = NpiRegistryError::limit_out_of_range(201);
        match &err {
            NpiRegistryError::Validation { field, value, .. } => {
                assert_eq!(field.as_deref(), Some("limit"));
                assert_eq!(value.as_deref(), Some("201"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(err.to_string().contains("201"));
    }

    #[test]
    fn entity_type_error_lists_valid_options() {
        let err = NpiRegistryError::invalid_entity_type("NPI-3");
        let message = err.user_message();
        assert!(message.contains("NPI-3"));
        assert!(message.contains("NPI-1 (Individual)"));
        assert!(message.contains("NPI-2 (Organization)"));
    }
}
