//! Identifier Validator - Input Rules
//!
//! Two sets of rules apply to an identifier:
//! - the server only requires it to be present and non-blank;
//! - the client form additionally enforces a length range before any
//!   request is sent.
//!
//! Both trim surrounding whitespace first and hand back the trimmed value.
//!
//! ## Usage
//! ```rust
//! use admission_check::domain::validation::IdentifierValidator;
//!
//! let validator = IdentifierValidator::new();
//! assert_eq!(validator.require(Some("  abc123 ")).unwrap(), "abc123");
//! assert!(validator.check_length("ab").is_err());
//! ```

use crate::domain::admission::trim_text;
use crate::shared::protocol::messages;
use thiserror::Error;

/// Validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Identifier missing, not a string, or blank (server side)
    #[error("Identifier not specified")]
    MissingIdentifier,

    /// Request payload could not be decoded
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// Blank input in the client form
    #[error("Identifier input is empty")]
    EmptyInput,

    /// Shorter than the configured minimum
    #[error("Identifier too short: {actual} chars (min {min})")]
    TooShort { min: usize, actual: usize },

    /// Longer than the configured maximum
    #[error("Identifier too long: {actual} chars (max {max})")]
    TooLong { max: usize, actual: usize },
}

impl ValidationError {
    /// 返回给用户的固定消息，不包含内部细节
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::MissingIdentifier => messages::IDENTIFIER_MISSING.to_string(),
            ValidationError::MalformedRequest(_) => messages::MALFORMED_REQUEST.to_string(),
            ValidationError::EmptyInput => messages::INPUT_EMPTY.to_string(),
            ValidationError::TooShort { min, .. } => {
                format!("IDは{}文字以上で入力してください", min)
            }
            ValidationError::TooLong { max, .. } => {
                format!("IDは{}文字以内で入力してください", max)
            }
        }
    }
}

/// Identifier validation configuration
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Minimum length in characters (inclusive)
    pub min_length: usize,

    /// Maximum length in characters (inclusive)
    pub max_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_length: 3,
            max_length: 50,
        }
    }
}

/// Identifier validator
pub struct IdentifierValidator {
    config: ValidationConfig,
}

impl IdentifierValidator {
    /// Creates a new validator with default configuration
    pub fn new() -> Self {
        Self {
            config: ValidationConfig::default(),
        }
    }

    /// Creates a new validator with custom configuration
    pub fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Server-side rule: the identifier must be present and non-blank.
    ///
    /// # Returns
    /// * `Ok(String)` - the trimmed identifier
    /// * `Err(ValidationError::MissingIdentifier)` otherwise
    pub fn require(&self, raw: Option<&str>) -> Result<String, ValidationError> {
        match raw.map(trim_text) {
            Some(trimmed) if !trimmed.is_empty() => Ok(trimmed.to_string()),
            _ => Err(ValidationError::MissingIdentifier),
        }
    }

    /// Client-side rule: non-blank and within the configured length range.
    pub fn check_length(&self, raw: &str) -> Result<String, ValidationError> {
        let trimmed = trim_text(raw);
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyInput);
        }

        // 按字符数计算，日文ID不会被算成多个字节
        let actual = trimmed.chars().count();
        if actual < self.config.min_length {
            return Err(ValidationError::TooShort {
                min: self.config.min_length,
                actual,
            });
        }

        if actual > self.config.max_length {
            return Err(ValidationError::TooLong {
                max: self.config.max_length,
                actual,
            });
        }

        Ok(trimmed.to_string())
    }
}

impl Default for IdentifierValidator {
    fn default() -> Self {
        Self::new()
    }
}
