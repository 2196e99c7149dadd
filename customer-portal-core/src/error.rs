//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum PortalError {
    /// Customer not found in the catalog
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    /// Two records share the same id
    #[error("Duplicate customer id: {0}")]
    DuplicateCustomerId(String),

    /// Page size must be at least one
    #[error("Invalid page size: {0}")]
    InvalidPageSize(usize),

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl PortalError {
    /// Whether it is expected behavior (bad input, bad data file, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::CustomerNotFound(_)
            | Self::DuplicateCustomerId(_)
            | Self::InvalidPageSize(_)
            | Self::ConfigError(_) => true,
            Self::StorageError(_) | Self::SerializationError(_) => false,
        }
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(e: serde_json::Error) -> Self {
        Self::SerializationError(e.to_string())
    }
}

/// Core layer Result type alias
pub type PortalResult<T> = std::result::Result<T, PortalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_errors_are_expected() {
        assert!(PortalError::CustomerNotFound("c99".into()).is_expected());
        assert!(PortalError::InvalidPageSize(0).is_expected());
        assert!(!PortalError::StorageError("disk full".into()).is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let json = serde_json::to_value(PortalError::CustomerNotFound("c7".into())).unwrap();
        assert_eq!(json["code"], "CustomerNotFound");
        assert_eq!(json["details"], "c7");
    }
}
