use std::fmt;

use crate::domain::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    NotFound(String),
    AccessDenied(String),
    DecryptionFailed(String),
    MissingValue(String),
    ServiceFailed(String),
    ConnectionFailed(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Parameter not found: {}", msg),
            Self::AccessDenied(msg) => write!(f, "Access denied: {}", msg),
            Self::DecryptionFailed(msg) => write!(f, "Decryption failed: {}", msg),
            Self::MissingValue(msg) => write!(f, "Parameter has no value: {}", msg),
            Self::ServiceFailed(msg) => write!(f, "Service call failed: {}", msg),
            Self::ConnectionFailed(msg) => write!(f, "Connection failed: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Read-only access to a managed key-value parameter service.
#[async_trait::async_trait]
pub trait ParameterStore: Send + Sync {
    async fn get_parameter(
        &self,
        name: &ParameterName,
        with_decryption: bool,
    ) -> Result<Parameter, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let error = StoreError::NotFound("/custom/key".to_string());
        assert_eq!(error.to_string(), "Parameter not found: /custom/key");

        let error = StoreError::ConnectionFailed("dispatch failure".to_string());
        assert_eq!(error.to_string(), "Connection failed: dispatch failure");
    }
}
