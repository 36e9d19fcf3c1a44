use std::fmt;

use crate::{domain::ParameterName, storage::repository::StoreError};

/// Any failure to read the configured parameter. All causes end up in the
/// same response, the cause is kept for callers that need to tell them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupFailure {
    parameter_name: ParameterName,
    cause: StoreError,
}

impl LookupFailure {
    pub fn new(parameter_name: ParameterName, cause: StoreError) -> Self {
        Self {
            parameter_name,
            cause,
        }
    }

    pub fn parameter_name(&self) -> &ParameterName {
        &self.parameter_name
    }

    pub fn cause(&self) -> &StoreError {
        &self.cause
    }

    pub fn into_cause(self) -> StoreError {
        self.cause
    }
}

impl fmt::Display for LookupFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cause)
    }
}

impl std::error::Error for LookupFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}
