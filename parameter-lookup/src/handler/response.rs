use serde_derive::{Deserialize, Serialize};

use crate::{domain::Parameter, error::LookupFailure};

pub const STATUS_OK: u16 = 200;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

const SUCCESS_PREFIX: &str = "Parameter value: ";
const FAILURE_PREFIX: &str = "Error retrieving parameter: ";

/// HTTP-style envelope returned to the caller on every invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponseEnvelope {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl ResponseEnvelope {
    pub fn success(parameter: &Parameter) -> Self {
        Self {
            status_code: STATUS_OK,
            body: format!("{SUCCESS_PREFIX}{}", parameter.value()),
        }
    }

    pub fn failure(failure: &LookupFailure) -> Self {
        Self {
            status_code: STATUS_INTERNAL_ERROR,
            body: format!("{FAILURE_PREFIX}{failure}"),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code == STATUS_OK
    }
}

impl From<Result<Parameter, LookupFailure>> for ResponseEnvelope {
    fn from(result: Result<Parameter, LookupFailure>) -> Self {
        match result {
            Ok(parameter) => Self::success(&parameter),
            Err(failure) => Self::failure(&failure),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::ParameterName, storage::repository::StoreError};
    use serde_json::json;

    #[test]
    fn test_success_envelope_serializes_with_status_code_key() {
        let parameter = Parameter::new(ParameterName::default(), "abc123");
        let envelope = ResponseEnvelope::success(&parameter);

        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({ "statusCode": 200, "body": "Parameter value: abc123" })
        );
    }

    #[test]
    fn test_failure_envelope_carries_error_text() {
        let failure = LookupFailure::new(
            ParameterName::new("/custom/key"),
            StoreError::NotFound("/custom/key".to_string()),
        );
        let envelope = ResponseEnvelope::failure(&failure);

        assert_eq!(envelope.status_code, 500);
        assert_eq!(
            envelope.body,
            "Error retrieving parameter: Parameter not found: /custom/key"
        );
        assert!(!envelope.is_success());
    }

    #[test]
    fn test_empty_value_still_has_body() {
        let parameter = Parameter::new(ParameterName::default(), "");
        let envelope: ResponseEnvelope = Ok(parameter).into();

        assert!(envelope.is_success());
        assert_eq!(envelope.body, "Parameter value: ");
    }
}
