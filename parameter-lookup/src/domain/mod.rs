use serde_derive::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_PARAMETER_NAME: &str = "/example/parameter";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterName(String);

impl ParameterName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ParameterName {
    fn default() -> Self {
        Self::new(DEFAULT_PARAMETER_NAME)
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A parameter as returned by the store. The value is already decrypted when
/// the lookup asked for decryption.
#[derive(Clone, PartialEq, Eq)]
pub struct Parameter {
    name: ParameterName,
    value: String,
}

impl Parameter {
    pub fn new(name: ParameterName, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }

    pub fn name(&self) -> &ParameterName {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_value(self) -> String {
        self.value
    }
}

// Values may be SecureString secrets, keep them out of debug output.
impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parameter")
            .field("name", &self.name)
            .field("value", &"<redacted>")
            .finish()
    }
}
