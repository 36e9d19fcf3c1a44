use crate::domain::{DEFAULT_PARAMETER_NAME, ParameterName};

use super::{Configs, loaders::environment::env_or};

pub const PARAMETER_NAME_ENV: &str = "PARAMETER_NAME";

/// Per-invocation settings. Re-read on every invocation so the key name
/// never outlives a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerConfig {
    pub parameter_name: ParameterName,
    pub with_decryption: bool,
}

impl HandlerConfig {
    pub fn from_env() -> Self {
        Self {
            parameter_name: ParameterName::new(env_or(
                PARAMETER_NAME_ENV,
                DEFAULT_PARAMETER_NAME,
            )),
            with_decryption: true,
        }
    }
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            parameter_name: ParameterName::default(),
            with_decryption: true,
        }
    }
}

#[async_trait::async_trait]
impl Configs for HandlerConfig {
    async fn load() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Ok(Self::from_env())
    }
}
