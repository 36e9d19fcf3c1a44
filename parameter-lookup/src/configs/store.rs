use super::{
    Configs,
    loaders::environment::{first_env, optional_env},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterStoreConfig {
    pub region: Option<String>,
    pub profile: Option<String>,
    pub endpoint_url: Option<String>,
}

#[async_trait::async_trait]
impl Configs for ParameterStoreConfig {
    async fn load() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Ok(ParameterStoreConfig {
            region: optional_env("AWS_REGION"),
            profile: optional_env("AWS_PROFILE"),
            endpoint_url: first_env(&["AWS_ENDPOINT", "SSM_ENDPOINT"]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_store_env() {
        unsafe {
            env::remove_var("AWS_REGION");
            env::remove_var("AWS_PROFILE");
            env::remove_var("AWS_ENDPOINT");
            env::remove_var("SSM_ENDPOINT");
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_load_without_overrides() {
        clear_store_env();

        let config = ParameterStoreConfig::load().await.unwrap();

        assert_eq!(config, ParameterStoreConfig::default());
    }

    #[tokio::test]
    #[serial]
    async fn test_load_with_overrides() {
        clear_store_env();
        unsafe {
            env::set_var("AWS_REGION", "eu-west-1");
            env::set_var("SSM_ENDPOINT", "http://localhost:4566");
        }

        let config = ParameterStoreConfig::load().await.unwrap();

        assert_eq!(config.region.as_deref(), Some("eu-west-1"));
        assert_eq!(config.profile, None);
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:4566"));

        clear_store_env();
    }
}
