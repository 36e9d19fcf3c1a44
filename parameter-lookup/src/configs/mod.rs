pub mod handler;
pub mod loaders;
pub mod store;

pub use handler::HandlerConfig;
pub use store::ParameterStoreConfig;

#[async_trait::async_trait]
pub trait Configs: Sized {
    async fn load() -> Result<Self, Box<dyn std::error::Error + Send + Sync>>;
}

#[derive(Debug, Clone)]
pub struct LookupConfig {
    pub handler_config: HandlerConfig,
    pub store_config: ParameterStoreConfig,
}

#[async_trait::async_trait]
impl Configs for LookupConfig {
    async fn load() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Ok(Self {
            handler_config: HandlerConfig::load().await?,
            store_config: ParameterStoreConfig::load().await?,
        })
    }
}
