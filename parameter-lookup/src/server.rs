use std::sync::Arc;

use dotenvy::dotenv;
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use crate::{
    configs::{Configs, LookupConfig},
    handler::{ParameterLookupHandler, ResponseEnvelope},
    storage::{adapters::ssm_storage::SsmParameterStore, repository::ParameterStore},
};

fn setup_logging() {
    let _ = tracing_subscriber::fmt()
        // reads RUST_LOG
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_level(true)
        // CloudWatch stamps every line on ingestion
        .without_time()
        .try_init();
}

async fn build_store(config: &LookupConfig) -> Result<Arc<dyn ParameterStore>, Error> {
    let store = SsmParameterStore::new(config.store_config.clone())
        .await
        .map_err(|e| Error::from(e.to_string()))?;

    Ok(Arc::new(store))
}

/// Serves invocations with an already built store until the runtime stops.
pub async fn serve(handler: ParameterLookupHandler<dyn ParameterStore>) -> Result<(), Error> {
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let handler = handler.clone();
        async move {
            let (payload, context) = event.into_parts();
            debug!(request_id = %context.request_id, "Invocation received");
            Ok::<ResponseEnvelope, Error>(handler.handle(payload, context).await)
        }
    }))
    .await
}

pub async fn start() -> Result<(), Error> {
    // resources section
    dotenv().ok();

    setup_logging();

    let config = match LookupConfig::load().await {
        Ok(c) => c,
        Err(e) => {
            error!(
                "Failed to load configs. End of work. Original error is: {}",
                e
            );
            return Err(e);
        }
    };
    debug!("CONFIGS: {:?}", &config);

    let store = match build_store(&config).await {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to initialize parameter store client: {}", e);
            return Err(e);
        }
    };

    info!(
        "Parameter lookup function is starting, configured parameter is {}",
        config.handler_config.parameter_name
    );

    serve(ParameterLookupHandler::new(store)).await
}
