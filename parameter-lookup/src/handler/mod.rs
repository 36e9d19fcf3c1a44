use std::{fmt, sync::Arc};

use lambda_runtime::Context;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    configs::HandlerConfig,
    domain::Parameter,
    error::LookupFailure,
    storage::repository::ParameterStore,
};

pub mod response;

pub use response::ResponseEnvelope;

/// Reads the configured parameter from the injected store and wraps the
/// outcome in a [`ResponseEnvelope`]. Never fails.
pub struct ParameterLookupHandler<S>
where
    S: ParameterStore + ?Sized,
{
    store: Arc<S>,
}

impl<S> ParameterLookupHandler<S>
where
    S: ParameterStore + ?Sized,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Entry point for one invocation. The event and context are not inspected.
    pub async fn handle(&self, _event: Value, _context: Context) -> ResponseEnvelope {
        self.respond(&HandlerConfig::from_env()).await
    }

    pub async fn respond(&self, config: &HandlerConfig) -> ResponseEnvelope {
        let result = self.lookup(config).await;
        if let Err(failure) = &result {
            warn!(
                parameter_name = %failure.parameter_name(),
                "Parameter lookup failed: {}", failure
            );
        }
        result.into()
    }

    pub async fn lookup(&self, config: &HandlerConfig) -> Result<Parameter, LookupFailure> {
        debug!(parameter_name = %config.parameter_name, "Looking up parameter");

        self.store
            .get_parameter(&config.parameter_name, config.with_decryption)
            .await
            .map_err(|cause| LookupFailure::new(config.parameter_name.clone(), cause))
    }
}

impl<S> Clone for ParameterLookupHandler<S>
where
    S: ParameterStore + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> fmt::Debug for ParameterLookupHandler<S>
where
    S: ParameterStore + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterLookupHandler").finish_non_exhaustive()
    }
}
