use anyhow::{Result as AnyResult, anyhow};
use aws_config::BehaviorVersion;
use aws_sdk_ssm::{
    Client,
    error::{DisplayErrorContext, ProvideErrorMetadata, SdkError},
};
use aws_types::region::Region;
use tracing::debug;

use crate::{
    configs::ParameterStoreConfig,
    domain::{Parameter, ParameterName},
    storage::repository::{ParameterStore, StoreError},
};

/// AWS Systems Manager Parameter Store adapter.
#[derive(Clone)]
pub struct SsmParameterStore {
    client: Client,
}

impl SsmParameterStore {
    pub async fn new(config: ParameterStoreConfig) -> AnyResult<Self> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(profile) = &config.profile {
            loader = loader.profile_name(profile);
        }

        if let Some(region) = config.region.clone() {
            loader = loader.region(Region::new(region));
        }

        if let Some(endpoint_url) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url.clone());
        }

        let shared_config = loader.load().await;
        let region = ensure_region(shared_config.region())?;
        debug!("SSM client configured for region {}", region);

        Ok(Self::with_client(Client::new(&shared_config)))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl std::fmt::Debug for SsmParameterStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SsmParameterStore").finish_non_exhaustive()
    }
}

#[async_trait::async_trait]
impl ParameterStore for SsmParameterStore {
    async fn get_parameter(
        &self,
        name: &ParameterName,
        with_decryption: bool,
    ) -> Result<Parameter, StoreError> {
        let output = self
            .client
            .get_parameter()
            .name(name.as_str())
            .with_decryption(with_decryption)
            .send()
            .await
            .map_err(|e| classify_sdk_error(name, e))?;

        output
            .parameter()
            .and_then(|p| p.value())
            .map(|value| Parameter::new(name.clone(), value))
            .ok_or_else(|| StoreError::MissingValue(name.to_string()))
    }
}

/// Every SSM request is signed for a region, without one no call can succeed.
fn ensure_region(region: Option<&Region>) -> AnyResult<&Region> {
    region.ok_or_else(|| {
        anyhow!("No AWS region configured for the SSM client, set AWS_REGION or a profile region")
    })
}

fn classify_sdk_error<E, R>(name: &ParameterName, error: SdkError<E, R>) -> StoreError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    match &error {
        SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) => StoreError::ConnectionFailed(
            format!("{}: {}", name, DisplayErrorContext(&error)),
        ),
        SdkError::ServiceError(_) => classify_error_code(name, error.code(), error.message()),
        _ => StoreError::ServiceFailed(format!("{}: {}", name, DisplayErrorContext(&error))),
    }
}

/// Maps an SSM error code onto the store error taxonomy.
pub(crate) fn classify_error_code(
    name: &ParameterName,
    code: Option<&str>,
    message: Option<&str>,
) -> StoreError {
    let detail = message.unwrap_or("no error message");
    match code {
        Some("ParameterNotFound") | Some("ParameterVersionNotFound") => {
            StoreError::NotFound(format!("{}: {}", name, detail))
        }
        Some("AccessDeniedException")
        | Some("UnrecognizedClientException")
        | Some("ExpiredTokenException")
        | Some("InvalidClientTokenId") => {
            StoreError::AccessDenied(format!("{}: {}", name, detail))
        }
        Some("InvalidKeyId") | Some("KMSAccessDeniedException") | Some("KMSDisabledException") => {
            StoreError::DecryptionFailed(format!("{}: {}", name, detail))
        }
        Some(code) => StoreError::ServiceFailed(format!("{}: {} ({})", name, detail, code)),
        None => StoreError::ServiceFailed(format!("{}: {}", name, detail)),
    }
}
