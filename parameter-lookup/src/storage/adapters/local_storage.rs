use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::*;
use crate::storage::repository::*;

/// In-memory parameter store. Keeps track of the names it was asked for and
/// can be told to fail lookups of a given name.
#[derive(Clone, Default)]
pub struct LocalStorage {
    parameters: Arc<RwLock<HashMap<ParameterName, String>>>,
    failures: Arc<RwLock<HashMap<ParameterName, StoreError>>>,
    requests: Arc<RwLock<Vec<(ParameterName, bool)>>>,
}

impl LocalStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameters<N, V>(parameters: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        let storage = Self::new();
        for (name, value) in parameters {
            storage.put(ParameterName::new(name), value);
        }
        storage
    }

    pub fn put(&self, name: ParameterName, value: impl Into<String>) {
        self.parameters
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name, value.into());
    }

    pub fn fail_with(&self, name: ParameterName, error: StoreError) {
        self.failures
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name, error);
    }

    /// Names and decryption flags of every lookup, in call order.
    pub fn requests(&self) -> Vec<(ParameterName, bool)> {
        self.requests
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear(&self) {
        self.parameters
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.failures
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.requests
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

#[async_trait::async_trait]
impl ParameterStore for LocalStorage {
    async fn get_parameter(
        &self,
        name: &ParameterName,
        with_decryption: bool,
    ) -> Result<Parameter, StoreError> {
        self.requests
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((name.clone(), with_decryption));

        if let Some(error) = self
            .failures
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
        {
            return Err(error.clone());
        }

        let parameters = self.parameters.read().unwrap_or_else(PoisonError::into_inner);
        parameters
            .get(name)
            .map(|value| Parameter::new(name.clone(), value.clone()))
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_parameter_returns_stored_value() {
        let storage = LocalStorage::with_parameters([("/example/parameter", "abc123")]);

        let parameter = storage
            .get_parameter(&ParameterName::default(), true)
            .await
            .unwrap();

        assert_eq!(parameter.name().as_str(), "/example/parameter");
        assert_eq!(parameter.value(), "abc123");
    }

    #[tokio::test]
    async fn test_get_parameter_missing_is_not_found() {
        let storage = LocalStorage::new();

        let result = storage
            .get_parameter(&ParameterName::new("/custom/key"), true)
            .await;

        assert_eq!(
            result.unwrap_err(),
            StoreError::NotFound("/custom/key".to_string())
        );
    }

    #[tokio::test]
    async fn test_injected_failure_wins_over_stored_value() {
        let storage = LocalStorage::with_parameters([("/secret", "value")]);
        storage.fail_with(
            ParameterName::new("/secret"),
            StoreError::AccessDenied("not allowed".to_string()),
        );

        let result = storage.get_parameter(&ParameterName::new("/secret"), true).await;

        assert!(matches!(result, Err(StoreError::AccessDenied(_))));
    }

    #[tokio::test]
    async fn test_requests_are_recorded() {
        let storage = LocalStorage::new();
        let _ = storage.get_parameter(&ParameterName::new("/a"), true).await;
        let _ = storage.get_parameter(&ParameterName::new("/b"), false).await;

        assert_eq!(
            storage.requests(),
            vec![
                (ParameterName::new("/a"), true),
                (ParameterName::new("/b"), false)
            ]
        );

        storage.clear();
        assert!(storage.requests().is_empty());
    }
}
