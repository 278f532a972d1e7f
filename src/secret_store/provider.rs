use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use aws_sdk_secretsmanager::error::DisplayErrorContext;

use super::{Result, SecretStoreConfig, SecretStoreError};

/// A secret known to the store: a human-facing name and the opaque handle
/// used to fetch its value.
#[derive(Clone, Debug)]
pub struct SecretEntry {
    pub name: String,
    pub arn: String,
}

/// Trait for secrets store clients - supports multiple implementations
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// List up to `max_results` secrets. Only the first page is returned;
    /// pagination tokens are not followed.
    async fn list_secrets(&self, max_results: i32) -> Result<Vec<SecretEntry>>;

    /// Fetch the string value for a secret handle. `None` means the secret
    /// exists but carries no string value.
    async fn get_secret_value(&self, arn: &str) -> Result<Option<String>>;
}

/// AWS Secrets Manager client using the official SDK
pub struct AwsSecretStore {
    client: aws_sdk_secretsmanager::Client,
}

impl AwsSecretStore {
    /// Build a client from configuration. Region and endpoint come from
    /// config; credentials resolve through the SDK default chain.
    pub async fn from_config(config: &SecretStoreConfig) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));
        if let Some(url) = &config.endpoint_url {
            loader = loader.endpoint_url(url);
        }
        let sdk_config = loader.load().await;

        Self {
            client: aws_sdk_secretsmanager::Client::new(&sdk_config),
        }
    }
}

#[async_trait]
impl SecretStore for AwsSecretStore {
    async fn list_secrets(&self, max_results: i32) -> Result<Vec<SecretEntry>> {
        let resp = self
            .client
            .list_secrets()
            .max_results(max_results)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("list_secrets call to AWS failed: {}", DisplayErrorContext(&e));
                SecretStoreError::List(DisplayErrorContext(&e).to_string())
            })?;

        // First page only; next_token is deliberately ignored.
        let entries = resp
            .secret_list
            .unwrap_or_default()
            .into_iter()
            .filter_map(|entry| match (entry.name, entry.arn) {
                (Some(name), Some(arn)) => Some(SecretEntry { name, arn }),
                _ => None,
            })
            .collect();

        Ok(entries)
    }

    async fn get_secret_value(&self, arn: &str) -> Result<Option<String>> {
        let resp = self
            .client
            .get_secret_value()
            .secret_id(arn)
            .send()
            .await
            .map_err(|e| SecretStoreError::Get(DisplayErrorContext(&e).to_string()))?;

        Ok(resp.secret_string)
    }
}

/// In-memory store with fixed entries, for tests and local development
#[derive(Default)]
pub struct InMemorySecretStore {
    entries: Vec<SecretEntry>,
    values: HashMap<String, String>,
    broken: HashSet<String>,
    fail_list: bool,
    calls: AtomicUsize,
}

impl InMemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a secret with a value.
    pub fn with_secret(mut self, name: &str, arn: &str, value: &str) -> Self {
        self.entries.push(SecretEntry {
            name: name.to_string(),
            arn: arn.to_string(),
        });
        self.values.insert(arn.to_string(), value.to_string());
        self
    }

    /// Register a secret whose value fetch fails.
    pub fn with_broken_secret(mut self, name: &str, arn: &str) -> Self {
        self.entries.push(SecretEntry {
            name: name.to_string(),
            arn: arn.to_string(),
        });
        self.broken.insert(arn.to_string());
        self
    }

    /// Register a secret that exists but carries no string value.
    pub fn with_valueless_secret(mut self, name: &str, arn: &str) -> Self {
        self.entries.push(SecretEntry {
            name: name.to_string(),
            arn: arn.to_string(),
        });
        self
    }

    /// Make the list call itself fail.
    pub fn with_failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    /// Number of store calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SecretStore for InMemorySecretStore {
    async fn list_secrets(&self, max_results: i32) -> Result<Vec<SecretEntry>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list {
            return Err(SecretStoreError::List("simulated list failure".into()));
        }
        Ok(self
            .entries
            .iter()
            .take(max_results.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn get_secret_value(&self, arn: &str) -> Result<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.broken.contains(arn) {
            return Err(SecretStoreError::Get(format!(
                "simulated failure for {arn}"
            )));
        }
        Ok(self.values.get(arn).cloned())
    }
}
