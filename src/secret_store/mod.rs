//! Secrets Store Integration Module
//!
//! This module provides the collaborator seam to the external secrets
//! store. Two implementations exist:
//!
//! - `AwsSecretStore`: talks to AWS Secrets Manager via the official SDK
//! - `InMemorySecretStore`: fixed entries for tests and local development
//!
//! # Example
//!
//! ```no_run
//! use sysprops_service::secret_store::{InMemorySecretStore, SecretStore};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = InMemorySecretStore::new().with_secret("db-pass", "arn:1", "hunter2");
//!
//!     // List the first page of secrets, then fetch one value by handle
//!     let entries = store.list_secrets(100).await?;
//!     let _value = store.get_secret_value(&entries[0].arn).await?;
//!
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod provider;

pub use config::SecretStoreConfig;
pub use error::{Result, SecretStoreError};
pub use provider::{AwsSecretStore, InMemorySecretStore, SecretEntry, SecretStore};
