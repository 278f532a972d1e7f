//! The base property map and the secret-merge helper.

use std::collections::BTreeMap;

use crate::metrics;
use crate::secret_store::{SecretStore, SecretStoreError};

/// Flat string-to-string map returned by the service. Keys are unique;
/// later writes for the same key overwrite.
pub type PropertyMap = BTreeMap<String, String>;

/// The ambient runtime property set: every process environment variable
/// plus a few fixed runtime keys. Reconstructed on every call.
pub fn runtime_properties() -> PropertyMap {
    let mut properties: PropertyMap = std::env::vars().collect();
    properties.insert("service.name".into(), env!("CARGO_PKG_NAME").into());
    properties.insert("service.version".into(), env!("CARGO_PKG_VERSION").into());
    properties.insert("os.name".into(), std::env::consts::OS.into());
    properties.insert("os.arch".into(), std::env::consts::ARCH.into());
    properties.insert("process.pid".into(), std::process::id().to_string());
    properties
}

/// Fetch every listed secret and merge it into `properties`, in list order.
///
/// A failed or valueless fetch is substituted with the literal string
/// `"null"` and processing continues. The listing call itself has no
/// recovery path; its error is returned to the caller.
pub async fn merge_secrets(
    store: &dyn SecretStore,
    max_results: i32,
    properties: &mut PropertyMap,
) -> Result<(), SecretStoreError> {
    let entries = store.list_secrets(max_results).await?;
    for entry in entries {
        let value = match store.get_secret_value(&entry.arn).await {
            Ok(Some(value)) if !value.is_empty() => value,
            Ok(_) => "null".to_string(),
            Err(err) => {
                tracing::error!(secret = %entry.name, error = %err, "secret value fetch failed");
                metrics::SECRET_FETCH_FAILURES.inc();
                "null".to_string()
            }
        };
        properties.insert(entry.name, value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secret_store::InMemorySecretStore;

    #[test]
    fn contains_fixed_runtime_keys() {
        let props = runtime_properties();
        assert_eq!(props["service.name"], env!("CARGO_PKG_NAME"));
        assert_eq!(props["service.version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(props["os.name"], std::env::consts::OS);
        assert_eq!(props["os.arch"], std::env::consts::ARCH);
        assert_eq!(props["process.pid"], std::process::id().to_string());
    }

    #[test]
    fn contains_process_environment() {
        let props = runtime_properties();
        for (key, value) in std::env::vars().take(5) {
            assert_eq!(props.get(&key), Some(&value));
        }
    }

    #[tokio::test]
    async fn merge_overwrites_existing_keys() {
        let store = InMemorySecretStore::new().with_secret("os.name", "arn:os", "overridden");
        let mut props = runtime_properties();
        merge_secrets(&store, 100, &mut props).await.unwrap();
        assert_eq!(props["os.name"], "overridden");
    }
}
