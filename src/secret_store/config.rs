use serde::{Deserialize, Serialize};

/// Configuration for the secrets store client
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SecretStoreConfig {
    /// AWS region the store lives in
    #[serde(default = "default_region")]
    pub region: String,

    /// Endpoint override, for local stand-ins of the store
    #[serde(default)]
    pub endpoint_url: Option<String>,

    /// Maximum number of secrets requested from the list call. Only the
    /// first page is ever fetched.
    #[serde(default = "default_max_results")]
    pub max_results: i32,
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_max_results() -> i32 {
    100
}

impl Default for SecretStoreConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            endpoint_url: None,
            max_results: default_max_results(),
        }
    }
}
