use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::secret_store::SecretStore;

/// Shared application state: configuration plus the injected store client.
/// Both are read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
    pub store: Arc<dyn SecretStore>,
}

impl AppState {
    pub fn new(config: ServiceConfig, store: Arc<dyn SecretStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }
}
