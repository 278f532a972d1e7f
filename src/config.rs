use serde::Deserialize;

use crate::secret_store::SecretStoreConfig;

/// Top-level service configuration, loaded from TOML with env overrides.
#[derive(Clone, Debug, Deserialize)]
pub struct ServiceConfig {
    /// Maintenance-mode flag. When set, /properties refuses requests.
    #[serde(default)]
    pub maintenance: bool,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub secret_store: SecretStoreConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            maintenance: false,
            server: ServerConfig::default(),
            secret_store: SecretStoreConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Whether the service is currently in maintenance mode.
    ///
    /// The flag is owned by external configuration; it is read here and
    /// never mutated at runtime.
    pub fn is_in_maintenance(&self) -> bool {
        self.maintenance
    }
}

/// Load configuration from `path`, falling back to the bundled example file.
///
/// `SYSPROPS_MAINTENANCE` overrides the maintenance flag after parsing.
pub async fn load(path: &str) -> anyhow::Result<ServiceConfig> {
    let text = match tokio::fs::read_to_string(path).await {
        Ok(text) => text,
        Err(_) => tokio::fs::read_to_string("config/sysprops.example.toml").await?,
    };
    let mut cfg: ServiceConfig = toml::from_str(&text)?;

    if let Ok(raw) = std::env::var("SYSPROPS_MAINTENANCE") {
        if let Some(flag) = parse_flag(&raw) {
            cfg.maintenance = flag;
        }
    }

    Ok(cfg)
}

/// Parse a boolean-ish env value. Unrecognized values are ignored.
fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_defaults() {
        let cfg: ServiceConfig = toml::from_str("").unwrap();
        assert!(!cfg.is_in_maintenance());
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 9080);
        assert_eq!(cfg.secret_store.region, "us-east-1");
        assert_eq!(cfg.secret_store.max_results, 100);
        assert!(cfg.secret_store.endpoint_url.is_none());
    }

    #[test]
    fn full_toml_parses() {
        let cfg: ServiceConfig = toml::from_str(
            r#"
            maintenance = true

            [server]
            host = "127.0.0.1"
            port = 9081

            [secret_store]
            region = "eu-west-1"
            endpoint_url = "http://localhost:4566"
            max_results = 25
            "#,
        )
        .unwrap();
        assert!(cfg.is_in_maintenance());
        assert_eq!(cfg.server.port, 9081);
        assert_eq!(cfg.secret_store.region, "eu-west-1");
        assert_eq!(
            cfg.secret_store.endpoint_url.as_deref(),
            Some("http://localhost:4566")
        );
        assert_eq!(cfg.secret_store.max_results, 25);
    }

    #[test]
    fn flag_parsing_variants() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("ON"), Some(true));
        assert_eq!(parse_flag("false"), Some(false));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("whatever"), None);
    }

    #[tokio::test]
    async fn missing_file_falls_back_to_example() {
        let cfg = load("config/definitely-missing.toml").await.unwrap();
        assert!(!cfg.is_in_maintenance());
        assert_eq!(cfg.secret_store.max_results, 100);
    }
}
