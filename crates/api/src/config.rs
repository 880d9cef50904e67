//! Bridge configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `BRIDGE_HOST` - Bind address (default: 127.0.0.1)
//! - `BRIDGE_PORT` - Listen port (default: 3000)
//! - `BRIDGE_CORS_ORIGIN` - `Access-Control-Allow-Origin` value (default: `*`)
//! - `BRIDGE_UNIQUE_VARIANT_TITLES` - Suffix new variant titles with a timestamp (default: true)
//! - `SHOPIFY_STORE` - Shopify store domain (default: ick3df-yk.myshopify.com)
//! - `SHOPIFY_API_VERSION` - Admin API version (default: 2024-01)
//! - `SHOPIFY_ADMIN_TOKEN` - Admin API access token (HIGH PRIVILEGE)
//! - `SHOPIFY_ADMIN_BASE_URL` - Admin API base URL override (default: `https://{store}`)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Sentry error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Sentry traces sample rate (default: 0.0)
//!
//! A missing `SHOPIFY_ADMIN_TOKEN` does not stop the server from starting.
//! Every forwarding request answers with a configuration error instead, so
//! the checkout form gets a JSON reply rather than a dead endpoint.

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const DEFAULT_STORE: &str = "ick3df-yk.myshopify.com";
const DEFAULT_API_VERSION: &str = "2024-01";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Bridge application configuration.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Value sent in `Access-Control-Allow-Origin`
    pub cors_origin: String,
    /// Whether generated variant titles carry a timestamp suffix
    pub unique_variant_titles: bool,
    /// Shopify Admin API configuration
    pub shopify: ShopifyAdminConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

/// Shopify Admin API configuration.
///
/// Implements `Debug` manually to redact the access token.
#[derive(Clone)]
pub struct ShopifyAdminConfig {
    /// Shopify store domain (e.g., your-store.myshopify.com)
    pub store: String,
    /// Admin API version (e.g., 2024-01)
    pub api_version: String,
    /// Admin API access token, if configured
    pub access_token: Option<SecretString>,
    /// Base URL requests are sent to (scheme + host, no trailing path)
    pub base_url: Url,
}

impl std::fmt::Debug for ShopifyAdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopifyAdminConfig")
            .field("store", &self.store)
            .field("api_version", &self.api_version)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl BridgeConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("BRIDGE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("BRIDGE_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("BRIDGE_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("BRIDGE_PORT".to_string(), e.to_string()))?;
        let cors_origin = get_env_or_default("BRIDGE_CORS_ORIGIN", "*");
        let unique_variant_titles = parse_bool(
            "BRIDGE_UNIQUE_VARIANT_TITLES",
            &get_env_or_default("BRIDGE_UNIQUE_VARIANT_TITLES", "true"),
        )?;

        let shopify = ShopifyAdminConfig::from_env()?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = get_optional_env("SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let sentry_traces_sample_rate = get_optional_env("SENTRY_TRACES_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(0.0);

        Ok(Self {
            host,
            port,
            cors_origin,
            unique_variant_titles,
            shopify,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl ShopifyAdminConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let store = get_env_or_default("SHOPIFY_STORE", DEFAULT_STORE);
        let base_url = get_optional_env("SHOPIFY_ADMIN_BASE_URL")
            .unwrap_or_else(|| format!("https://{store}"));
        let base_url = Url::parse(&base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("SHOPIFY_ADMIN_BASE_URL".to_string(), e.to_string())
        })?;

        Ok(Self {
            store,
            api_version: get_env_or_default("SHOPIFY_API_VERSION", DEFAULT_API_VERSION),
            access_token: get_optional_env("SHOPIFY_ADMIN_TOKEN")
                .filter(|token| !token.is_empty())
                .map(SecretString::from),
            base_url,
        })
    }

    /// Absolute URL of an Admin REST resource, e.g. `draft_orders.json`.
    #[must_use]
    pub fn resource_url(&self, resource: &str) -> String {
        format!(
            "{}/admin/api/{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            self.api_version,
            resource
        )
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a boolean flag (`true`/`false`, `1`/`0`, `yes`/`no`).
fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got {other:?}"),
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn shopify_config(base_url: &str, token: Option<&str>) -> ShopifyAdminConfig {
        ShopifyAdminConfig {
            store: "test.myshopify.com".to_string(),
            api_version: "2024-01".to_string(),
            access_token: token.map(SecretString::from),
            base_url: Url::parse(base_url).unwrap(),
        }
    }

    #[test]
    fn test_resource_url() {
        let config = shopify_config("https://test.myshopify.com", None);
        assert_eq!(
            config.resource_url("draft_orders.json"),
            "https://test.myshopify.com/admin/api/2024-01/draft_orders.json"
        );
    }

    #[test]
    fn test_resource_url_with_port() {
        let config = shopify_config("http://127.0.0.1:9999/", None);
        assert_eq!(
            config.resource_url("products/1/variants.json"),
            "http://127.0.0.1:9999/admin/api/2024-01/products/1/variants.json"
        );
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("X", "true").unwrap());
        assert!(parse_bool("X", " YES ").unwrap());
        assert!(!parse_bool("X", "0").unwrap());
        assert!(matches!(
            parse_bool("X", "maybe"),
            Err(ConfigError::InvalidEnvVar(_, _))
        ));
    }

    #[test]
    fn test_socket_addr() {
        let config = BridgeConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            cors_origin: "*".to_string(),
            unique_variant_titles: true,
            shopify: shopify_config("https://test.myshopify.com", None),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_shopify_config_debug_redacts_token() {
        let config = shopify_config("https://test.myshopify.com", Some("shpat_super_secret"));
        let debug_output = format!("{config:?}");

        assert!(debug_output.contains("test.myshopify.com"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("shpat_super_secret"));
    }
}
