//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::BridgeConfig;
use crate::error::AppError;
use crate::shopify::{AdminClient, ShopifyError};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and holds only read-only
/// configuration and the Admin API client.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: BridgeConfig,
    admin: Option<AdminClient>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The Admin API client is only built when an access token is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured token cannot be used as a header.
    pub fn new(config: BridgeConfig) -> Result<Self, ShopifyError> {
        let admin = config
            .shopify
            .access_token
            .as_ref()
            .map(|token| AdminClient::new(&config.shopify, token))
            .transpose()?;

        if admin.is_none() {
            tracing::warn!("SHOPIFY_ADMIN_TOKEN is not set; forwarding requests will fail");
        }

        Ok(Self {
            inner: Arc::new(AppStateInner { config, admin }),
        })
    }

    /// Get a reference to the bridge configuration.
    #[must_use]
    pub fn config(&self) -> &BridgeConfig {
        &self.inner.config
    }

    /// Get the Admin API client.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Configuration` when no access token is configured.
    pub fn admin(&self) -> Result<&AdminClient, AppError> {
        self.inner.admin.as_ref().ok_or_else(|| {
            tracing::error!("Shopify access token missing");
            AppError::Configuration("Shopify access token is not configured".to_string())
        })
    }
}
