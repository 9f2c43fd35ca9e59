//! Application state for the site server.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use axum::http::HeaderValue;

use crate::config::ConfigLoader;
use crate::error::{SiteError, SiteResult};
use crate::images::ImagePolicy;

/// Shared application state.
///
/// Everything in here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// The loaded site configuration.
    config: Arc<ConfigLoader>,
    /// The remote image allow-list.
    images: Arc<ImagePolicy>,
    /// Pre-built `Strict-Transport-Security` value.
    hsts: HeaderValue,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the HSTS settings do not form a valid
    /// header value.
    pub fn new(config: ConfigLoader) -> SiteResult<Self> {
        let hsts = HeaderValue::try_from(config.site().security.hsts.header_value()).map_err(
            |e| SiteError::InvalidConfig {
                field: "security.hsts".to_string(),
                message: e.to_string(),
            },
        )?;
        let images = ImagePolicy::new(config.images());

        Ok(Self {
            config: Arc::new(config),
            images: Arc::new(images),
            hsts,
        })
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the image allow-list.
    pub fn images(&self) -> &ImagePolicy {
        &self.images
    }

    /// Returns the `Strict-Transport-Security` header value.
    pub fn hsts(&self) -> &HeaderValue {
        &self.hsts
    }
}
