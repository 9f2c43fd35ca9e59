//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the site
//! configuration from YAML files.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use crate::error::{SiteError, SiteResult};

use super::types::{ImagesConfig, SiteConfig};

/// Loads and provides access to the site configuration.
///
/// # Directory Structure
///
/// ```text
/// config/idms/
/// ├── site.yaml    # Branding, listener, security headers
/// └── images.yaml  # Remote image allow-list
/// ```
///
/// # Example
///
/// ```no_run
/// use idms_site::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/idms").unwrap();
/// println!("Serving {} on {}", loader.site().site.name, loader.bind_address());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    site: SiteConfig,
    images: ImagesConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML or misses a required field
    /// - A remote image pattern is unusable
    pub fn load<P: AsRef<Path>>(path: P) -> SiteResult<Self> {
        let path = path.as_ref();

        let site = Self::load_yaml::<SiteConfig>(&path.join("site.yaml"))?;
        let images = Self::load_yaml::<ImagesConfig>(&path.join("images.yaml"))?;

        Self::validate_images(&images)?;

        Ok(Self { site, images })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> SiteResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| SiteError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| SiteError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate_images(images: &ImagesConfig) -> SiteResult<()> {
        for (index, pattern) in images.remote_patterns.iter().enumerate() {
            if pattern.hostname.trim().is_empty() {
                return Err(SiteError::InvalidConfig {
                    field: format!("remote_patterns[{}].hostname", index),
                    message: "hostname must not be empty".to_string(),
                });
            }
            if !pattern.pathname.starts_with('/') {
                return Err(SiteError::InvalidConfig {
                    field: format!("remote_patterns[{}].pathname", index),
                    message: format!("'{}' must start with '/'", pattern.pathname),
                });
            }
        }
        Ok(())
    }

    /// Returns the contents of `site.yaml`.
    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// Returns the contents of `images.yaml`.
    pub fn images(&self) -> &ImagesConfig {
        &self.images
    }

    /// The address the server should bind to.
    pub fn bind_address(&self) -> SocketAddr {
        self.site.server.bind_address
    }

    /// Replaces the configured bind address (e.g., from a CLI flag).
    pub fn with_bind_address(mut self, address: SocketAddr) -> Self {
        self.site.server.bind_address = address;
        self
    }
}
