//! Configuration loading and management for the site.
//!
//! This module loads the deployment configuration from YAML files: site
//! branding, the listener address, response security headers and the
//! remote image allow-list.
//!
//! # Example
//!
//! ```no_run
//! use idms_site::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/idms").unwrap();
//! println!("Loaded site: {}", config.site().site.name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    HstsConfig, ImagesConfig, Protocol, RemotePattern, SecurityConfig, ServerConfig, SiteConfig,
    SiteMetadata,
};
