//! Configuration types for the site.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML files in the configuration directory.

use serde::Deserialize;
use std::net::SocketAddr;

/// Branding shown in the header, footer and page titles.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteMetadata {
    /// Short brand name (e.g., "IDMS").
    pub name: String,
    /// Line shown under the brand name.
    pub tagline: String,
    /// Legal entity named in the copyright line.
    pub legal_name: String,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address the server binds to.
    pub bind_address: SocketAddr,
}

/// Strict-Transport-Security settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HstsConfig {
    /// How long browsers should remember to use HTTPS, in seconds.
    pub max_age_secs: u64,
    /// Whether the policy covers subdomains.
    #[serde(default)]
    pub include_subdomains: bool,
    /// Whether the domain asks to be on browser preload lists.
    #[serde(default)]
    pub preload: bool,
}

impl HstsConfig {
    /// Renders the header value.
    ///
    /// ```
    /// use idms_site::config::HstsConfig;
    ///
    /// let hsts = HstsConfig {
    ///     max_age_secs: 63072000,
    ///     include_subdomains: true,
    ///     preload: true,
    /// };
    /// assert_eq!(hsts.header_value(), "max-age=63072000; includeSubDomains; preload");
    /// ```
    pub fn header_value(&self) -> String {
        let mut value = format!("max-age={}", self.max_age_secs);
        if self.include_subdomains {
            value.push_str("; includeSubDomains");
        }
        if self.preload {
            value.push_str("; preload");
        }
        value
    }
}

/// Response security headers.
#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    /// Strict-Transport-Security policy applied to every response.
    pub hsts: HstsConfig,
}

/// Contents of `site.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Branding.
    pub site: SiteMetadata,
    /// Listener.
    pub server: ServerConfig,
    /// Security headers.
    pub security: SecurityConfig,
}

/// URL scheme accepted by a remote image pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// Plain HTTP.
    Http,
    /// HTTPS.
    Https,
}

impl Protocol {
    /// The URL scheme string.
    pub fn scheme(self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

/// One entry of the remote image allow-list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemotePattern {
    /// Required scheme.
    pub protocol: Protocol,
    /// Exact hostname.
    pub hostname: String,
    /// Required port; `None` accepts any port.
    #[serde(default)]
    pub port: Option<u16>,
    /// Path glob: `/**` for any path, `/prefix/**` for a subtree, otherwise exact.
    #[serde(default = "default_pathname")]
    pub pathname: String,
}

fn default_pathname() -> String {
    "/**".to_string()
}

/// Contents of `images.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ImagesConfig {
    /// Hosts the image endpoint may point at.
    pub remote_patterns: Vec<RemotePattern>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsts_without_flags() {
        let hsts = HstsConfig {
            max_age_secs: 300,
            include_subdomains: false,
            preload: false,
        };
        assert_eq!(hsts.header_value(), "max-age=300");
    }

    #[test]
    fn test_remote_pattern_defaults() {
        let pattern: RemotePattern =
            serde_yaml::from_str("protocol: https\nhostname: images.unsplash.com\n").unwrap();
        assert_eq!(pattern.protocol, Protocol::Https);
        assert_eq!(pattern.port, None);
        assert_eq!(pattern.pathname, "/**");
    }

    #[test]
    fn test_unknown_protocol_is_rejected() {
        let result: Result<RemotePattern, _> =
            serde_yaml::from_str("protocol: ftp\nhostname: example.com\n");
        assert!(result.is_err());
    }
}
