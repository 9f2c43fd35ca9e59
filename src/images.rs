//! Remote image allow-list.
//!
//! The image endpoint only ever points browsers at hosts listed in
//! `images.yaml`. A URL is allowed when some [`RemotePattern`] matches its
//! scheme, hostname, port and path. A pattern without a port accepts any
//! port.

use url::Url;

use crate::config::{ImagesConfig, RemotePattern};
use crate::error::{SiteError, SiteResult};

/// Checks image URLs against the configured remote patterns.
#[derive(Debug, Clone)]
pub struct ImagePolicy {
    patterns: Vec<RemotePattern>,
}

impl ImagePolicy {
    /// Creates a policy from the loaded image configuration.
    pub fn new(config: &ImagesConfig) -> Self {
        Self {
            patterns: config.remote_patterns.clone(),
        }
    }

    /// Parses `raw` and returns it if an allow-listed host serves it.
    ///
    /// # Errors
    ///
    /// - `InvalidImageUrl` if `raw` is not an absolute URL
    /// - `ImageHostNotAllowed` if no pattern matches
    pub fn check(&self, raw: &str) -> SiteResult<Url> {
        let url = Url::parse(raw).map_err(|e| SiteError::InvalidImageUrl {
            url: raw.to_string(),
            message: e.to_string(),
        })?;

        if self.patterns.iter().any(|pattern| matches_pattern(pattern, &url)) {
            Ok(url)
        } else {
            Err(SiteError::ImageHostNotAllowed {
                url: raw.to_string(),
            })
        }
    }
}

/// Whether `url` falls under `pattern`.
pub fn matches_pattern(pattern: &RemotePattern, url: &Url) -> bool {
    url.scheme() == pattern.protocol.scheme()
        && url.host_str() == Some(pattern.hostname.as_str())
        && pattern.port.is_none_or(|port| url.port_or_known_default() == Some(port))
        && matches_pathname(&pattern.pathname, url.path())
}

fn matches_pathname(glob: &str, path: &str) -> bool {
    if glob == "/**" {
        return true;
    }
    match glob.strip_suffix("/**") {
        Some(prefix) => {
            path == prefix
                || path
                    .strip_prefix(prefix)
                    .is_some_and(|rest| rest.starts_with('/'))
        }
        None => glob == path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigLoader, Protocol};

    fn bundled_policy() -> ImagePolicy {
        let config = ConfigLoader::load("./config/idms").expect("Failed to load config");
        ImagePolicy::new(config.images())
    }

    fn pattern(pathname: &str) -> RemotePattern {
        RemotePattern {
            protocol: Protocol::Https,
            hostname: "cdn.example.com".to_string(),
            port: None,
            pathname: pathname.to_string(),
        }
    }

    #[test]
    fn test_allows_listed_hosts() {
        let policy = bundled_policy();
        for raw in [
            "https://res.cloudinary.com/demo/image/upload/sample.jpg",
            "https://dev.tirangaidms.com/uploads/logo.png",
            "https://dev.tirangaidms.com:8080/media/avatar.png",
            "https://images.unsplash.com/photo-123?w=800",
            "http://localhost:3000/placeholder.png",
        ] {
            assert!(policy.check(raw).is_ok(), "expected {} to be allowed", raw);
        }
    }

    #[test]
    fn test_rejects_unlisted_host() {
        let err = bundled_policy()
            .check("https://example.com/cat.png")
            .unwrap_err();
        assert!(matches!(err, SiteError::ImageHostNotAllowed { .. }));
    }

    #[test]
    fn test_rejects_wrong_scheme_or_port() {
        let policy = bundled_policy();
        assert!(policy.check("http://res.cloudinary.com/a.png").is_err());
        assert!(policy.check("http://localhost:8000/a.png").is_err());
        assert!(policy.check("http://localhost/a.png").is_err());
        assert!(policy.check("https://images.unsplash.com.evil.io/a.png").is_err());
    }

    #[test]
    fn test_portless_pattern_matches_any_port() {
        let policy = bundled_policy();
        assert!(policy.check("https://images.unsplash.com:443/a.jpg").is_ok());
        assert!(policy.check("https://dev.tirangaidms.com:9090/a.png").is_ok());
        assert!(matches_pattern(
            &pattern("/**"),
            &Url::parse("https://cdn.example.com:8443/a.png").unwrap()
        ));
    }

    #[test]
    fn test_explicit_port_pattern_is_exact() {
        let mut fixed = pattern("/**");
        fixed.port = Some(8443);

        let url = |raw: &str| Url::parse(raw).unwrap();
        assert!(matches_pattern(&fixed, &url("https://cdn.example.com:8443/a.png")));
        assert!(!matches_pattern(&fixed, &url("https://cdn.example.com/a.png")));
        assert!(!matches_pattern(&fixed, &url("https://cdn.example.com:8444/a.png")));
    }

    #[test]
    fn test_unparsable_url_is_invalid() {
        let err = bundled_policy().check("/relative/path.png").unwrap_err();
        assert!(matches!(err, SiteError::InvalidImageUrl { .. }));
    }

    #[test]
    fn test_pathname_globs() {
        let url = |path: &str| Url::parse(&format!("https://cdn.example.com{}", path)).unwrap();

        assert!(matches_pattern(&pattern("/**"), &url("/anything/here.png")));
        assert!(matches_pattern(&pattern("/media/**"), &url("/media/a/b.png")));
        assert!(matches_pattern(&pattern("/media/**"), &url("/media")));
        assert!(!matches_pattern(&pattern("/media/**"), &url("/mediakit/a.png")));
        assert!(matches_pattern(&pattern("/logo.png"), &url("/logo.png")));
        assert!(!matches_pattern(&pattern("/logo.png"), &url("/logo.png.bak")));
    }
}
