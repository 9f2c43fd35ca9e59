//! Error types for the IDMS marketing site.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the few error conditions the site has: configuration loading,
//! image allow-list checks and the disabled payslip PDF feature.

use thiserror::Error;

/// The main error type for the site.
///
/// # Example
///
/// ```
/// use idms_site::error::SiteError;
///
/// let error = SiteError::ConfigNotFound {
///     path: "/missing/site.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/site.yaml");
/// ```
#[derive(Debug, Error)]
pub enum SiteError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value parsed but is not usable.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// An image URL could not be parsed.
    #[error("Invalid image URL '{url}': {message}")]
    InvalidImageUrl {
        /// The URL as received.
        url: String,
        /// The parse failure.
        message: String,
    },

    /// An image URL points at a host outside the remote pattern allow-list.
    #[error("Image host not allowed: {url}")]
    ImageHostNotAllowed {
        /// The rejected URL.
        url: String,
    },
}

/// A type alias for Results that return SiteError.
pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = SiteError::ConfigNotFound {
            path: "/missing/site.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/site.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = SiteError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = SiteError::InvalidConfig {
            field: "server.bind_address".to_string(),
            message: "not a socket address".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration field 'server.bind_address': not a socket address"
        );
    }

    #[test]
    fn test_image_host_not_allowed_displays_url() {
        let error = SiteError::ImageHostNotAllowed {
            url: "https://evil.example/cat.png".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Image host not allowed: https://evil.example/cat.png"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<SiteError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> SiteResult<()> {
            Err(SiteError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> SiteResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
