//! Response types for the JSON endpoints.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::SiteError;

/// Message returned by the disabled PDF endpoint.
pub const PDF_DISABLED_MESSAGE: &str =
    "Payslip PDF generation is temporarily disabled to allow application build.";

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed query error response.
    pub fn malformed_query(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_QUERY", message)
    }
}

/// Body of the `501 Not Implemented` reply from the PDF endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotImplementedBody {
    /// Why the feature is unavailable.
    pub error: String,
    /// Always `"Not Implemented"`.
    pub status: String,
}

impl NotImplementedBody {
    /// The fixed payload for the payslip PDF endpoint.
    pub fn payslip_pdf() -> Self {
        Self {
            error: PDF_DISABLED_MESSAGE.to_string(),
            status: "Not Implemented".to_string(),
        }
    }
}

impl IntoResponse for NotImplementedBody {
    fn into_response(self) -> Response {
        (StatusCode::NOT_IMPLEMENTED, Json(self)).into_response()
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<SiteError> for ApiErrorResponse {
    fn from(error: SiteError) -> Self {
        match error {
            SiteError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            SiteError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            SiteError::InvalidConfig { field, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    format!("Invalid configuration field '{}'", field),
                    message,
                ),
            },
            SiteError::InvalidImageUrl { url, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_IMAGE_URL",
                    format!("Invalid image URL: {}", url),
                    message,
                ),
            },
            SiteError::ImageHostNotAllowed { url } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "IMAGE_HOST_NOT_ALLOWED",
                    format!("Image host not allowed: {}", url),
                    "The URL does not match any configured remote image pattern",
                ),
            },
        }
    }
}
