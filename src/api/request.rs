//! Query-string types for the HTTP routes.
//!
//! Page queries are never validated: anything that does not fit falls back
//! to the default state.

use serde::{Deserialize, Serialize};

pub use crate::interaction::PricingQuery;

/// Query parameters of `GET /image`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageQuery {
    /// Absolute URL of the remote image.
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_image_query() {
        let query: ImageQuery =
            serde_json::from_str(r#"{"url": "https://images.unsplash.com/a.jpg"}"#).unwrap();
        assert_eq!(query.url, "https://images.unsplash.com/a.jpg");
    }

    #[test]
    fn test_image_query_keeps_encoded_url() {
        let uri: axum::http::Uri = "/image?url=https%3A%2F%2Fimages.unsplash.com%2Fa.jpg%3Fw%3D800"
            .parse()
            .unwrap();
        let query = axum::extract::Query::<ImageQuery>::try_from_uri(&uri)
            .unwrap()
            .0;
        assert_eq!(query.url, "https://images.unsplash.com/a.jpg?w=800");
    }
}
