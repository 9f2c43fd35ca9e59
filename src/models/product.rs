//! Product route parameters.

use serde::{Deserialize, Serialize};

/// Path parameters of `/products/:slug`.
///
/// This is the only accepted shape; axum's `Path` extractor rejects
/// anything that does not deserialize into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductParams {
    /// The raw, percent-decoded path segment.
    pub slug: String,
}
