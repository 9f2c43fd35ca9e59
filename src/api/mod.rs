//! HTTP layer for the IDMS site.
//!
//! This module wires the page renderers and the JSON endpoints into an
//! axum router.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ImageQuery, PricingQuery};
pub use response::{ApiError, ApiErrorResponse, NotImplementedBody, PDF_DISABLED_MESSAGE};
pub use state::AppState;
