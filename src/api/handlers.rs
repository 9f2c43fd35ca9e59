//! HTTP request handlers for the IDMS site.
//!
//! This module contains the router and the handler functions for every
//! page and endpoint.

use axum::{
    Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use chrono::{Datelike, Utc};
use maud::Markup;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::content::mock_payslip;
use crate::interaction::{PRICING_PATH, PricingView};
use crate::models::ProductParams;
use crate::pages::{
    SCRIPT_PATH, STYLESHEET_PATH, not_found_page, payslip_page, pricing_page, product_page,
};

use super::request::{ImageQuery, PricingQuery};
use super::response::{ApiError, ApiErrorResponse, NotImplementedBody};
use super::state::AppState;

const SITE_CSS: &str = include_str!("../../assets/site.css");
const SITE_JS: &str = include_str!("../../assets/site.js");

/// Creates the site router with all pages and endpoints.
///
/// Every response, including 404s, carries the configured
/// `Strict-Transport-Security` header.
pub fn create_router(state: AppState) -> Router {
    let hsts = state.hsts().clone();

    Router::new()
        .route(PRICING_PATH, get(pricing_handler))
        .route("/employee/payslip", get(payslip_handler))
        .route("/products/:slug", get(product_handler))
        .route("/api/generate-payslip-pdf", post(generate_payslip_pdf_handler))
        .route("/image", get(image_handler))
        .route(STYLESHEET_PATH, get(stylesheet_handler))
        .route(SCRIPT_PATH, get(script_handler))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            header::STRICT_TRANSPORT_SECURITY,
            hsts,
        ))
        .with_state(state)
}

/// Handler for GET /pricing.
///
/// Unparsable fields are ignored one by one. A query that cannot be read
/// at all, such as one with a repeated key, renders the default state.
async fn pricing_handler(
    State(state): State<AppState>,
    query: Result<Query<PricingQuery>, QueryRejection>,
) -> Markup {
    let view: PricingView = match query {
        Ok(Query(query)) => query.into(),
        Err(rejection) => {
            debug!(error = %rejection, "Ignoring malformed pricing query");
            PricingView::default()
        }
    };
    debug!(state = %view.query_string(), "Rendering pricing page");

    pricing_page(&state.config().site().site, &view, Utc::now().year())
}

/// Handler for GET /employee/payslip.
async fn payslip_handler() -> Markup {
    payslip_page(&mock_payslip())
}

/// Handler for GET /products/:slug.
async fn product_handler(Path(params): Path<ProductParams>) -> Markup {
    debug!(slug = %params.slug, "Rendering product page");
    product_page(&params)
}

/// Handler for POST /api/generate-payslip-pdf.
///
/// The request is never read. Always answers `501 Not Implemented`.
async fn generate_payslip_pdf_handler() -> NotImplementedBody {
    let correlation_id = Uuid::new_v4();
    warn!(
        correlation_id = %correlation_id,
        "Payslip PDF generation requested but disabled"
    );
    NotImplementedBody::payslip_pdf()
}

/// Handler for GET /image.
///
/// Redirects to allow-listed image URLs and rejects everything else.
async fn image_handler(
    State(state): State<AppState>,
    query: Result<Query<ImageQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection,
                "Malformed image query"
            );
            return (
                StatusCode::BAD_REQUEST,
                axum::Json(ApiError::malformed_query(rejection.body_text())),
            )
                .into_response();
        }
    };

    match state.images().check(&query.url) {
        Ok(url) => {
            info!(
                correlation_id = %correlation_id,
                host = url.host_str().unwrap_or_default(),
                "Redirecting to allowed image"
            );
            Redirect::temporary(url.as_str()).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Image URL rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

async fn stylesheet_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], SITE_CSS)
}

async fn script_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        SITE_JS,
    )
}

async fn not_found_handler(uri: Uri) -> impl IntoResponse {
    debug!(path = %uri.path(), "No route matched");
    (StatusCode::NOT_FOUND, not_found_page(uri.path()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/idms").expect("Failed to load config");
        AppState::new(config).expect("Failed to build state")
    }

    async fn get_page(uri: &str) -> (StatusCode, String) {
        let response = create_router(create_test_state())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_pricing_renders_default_state() {
        let (status, html) = get_page("/pricing").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Frequently asked questions"));
        assert!(html.contains(r#"href="/pricing?faq=0#faq-0""#));
    }

    #[tokio::test]
    async fn test_pricing_restores_open_faq() {
        let (_, html) = get_page("/pricing?faq=0").await;

        assert!(html.contains("IDMS provides robust privacy controls"));
        assert!(html.contains(r#"href="/pricing#faq-0""#));
    }

    #[tokio::test]
    async fn test_malformed_pricing_query_falls_back() {
        let (status, html) = get_page("/pricing?faq=abc&menu=zzz").await;

        assert_eq!(status, StatusCode::OK);
        assert!(!html.contains("leading-relaxed"));
    }

    #[tokio::test]
    async fn test_bad_menu_flag_keeps_open_faq() {
        let (status, html) = get_page("/pricing?faq=1&menu=zzz").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("a nominal setup fee applies"));
        assert!(html.contains(r#"href="/pricing#faq-1""#));
        assert!(html.contains("translate-x-full"));
    }

    #[tokio::test]
    async fn test_product_slug_with_percent_encoding() {
        let (status, html) = get_page("/products/smart%20home-hub").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Smart Home Hub"));
    }

    #[tokio::test]
    async fn test_assets_are_served_with_content_type() {
        let response = create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .uri("/assets/site.css")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/css; charset=utf-8"
        );

        let (status, js) = get_page("/assets/site.js").await;
        assert_eq!(status, StatusCode::OK);
        assert!(js.contains("IntersectionObserver"));
    }

    #[tokio::test]
    async fn test_missing_image_url_is_bad_request() {
        let (status, body) = get_page("/image").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_str(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_QUERY");
    }
}
