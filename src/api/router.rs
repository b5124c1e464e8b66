//! HTTP router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`.
//!
//! Layer stack (outermost → innermost):
//! 1. CORS → 2. Body limit → 3. Access log

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderName, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;

/// Headers browser clients of the screening form send.
const ALLOWED_HEADERS: [HeaderName; 4] = [
    header::CONTENT_TYPE,
    header::AUTHORIZATION,
    HeaderName::from_static("x-client-info"),
    HeaderName::from_static("apikey"),
];

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(ALLOWED_HEADERS)
}

/// Build the API router over a shared context.
///
/// NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
pub fn api_router(ctx: ApiContext) -> Router {
    let max_body_bytes = ctx.config.max_body_bytes;

    let routes = Router::new()
        .route("/health", get(endpoints::health::check))
        .route(
            "/screenings",
            post(endpoints::screenings::create).get(endpoints::screenings::list),
        )
        .route("/screenings/:id", get(endpoints::screenings::detail))
        .route("/vision-model", post(endpoints::vision::simulate))
        .with_state(ctx)
        // Innermost first, outermost last
        .layer(axum::middleware::from_fn(middleware::audit::log_access))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(cors_layer());

    Router::new().nest("/api", routes)
}
