//! Health check endpoint.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub engine_version: &'static str,
}

/// `GET /api/health` — liveness plus the rubric identifier in use.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: crate::config::APP_VERSION,
        engine_version: crate::config::ENGINE_VERSION,
    })
}
