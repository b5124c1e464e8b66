//! Vision-model simulator endpoint.

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::api::error::ApiError;
use crate::screening::VisionModelOutput;
use crate::vision::{self, VisionRequest};

/// `POST /api/vision-model` — simulated model signal for an uploaded CXR.
pub async fn simulate(
    payload: Result<Json<VisionRequest>, JsonRejection>,
) -> Result<Json<VisionModelOutput>, ApiError> {
    let Json(request) = payload?;
    let (input, image) = request.check()?;

    tracing::debug!(
        mime_type = image.mime_type,
        image_bytes = image.bytes.len(),
        "Vision simulator input accepted"
    );

    Ok(Json(vision::simulate(&input)))
}
