//! Screening endpoints.
//!
//! Three endpoints:
//! - `POST /api/screenings` — score an intake and record the report
//! - `GET /api/screenings` — recent summary records, newest first
//! - `GET /api/screenings/:id` — a stored full report

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::store::StoredScreening;
use crate::api::types::{ApiContext, ScreeningRecord, ScreeningReport};
use crate::screening::{self, MessageTemplates, PatientIntake};

pub const DEFAULT_LIST_LIMIT: usize = 50;
pub const MAX_LIST_LIMIT: usize = 200;

/// `POST /api/screenings` — validate, normalize, score, annotate, record.
pub async fn create(
    State(ctx): State<ApiContext>,
    payload: Result<Json<PatientIntake>, JsonRejection>,
) -> Result<Json<ScreeningReport>, ApiError> {
    let Json(intake) = payload?;
    let input = screening::prepare(intake)?;

    let result = screening::score(&input);
    let messages = MessageTemplates::for_result(&result);
    let report = ScreeningReport::new(result, messages);
    let record = ScreeningRecord::from_report(&report, &input);

    ctx.log.record(StoredScreening {
        record,
        report: report.clone(),
    })?;

    tracing::info!(
        id = %report.id,
        flag = report.result.screening_flag.as_str(),
        band = report.result.risk_band.as_str(),
        "Screening recorded"
    );

    Ok(Json(report))
}

#[derive(Deserialize)]
pub struct ListQuery {
    pub limit: Option<usize>,
}

/// `GET /api/screenings` — recent screenings.
pub async fn list(
    State(ctx): State<ApiContext>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<ScreeningRecord>>, ApiError> {
    let Query(query) = query?;
    let limit = query
        .limit
        .unwrap_or(DEFAULT_LIST_LIMIT)
        .clamp(1, MAX_LIST_LIMIT);

    Ok(Json(ctx.log.recent(limit)?))
}

/// `GET /api/screenings/:id` — full stored report.
pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(screening_id): Path<String>,
) -> Result<Json<ScreeningReport>, ApiError> {
    let id = Uuid::parse_str(&screening_id)
        .map_err(|e| ApiError::BadRequest(format!("Invalid screening ID: {e}")))?;

    ctx.log
        .get(&id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Screening not found".into()))
}
