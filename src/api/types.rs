//! Shared types for the HTTP layer.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::store::ScreeningLog;
use crate::config::{ServerConfig, ENGINE_VERSION};
use crate::screening::{
    CxrView, PatientInput, RiskBand, ScreeningFlag, ScreeningMessages, ScreeningResult, Sex,
    Urgency,
};

/// Status of every record written by the screening endpoint.
pub const STATUS_COMPLETED: &str = "completed";

/// Shared context for all API routes and middleware.
#[derive(Clone)]
pub struct ApiContext {
    pub log: Arc<ScreeningLog>,
    pub config: Arc<ServerConfig>,
}

impl ApiContext {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            log: Arc::new(ScreeningLog::new(config.screening_log_capacity)),
            config: Arc::new(config),
        }
    }
}

/// Full response of `POST /api/screenings`: the engine result with fixed
/// wording attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningReport {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub engine_version: String,
    #[serde(flatten)]
    pub result: ScreeningResult,
    #[serde(flatten)]
    pub messages: ScreeningMessages,
}

impl ScreeningReport {
    pub fn new(result: ScreeningResult, messages: ScreeningMessages) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            engine_version: ENGINE_VERSION.to_string(),
            result,
            messages,
        }
    }
}

/// Summary row for listings. Carries no free-text patient data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub patient_age_years: Option<u8>,
    pub sex: Sex,
    pub cxr_view: CxrView,
    pub model_risk_score: Option<f64>,
    pub model_uncertainty: Option<f64>,
    pub final_risk_score: u8,
    pub risk_band: RiskBand,
    pub screening_flag: ScreeningFlag,
    pub urgency: Urgency,
    pub status: String,
}

impl ScreeningRecord {
    pub fn from_report(report: &ScreeningReport, input: &PatientInput) -> Self {
        let signal = input.model_signal.as_ref();
        Self {
            id: report.id,
            created_at: report.created_at,
            patient_age_years: input.age,
            sex: input.sex,
            cxr_view: input.cxr_view,
            model_risk_score: signal.map(|s| s.model_risk_score_0_1),
            model_uncertainty: signal.map(|s| s.model_uncertainty_0_1),
            final_risk_score: report.result.risk_score_0_100,
            risk_band: report.result.risk_band,
            screening_flag: report.result.screening_flag,
            urgency: report.result.urgency,
            status: STATUS_COMPLETED.to_string(),
        }
    }
}
