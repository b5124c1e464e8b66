//! Intake validation and normalization.
//!
//! `validate` is the caller-side check the transport runs before scoring.
//! `normalize` is total: it never fails and never invents data. Anything it
//! cannot place becomes "missing" and is left for the engine to escalate.

use super::types::{
    ImageFindings, PatientInput, PatientIntake, Sex, TriState, ValidationError,
};

pub const MIN_AGE: i64 = 0;
pub const MAX_AGE: i64 = 120;

/// Reject intake a well-behaved form could never have produced.
pub fn validate(intake: &PatientIntake) -> Result<(), ValidationError> {
    if let Some(age) = intake.age {
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(ValidationError::AgeOutOfRange(age));
        }
    }

    if let Some(bmd) = &intake.bmd {
        if let Some(t_score) = bmd.femoral_neck_t_score {
            if !t_score.is_finite() {
                return Err(ValidationError::NotFinite {
                    field: "bmd.femoral_neck_t_score",
                });
            }
        }
        if let Some(confidence) = bmd.extraction_confidence_0_1 {
            check_probability("bmd.extraction_confidence_0_1", confidence)?;
        }
    }

    if let Some(signal) = &intake.model_signal {
        check_probability("model_signal.model_risk_score_0_1", signal.model_risk_score_0_1)?;
        check_probability(
            "model_signal.model_uncertainty_0_1",
            signal.model_uncertainty_0_1,
        )?;
    }

    Ok(())
}

fn check_probability(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }
    if !(0.0..=1.0).contains(&value) {
        return Err(ValidationError::ProbabilityOutOfRange { field, value });
    }
    Ok(())
}

/// Build the canonical engine input.
///
/// - Age 0, absent or outside 0..=120 becomes missing, never "under 50".
/// - Absent sex / view become `unknown`.
/// - Postmenopausal is cleared for anyone not recorded as female.
/// - An absent findings block means every cue is unknown.
pub fn normalize(intake: PatientIntake) -> PatientInput {
    let age = intake
        .age
        .filter(|age| *age > MIN_AGE && *age <= MAX_AGE)
        .and_then(|age| u8::try_from(age).ok());

    if intake.age.is_some() && age.is_none() {
        tracing::debug!("Intake age treated as missing");
    }

    let sex = intake.sex.unwrap_or_default();
    let mut risk_factors = intake.risk_factors;
    if sex != Sex::Female && risk_factors.postmenopausal.is_known() {
        tracing::debug!(sex = sex.as_str(), "Dropping postmenopausal answer");
        risk_factors.postmenopausal = TriState::Unknown;
    }

    let mut image_findings: ImageFindings = intake.image_findings.unwrap_or_default();
    image_findings.other_red_flags = image_findings
        .other_red_flags
        .into_iter()
        .map(|flag| flag.trim().to_string())
        .filter(|flag| !flag.is_empty())
        .collect();

    PatientInput {
        age,
        sex,
        cxr_view: intake.cxr_view.unwrap_or_default(),
        risk_factors,
        image_findings,
        bmd: intake.bmd,
        model_signal: intake.model_signal,
    }
}

/// Validate then normalize.
pub fn prepare(intake: PatientIntake) -> Result<PatientInput, ValidationError> {
    validate(&intake)?;
    Ok(normalize(intake))
}

impl From<PatientIntake> for PatientInput {
    fn from(intake: PatientIntake) -> Self {
        normalize(intake)
    }
}
