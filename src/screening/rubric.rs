//! Point weights and thresholds of the screening rubric.
//!
//! Any change here must bump `config::ENGINE_VERSION`.

use super::types::{ImageCue, RiskBand, RiskFactor, Urgency};

pub const BASE_POINTS: i32 = 10;

pub const AGE_65_PLUS_POINTS: i32 = 20;
pub const AGE_50_TO_64_POINTS: i32 = 10;
pub const FEMALE_50_PLUS_POINTS: i32 = 10;

pub const VERTEBRAL_POINTS: i32 = 35;
pub const DEMINERALIZATION_POINTS: i32 = 15;
pub const CORTICAL_THINNING_POINTS: i32 = 10;

pub const PRIOR_FRACTURE_POINTS: i32 = 20;
pub const GLUCOCORTICOID_POINTS: i32 = 15;

/// Added once when at least `UNCERTAIN_CUE_THRESHOLD` cues are unknown.
pub const UNCERTAINTY_ESCALATION_POINTS: i32 = 10;
pub const UNCERTAIN_CUE_THRESHOLD: usize = 2;

pub const MIN_SCORE: i32 = 0;
pub const MAX_SCORE: i32 = 100;

/// Inclusive upper bounds of the low / moderate / high bands.
pub const LOW_BAND_MAX: u8 = 24;
pub const MODERATE_BAND_MAX: u8 = 49;
pub const HIGH_BAND_MAX: u8 = 74;

pub const FLAG_SCORE_MIN: u8 = 50;
pub const PRIORITY_SCORE_MIN: u8 = 75;

/// BMD is only read when extraction confidence reaches this value.
pub const BMD_MIN_CONFIDENCE: f64 = 0.8;
/// WHO T-score cut-off, reported as context only.
pub const BMD_OSTEOPOROTIC_T_SCORE: f64 = -2.5;

/// Points for a cue read as present.
pub fn cue_points(cue: ImageCue) -> i32 {
    match cue {
        ImageCue::VertebralWedgeOrCompression => VERTEBRAL_POINTS,
        ImageCue::DiffuseBoneDemineralization => DEMINERALIZATION_POINTS,
        ImageCue::RibOrClavicleCorticalThinning => CORTICAL_THINNING_POINTS,
    }
}

/// Points for a risk factor answered yes. `None` marks a factor that is
/// collected and audited but carries no weight.
pub fn factor_points(factor: RiskFactor) -> Option<i32> {
    match factor {
        RiskFactor::PriorLowTraumaFracture => Some(PRIOR_FRACTURE_POINTS),
        RiskFactor::LongTermGlucocorticoids => Some(GLUCOCORTICOID_POINTS),
        RiskFactor::Postmenopausal
        | RiskFactor::RheumatoidArthritis
        | RiskFactor::LowBodyWeight
        | RiskFactor::Smoking
        | RiskFactor::ParentalHipFracture
        | RiskFactor::AlcoholHigh
        | RiskFactor::SecondaryOsteoporosis => None,
    }
}

/// Band for a clamped score.
pub fn band_for_score(score: u8) -> RiskBand {
    if score <= LOW_BAND_MAX {
        RiskBand::Low
    } else if score <= MODERATE_BAND_MAX {
        RiskBand::Moderate
    } else if score <= HIGH_BAND_MAX {
        RiskBand::High
    } else {
        RiskBand::VeryHigh
    }
}

/// Urgency from the clamped score and the vertebral cue.
pub fn urgency_for(score: u8, vertebral_suspected: bool) -> Urgency {
    if vertebral_suspected || score >= PRIORITY_SCORE_MIN {
        Urgency::Priority
    } else if score >= FLAG_SCORE_MIN {
        Urgency::Soon
    } else {
        Urgency::Routine
    }
}
