//! Fixed wording attached to a scored result.
//!
//! Templates read a `ScreeningResult` and never feed back into it.
//! Rules for every template: no statement that low bone density is
//! confirmed, no treatment or medication advice, DXA or clinician review
//! are the only suggested next steps, calm non-alarming tone.

use serde::{Deserialize, Serialize};

use super::types::{RiskBand, ScreeningFlag, ScreeningResult, Urgency};

pub const SAFETY_DISCLAIMER: &str =
    "This is a screening support tool, not a diagnosis. \
     Confirmatory testing such as DXA may be needed. \
     Clinical context and clinician judgement are required.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningMessages {
    pub summary_one_liner: String,
    pub recommendation_clinician: String,
    pub patient_facing_message: String,
    pub safety_disclaimer: String,
}

/// Message template builder.
pub struct MessageTemplates;

impl MessageTemplates {
    pub fn for_result(result: &ScreeningResult) -> ScreeningMessages {
        ScreeningMessages {
            summary_one_liner: Self::summary(result),
            recommendation_clinician: Self::clinician(result.screening_flag, result.urgency),
            patient_facing_message: Self::patient(result.screening_flag),
            safety_disclaimer: SAFETY_DISCLAIMER.to_string(),
        }
    }

    fn band_phrase(band: RiskBand) -> &'static str {
        match band {
            RiskBand::Low => "low",
            RiskBand::Moderate => "moderate",
            RiskBand::High => "high",
            RiskBand::VeryHigh => "very high",
        }
    }

    pub fn summary(result: &ScreeningResult) -> String {
        let outcome = match result.screening_flag {
            ScreeningFlag::Flag => "flagged for confirmatory bone density assessment",
            ScreeningFlag::NoFlag => "not flagged",
            ScreeningFlag::NeedsReview => "needs clinician review of the inputs",
        };
        format!(
            "Opportunistic CXR screening: {} risk ({}/100), {}.",
            Self::band_phrase(result.risk_band),
            result.risk_score_0_100,
            outcome,
        )
    }

    pub fn clinician(flag: ScreeningFlag, urgency: Urgency) -> String {
        let timing = match urgency {
            Urgency::Routine => "at a routine visit",
            Urgency::Soon => "within weeks",
            Urgency::Priority => "on a prioritised basis",
        };
        match flag {
            ScreeningFlag::Flag => format!(
                "Consider DXA referral {timing}. \
                 Review the image-derived cues and clinical risk factors in the audit trail."
            ),
            ScreeningFlag::NeedsReview => format!(
                "Inputs were incomplete or uncertain. Review the audit trail and \
                 consider DXA {timing} if clinical suspicion remains."
            ),
            ScreeningFlag::NoFlag => {
                "No screening signal. Continue routine care and reassess if risk factors change."
                    .to_string()
            }
        }
    }

    pub fn patient(flag: ScreeningFlag) -> String {
        match flag {
            ScreeningFlag::Flag => {
                "Your chest X-ray and health information suggest it may be worth checking \
                 your bone health. Your clinician may suggest a bone density scan (DXA)."
                    .to_string()
            }
            ScreeningFlag::NeedsReview => {
                "Some information needed for this check was missing or unclear. \
                 Your clinician will review it with you."
                    .to_string()
            }
            ScreeningFlag::NoFlag => {
                "This check did not find a reason for further bone health testing right now. \
                 Keep discussing your health with your clinician as usual."
                    .to_string()
            }
        }
    }
}
