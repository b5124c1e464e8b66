//! CXR vision-model stand-in.
//!
//! There is no trained image model behind this yet. `simulate` produces a
//! plausible continuous risk / uncertainty pair from demographics and view so
//! the intake flow can be exercised end to end. Its output is context only:
//! the scoring engine never takes points from it.

use base64::Engine as _;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::screening::{CxrView, Sex, VisionModelOutput};

pub const MODEL_NAME: &str = "cxr-osteoflag-v0";

const MAX_AGE: i64 = 120;
const RISK_JITTER: f64 = 0.2;
const UNCERTAINTY_JITTER: f64 = 0.05;

/// Request body of the simulator, keyed the way the upload form sends it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VisionRequest {
    pub image_base64: String,
    pub age: Option<i64>,
    pub sex: Option<Sex>,
    pub cxr_view: Option<CxrView>,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum VisionError {
    #[error("Missing required fields: imageBase64, age, sex, cxrView")]
    MissingFields,

    #[error("Invalid age: {0}")]
    InvalidAge(i64),

    #[error("Malformed image data: {0}")]
    MalformedImage(String),

    #[error("Unsupported image format, expected PNG or JPEG")]
    UnsupportedImage,
}

/// A decoded upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Decode a bare base64 payload or a `data:<mime>;base64,<payload>` URL.
/// The declared mime type is ignored; magic bytes decide.
pub fn decode_image_data_url(raw: &str) -> Result<DecodedImage, VisionError> {
    let raw = raw.trim();
    let payload = match raw.strip_prefix("data:") {
        Some(rest) => {
            let (meta, data) = rest
                .split_once(',')
                .ok_or_else(|| VisionError::MalformedImage("data URL has no payload".into()))?;
            if !meta.ends_with(";base64") {
                return Err(VisionError::MalformedImage(
                    "data URL is not base64 encoded".into(),
                ));
            }
            data
        }
        None => raw,
    };

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| VisionError::MalformedImage(e.to_string()))?;

    let mime_type = match bytes.as_slice() {
        [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, ..] => "image/png",
        [0xFF, 0xD8, 0xFF, ..] => "image/jpeg",
        _ => return Err(VisionError::UnsupportedImage),
    };

    Ok(DecodedImage { mime_type, bytes })
}

/// Checked simulator input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationInput {
    pub age: u8,
    pub sex: Sex,
    pub cxr_view: CxrView,
}

impl VisionRequest {
    /// Validate the request and decode its image.
    pub fn check(&self) -> Result<(SimulationInput, DecodedImage), VisionError> {
        let (Some(age), Some(sex), Some(cxr_view)) = (self.age, self.sex, self.cxr_view) else {
            return Err(VisionError::MissingFields);
        };
        if self.image_base64.trim().is_empty() || age == 0 {
            return Err(VisionError::MissingFields);
        }
        let age = u8::try_from(age)
            .ok()
            .filter(|a| i64::from(*a) <= MAX_AGE)
            .ok_or(VisionError::InvalidAge(age))?;

        let image = decode_image_data_url(&self.image_base64)?;
        Ok((SimulationInput { age, sex, cxr_view }, image))
    }
}

fn base_risk(age: u8) -> f64 {
    match age {
        0..=49 => 0.10,
        50..=59 => 0.20,
        60..=69 => 0.35,
        70..=79 => 0.50,
        _ => 0.65,
    }
}

fn base_uncertainty(view: CxrView) -> f64 {
    match view {
        CxrView::Pa => 0.10,
        CxrView::Ap => 0.15,
        CxrView::Lateral => 0.20,
        CxrView::Unknown => 0.40,
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Simulate with a caller-supplied RNG.
pub fn simulate_with_rng<R: Rng + ?Sized>(input: &SimulationInput, rng: &mut R) -> VisionModelOutput {
    let mut risk = base_risk(input.age);
    if input.sex == Sex::Female && input.age >= 50 {
        risk += 0.15;
    }
    risk += (rng.gen::<f64>() - 0.5) * RISK_JITTER;

    let uncertainty =
        base_uncertainty(input.cxr_view) + (rng.gen::<f64>() - 0.5) * UNCERTAINTY_JITTER;

    VisionModelOutput {
        model_name: MODEL_NAME.to_string(),
        model_risk_score_0_1: round3(risk.clamp(0.0, 1.0)),
        model_uncertainty_0_1: round3(uncertainty.clamp(0.0, 1.0)),
    }
}

pub fn simulate(input: &SimulationInput) -> VisionModelOutput {
    simulate_with_rng(input, &mut rand::thread_rng())
}
