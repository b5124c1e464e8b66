//! Deterministic osteoporosis risk screening.
//!
//! `normalize` turns raw intake into a canonical `PatientInput`, `engine`
//! scores it against the fixed `rubric`, and `messages` attaches fixed
//! wording to the result. Nothing in here performs I/O or holds state.

pub mod engine;
pub mod messages;
pub mod normalize;
pub mod rubric;
pub mod types;

pub use engine::score;
pub use messages::{MessageTemplates, ScreeningMessages, SAFETY_DISCLAIMER};
pub use normalize::{normalize, prepare, validate};
pub use types::{
    Audit, BmdData, CxrView, ImageFindings, ImageQuality, PatientInput, PatientIntake,
    RiskBand, RiskFactors, ScreeningFlag, ScreeningResult, Sex, TraceStep, TriState, Urgency,
    ValidationError, VisionModelOutput,
};
