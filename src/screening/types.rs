use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Macro to generate a closed wire enum with as_str + std::str::FromStr.
/// The serde name and `as_str` are always the same literal.
macro_rules! str_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ValidationError::InvalidEnum {
                        field: stringify!($name),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(
    Sex {
        Female => "female",
        Male => "male",
        Other => "other",
        Unknown => "unknown",
    }
);

str_enum!(
    /// Chest X-ray projection.
    CxrView {
        Pa => "PA",
        Ap => "AP",
        Lateral => "lateral",
        Unknown => "unknown",
    }
);

str_enum!(
    /// Reader-assessed quality of the radiograph the cues were read from.
    ImageQuality {
        Good => "good",
        Limited => "limited",
        Poor => "poor",
        Unknown => "unknown",
    }
);

str_enum!(
    ScreeningFlag {
        Flag => "flag",
        NoFlag => "no_flag",
        NeedsReview => "needs_review",
    }
);

str_enum!(
    /// Ordered from least to most concerning.
    #[derive(PartialOrd, Ord)]
    RiskBand {
        Low => "low",
        Moderate => "moderate",
        High => "high",
        VeryHigh => "very_high",
    }
);

str_enum!(
    #[derive(PartialOrd, Ord)]
    Urgency {
        Routine => "routine",
        Soon => "soon",
        Priority => "priority",
    }
);

impl Default for Sex {
    fn default() -> Self {
        Self::Unknown
    }
}

impl Default for CxrView {
    fn default() -> Self {
        Self::Unknown
    }
}

impl Default for ImageQuality {
    fn default() -> Self {
        Self::Unknown
    }
}

// ---------------------------------------------------------------------------
// TriState
// ---------------------------------------------------------------------------

/// A clinical yes/no answer that may be missing.
///
/// Serialized as JSON `true`, `false` or `null`; a missing key deserializes
/// to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum TriState {
    Yes,
    No,
    #[default]
    Unknown,
}

impl TriState {
    pub fn is_yes(self) -> bool {
        self == Self::Yes
    }

    pub fn is_unknown(self) -> bool {
        self == Self::Unknown
    }

    pub fn is_known(self) -> bool {
        !self.is_unknown()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "true",
            Self::No => "false",
            Self::Unknown => "unknown",
        }
    }
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::Yes,
            Some(false) => Self::No,
            None => Self::Unknown,
        }
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        Some(value).into()
    }
}

impl From<TriState> for Option<bool> {
    fn from(value: TriState) -> Self {
        match value {
            TriState::Yes => Some(true),
            TriState::No => Some(false),
            TriState::Unknown => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Risk factors
// ---------------------------------------------------------------------------

/// Clinical risk factors collected at intake.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskFactors {
    pub postmenopausal: TriState,
    #[serde(alias = "steroid_use", alias = "long_term_steroid_use")]
    pub long_term_glucocorticoids: TriState,
    #[serde(alias = "prior_fragility_fracture")]
    pub prior_low_trauma_fracture: TriState,
    pub rheumatoid_arthritis: TriState,
    pub low_body_weight: TriState,
    pub smoking: TriState,
    pub parental_hip_fracture: TriState,
    pub alcohol_high: TriState,
    pub secondary_osteoporosis: TriState,
}

/// Names a single field of [`RiskFactors`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskFactor {
    Postmenopausal,
    LongTermGlucocorticoids,
    PriorLowTraumaFracture,
    RheumatoidArthritis,
    LowBodyWeight,
    Smoking,
    ParentalHipFracture,
    AlcoholHigh,
    SecondaryOsteoporosis,
}

impl RiskFactor {
    /// Intake order, also the order factors appear in the audit trail.
    pub const ALL: [RiskFactor; 9] = [
        Self::Postmenopausal,
        Self::LongTermGlucocorticoids,
        Self::PriorLowTraumaFracture,
        Self::RheumatoidArthritis,
        Self::LowBodyWeight,
        Self::Smoking,
        Self::ParentalHipFracture,
        Self::AlcoholHigh,
        Self::SecondaryOsteoporosis,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Postmenopausal => "postmenopausal",
            Self::LongTermGlucocorticoids => "long_term_glucocorticoids",
            Self::PriorLowTraumaFracture => "prior_low_trauma_fracture",
            Self::RheumatoidArthritis => "rheumatoid_arthritis",
            Self::LowBodyWeight => "low_body_weight",
            Self::Smoking => "smoking",
            Self::ParentalHipFracture => "parental_hip_fracture",
            Self::AlcoholHigh => "alcohol_high",
            Self::SecondaryOsteoporosis => "secondary_osteoporosis",
        }
    }

    /// Dotted field path used in `Audit::inputs_used`.
    pub fn field_path(&self) -> String {
        format!("risk_factors.{}", self.as_str())
    }
}

impl RiskFactors {
    pub fn get(&self, factor: RiskFactor) -> TriState {
        match factor {
            RiskFactor::Postmenopausal => self.postmenopausal,
            RiskFactor::LongTermGlucocorticoids => self.long_term_glucocorticoids,
            RiskFactor::PriorLowTraumaFracture => self.prior_low_trauma_fracture,
            RiskFactor::RheumatoidArthritis => self.rheumatoid_arthritis,
            RiskFactor::LowBodyWeight => self.low_body_weight,
            RiskFactor::Smoking => self.smoking,
            RiskFactor::ParentalHipFracture => self.parental_hip_fracture,
            RiskFactor::AlcoholHigh => self.alcohol_high,
            RiskFactor::SecondaryOsteoporosis => self.secondary_osteoporosis,
        }
    }
}

// ---------------------------------------------------------------------------
// Image findings
// ---------------------------------------------------------------------------

/// Cues read from the radiograph by an upstream reader or model.
/// A missing block means every cue is unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageFindings {
    pub vertebral_wedge_or_compression_suspected: TriState,
    pub diffuse_bone_demineralization_suspected: TriState,
    pub rib_or_clavicle_cortical_thinning_suspected: TriState,
    pub other_red_flags: Vec<String>,
    pub image_quality: ImageQuality,
}

/// Names one of the three scored image cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageCue {
    VertebralWedgeOrCompression,
    DiffuseBoneDemineralization,
    RibOrClavicleCorticalThinning,
}

impl ImageCue {
    pub const ALL: [ImageCue; 3] = [
        Self::VertebralWedgeOrCompression,
        Self::DiffuseBoneDemineralization,
        Self::RibOrClavicleCorticalThinning,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VertebralWedgeOrCompression => "vertebral_wedge_or_compression_suspected",
            Self::DiffuseBoneDemineralization => "diffuse_bone_demineralization_suspected",
            Self::RibOrClavicleCorticalThinning => "rib_or_clavicle_cortical_thinning_suspected",
        }
    }

    pub fn field_path(&self) -> String {
        format!("image_findings.{}", self.as_str())
    }
}

impl ImageFindings {
    pub fn get(&self, cue: ImageCue) -> TriState {
        match cue {
            ImageCue::VertebralWedgeOrCompression => self.vertebral_wedge_or_compression_suspected,
            ImageCue::DiffuseBoneDemineralization => self.diffuse_bone_demineralization_suspected,
            ImageCue::RibOrClavicleCorticalThinning => {
                self.rib_or_clavicle_cortical_thinning_suspected
            }
        }
    }

    /// Findings with every cue explicitly negative and good image quality.
    pub fn all_clear() -> Self {
        Self {
            vertebral_wedge_or_compression_suspected: TriState::No,
            diffuse_bone_demineralization_suspected: TriState::No,
            rib_or_clavicle_cortical_thinning_suspected: TriState::No,
            other_red_flags: Vec::new(),
            image_quality: ImageQuality::Good,
        }
    }

    pub fn uncertain_cue_count(&self) -> usize {
        ImageCue::ALL
            .iter()
            .filter(|cue| self.get(**cue).is_unknown())
            .count()
    }
}

// ---------------------------------------------------------------------------
// BMD and model signal
// ---------------------------------------------------------------------------

/// Bone mineral density extracted from a prior DXA report, if any.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BmdData {
    pub available: bool,
    pub femoral_neck_t_score: Option<f64>,
    pub extraction_confidence_0_1: Option<f64>,
}

/// Continuous output of the CXR vision model (or its simulator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisionModelOutput {
    pub model_name: String,
    pub model_risk_score_0_1: f64,
    pub model_uncertainty_0_1: f64,
}

// ---------------------------------------------------------------------------
// PatientIntake (wire) / PatientInput (canonical)
// ---------------------------------------------------------------------------

/// Intake exactly as received from a form or API client.
///
/// Everything is optional. Turn it into a [`PatientInput`] with
/// `normalize::prepare` (validating) or `normalize::normalize`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientIntake {
    #[serde(alias = "patient_age_years", alias = "patient_age")]
    pub age: Option<i64>,
    #[serde(alias = "patient_sex")]
    pub sex: Option<Sex>,
    pub cxr_view: Option<CxrView>,
    pub risk_factors: RiskFactors,
    #[serde(alias = "xray_findings")]
    pub image_findings: Option<ImageFindings>,
    pub bmd: Option<BmdData>,
    pub model_signal: Option<VisionModelOutput>,
}

/// Canonical engine input. Build it through `normalize`, never mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientInput {
    /// `None` means missing. Zero never appears here.
    pub age: Option<u8>,
    pub sex: Sex,
    pub cxr_view: CxrView,
    pub risk_factors: RiskFactors,
    pub image_findings: ImageFindings,
    pub bmd: Option<BmdData>,
    pub model_signal: Option<VisionModelOutput>,
}

impl PatientInput {
    /// Postmenopausal status, or `Unknown` for anyone not recorded as female
    /// whatever the stored value says.
    pub fn postmenopausal(&self) -> TriState {
        if self.sex == Sex::Female {
            self.risk_factors.postmenopausal
        } else {
            TriState::Unknown
        }
    }

    /// Risk factor lookup with the postmenopausal rule applied.
    pub fn risk_factor(&self, factor: RiskFactor) -> TriState {
        match factor {
            RiskFactor::Postmenopausal => self.postmenopausal(),
            other => self.risk_factors.get(other),
        }
    }
}

// ---------------------------------------------------------------------------
// ScreeningResult
// ---------------------------------------------------------------------------

/// One applied rule. Summing `points` over the trace replays the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    pub rule: String,
    pub points: i32,
    /// Running total after this step.
    pub total: i32,
    pub detail: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audit {
    pub inputs_used: Vec<String>,
    pub logic_trace: Vec<TraceStep>,
}

impl Audit {
    /// Flat text form of the trace, one rule per line.
    pub fn render(&self) -> String {
        self.logic_trace
            .iter()
            .map(|step| {
                format!(
                    "{}: {:+} (total {}) {}",
                    step.rule, step.points, step.total, step.detail
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Sum of all point deltas in trace order.
    pub fn replay(&self) -> i32 {
        self.logic_trace.iter().map(|step| step.points).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningResult {
    pub screening_flag: ScreeningFlag,
    pub risk_score_0_100: u8,
    pub risk_band: RiskBand,
    pub urgency: Urgency,
    pub audit: Audit,
}

// ---------------------------------------------------------------------------
// ValidationError
// ---------------------------------------------------------------------------

/// Caller-side validation failures. The engine never produces these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Age must be between 0 and 120, got {0}")]
    AgeOutOfRange(i64),

    #[error("Invalid {field} value: {value}")]
    InvalidEnum { field: &'static str, value: String },

    #[error("{field} must be between 0 and 1, got {value}")]
    ProbabilityOutOfRange { field: &'static str, value: f64 },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
}
