use super::rubric::{
    band_for_score, cue_points, factor_points, urgency_for, AGE_50_TO_64_POINTS,
    AGE_65_PLUS_POINTS, BASE_POINTS, BMD_MIN_CONFIDENCE, BMD_OSTEOPOROTIC_T_SCORE,
    FEMALE_50_PLUS_POINTS, FLAG_SCORE_MIN, LOW_BAND_MAX, MAX_SCORE, MIN_SCORE,
    UNCERTAINTY_ESCALATION_POINTS, UNCERTAIN_CUE_THRESHOLD,
};
use super::types::{
    Audit, CxrView, ImageCue, ImageQuality, PatientInput, RiskBand, RiskFactor, ScreeningFlag,
    ScreeningResult, Sex, TraceStep, TriState,
};

/// Point accumulator that records every rule it applies.
struct Scorecard {
    points: i32,
    inputs_used: Vec<String>,
    trace: Vec<TraceStep>,
}

impl Scorecard {
    fn new() -> Self {
        let mut card = Self {
            points: 0,
            inputs_used: Vec::new(),
            trace: Vec::new(),
        };
        card.add("base", BASE_POINTS, "starting points".to_string());
        card
    }

    fn add(&mut self, rule: &str, points: i32, detail: String) {
        self.points += points;
        self.trace.push(TraceStep {
            rule: rule.to_string(),
            points,
            total: self.points,
            detail,
        });
    }

    /// Zero-delta step.
    fn note(&mut self, rule: &str, detail: String) {
        self.add(rule, 0, detail);
    }

    fn use_input(&mut self, field: impl Into<String>) {
        let field = field.into();
        if !self.inputs_used.contains(&field) {
            self.inputs_used.push(field);
        }
    }
}

/// Score one patient. Pure and total: the same input always yields the
/// same result, and degraded input pushes toward `needs_review` instead of
/// failing.
pub fn score(input: &PatientInput) -> ScreeningResult {
    let mut card = Scorecard::new();
    let mut missing: Vec<&'static str> = Vec::new();

    // Age
    match input.age {
        Some(age) => {
            card.use_input("age");
            if age >= 65 {
                card.add("age_65_plus", AGE_65_PLUS_POINTS, format!("age {age} is 65 or over"));
            } else if age >= 50 {
                card.add("age_50_to_64", AGE_50_TO_64_POINTS, format!("age {age} is 50-64"));
            } else {
                card.note("age_under_50", format!("age {age} is under 50"));
            }
        }
        None => {
            missing.push("age");
            card.note("age_missing", "age not provided".to_string());
        }
    }

    // Sex, and its interaction with age
    if input.sex == Sex::Unknown {
        missing.push("sex");
        card.note("sex_missing", "sex not provided".to_string());
    } else {
        card.use_input("sex");
    }
    if let (Sex::Female, Some(age)) = (input.sex, input.age) {
        if age >= 50 {
            card.add(
                "female_50_plus",
                FEMALE_50_PLUS_POINTS,
                format!("female aged {age}"),
            );
        }
    }

    if input.cxr_view == CxrView::Unknown {
        missing.push("cxr_view");
        card.note("cxr_view_missing", "CXR view not provided".to_string());
    } else {
        card.use_input("cxr_view");
    }

    // Image cues
    let findings = &input.image_findings;
    let mut uncertain_cues = 0usize;
    for cue in ImageCue::ALL {
        match findings.get(cue) {
            TriState::Yes => {
                card.use_input(cue.field_path());
                card.add(cue.as_str(), cue_points(cue), "suspected on image".to_string());
            }
            TriState::No => card.use_input(cue.field_path()),
            TriState::Unknown => {
                uncertain_cues += 1;
                card.note(
                    &format!("{}_uncertain", cue.as_str()),
                    "cue not assessable".to_string(),
                );
            }
        }
    }
    if !findings.other_red_flags.is_empty() {
        card.use_input("image_findings.other_red_flags");
        card.note(
            "other_red_flags",
            format!(
                "context only, no point weight: {}",
                findings.other_red_flags.join("; ")
            ),
        );
    }

    // Clinical risk factors
    for factor in RiskFactor::ALL {
        let answer = input.risk_factor(factor);
        if answer.is_unknown() {
            continue;
        }
        card.use_input(factor.field_path());
        match (factor_points(factor), answer) {
            (Some(points), TriState::Yes) => {
                card.add(factor.as_str(), points, "reported".to_string());
            }
            (Some(_), _) => {}
            (None, _) => card.note(
                &format!("context_{}", factor.as_str()),
                format!("{} (context only, no point weight)", answer.as_str()),
            ),
        }
    }

    note_bmd(input, &mut card);

    if let Some(signal) = &input.model_signal {
        card.use_input("model_signal");
        card.note(
            "context_model_signal",
            format!(
                "{} risk {:.3}, uncertainty {:.3} (context only, no point weight)",
                signal.model_name, signal.model_risk_score_0_1, signal.model_uncertainty_0_1
            ),
        );
    }

    // Uncertainty escalation
    let escalated = uncertain_cues >= UNCERTAIN_CUE_THRESHOLD;
    if escalated {
        card.add(
            "uncertainty_escalation",
            UNCERTAINTY_ESCALATION_POINTS,
            format!("{uncertain_cues} of {} image cues uncertain", ImageCue::ALL.len()),
        );
    }

    // Clamp
    let raw = card.points;
    let clamped = raw.clamp(MIN_SCORE, MAX_SCORE);
    if clamped != raw {
        card.add("clamp", clamped - raw, format!("raw total {raw} clamped to {clamped}"));
    }
    let risk_score = u8::try_from(clamped).unwrap_or(u8::MAX).min(MAX_SCORE as u8);

    let mut risk_band = band_for_score(risk_score);
    card.note("band", format!("score {risk_score} is {risk_band}"));

    // Flag
    let vertebral = findings
        .get(ImageCue::VertebralWedgeOrCompression)
        .is_yes();
    let all_cues_negative = ImageCue::ALL
        .iter()
        .all(|cue| findings.get(*cue) == TriState::No);
    let score_flag = if risk_score >= FLAG_SCORE_MIN || vertebral {
        ScreeningFlag::Flag
    } else if risk_score <= LOW_BAND_MAX && all_cues_negative {
        ScreeningFlag::NoFlag
    } else {
        ScreeningFlag::NeedsReview
    };
    card.note("flag", format!("score rule gives {score_flag}"));

    let poor_image = matches!(
        findings.image_quality,
        ImageQuality::Poor | ImageQuality::Unknown
    ) && uncertain_cues > 0;

    let mut review_reasons: Vec<String> = Vec::new();
    if escalated {
        review_reasons.push("uncertain image cues".to_string());
    }
    if !missing.is_empty() {
        review_reasons.push(format!("missing {}", missing.join(", ")));
    }
    if poor_image {
        card.use_input("image_findings.image_quality");
        review_reasons.push(format!(
            "image quality {} with uncertain cues",
            findings.image_quality
        ));
    }

    let screening_flag = if review_reasons.is_empty() {
        score_flag
    } else {
        card.note("forced_review", review_reasons.join("; "));
        if risk_band == RiskBand::Low {
            risk_band = RiskBand::Moderate;
            card.note(
                "band_floor",
                "insufficient evidence never reads as low".to_string(),
            );
        }
        ScreeningFlag::NeedsReview
    };

    let urgency = urgency_for(risk_score, vertebral);
    card.note("urgency", urgency.as_str().to_string());

    tracing::debug!(
        score = risk_score,
        band = risk_band.as_str(),
        flag = screening_flag.as_str(),
        urgency = urgency.as_str(),
        steps = card.trace.len(),
        "Screening scored"
    );

    ScreeningResult {
        screening_flag,
        risk_score_0_100: risk_score,
        risk_band,
        urgency,
        audit: Audit {
            inputs_used: card.inputs_used,
            logic_trace: card.trace,
        },
    }
}

/// BMD never moves the score. A confidently extracted T-score is recorded
/// for the reader; anything else is noted as ignored.
fn note_bmd(input: &PatientInput, card: &mut Scorecard) {
    let Some(bmd) = input.bmd.as_ref().filter(|bmd| bmd.available) else {
        return;
    };

    match (bmd.femoral_neck_t_score, bmd.extraction_confidence_0_1) {
        (Some(t_score), Some(confidence)) if confidence >= BMD_MIN_CONFIDENCE => {
            card.use_input("bmd");
            let relation = if t_score <= BMD_OSTEOPOROTIC_T_SCORE {
                "at or below"
            } else {
                "above"
            };
            card.note(
                "context_bmd",
                format!(
                    "femoral neck T-score {t_score:.1} {relation} {BMD_OSTEOPOROTIC_T_SCORE:.1} \
                     (confidence {confidence:.2}, context only)"
                ),
            );
        }
        _ => card.note(
            "bmd_ignored",
            "BMD missing or extracted with low confidence".to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screening::normalize::normalize;
    use crate::screening::types::{
        BmdData, ImageFindings, PatientIntake, RiskFactors, Urgency, VisionModelOutput,
    };

    fn patient(age: Option<u8>, sex: Sex, view: CxrView) -> PatientInput {
        PatientInput {
            age,
            sex,
            cxr_view: view,
            risk_factors: RiskFactors::default(),
            image_findings: ImageFindings::all_clear(),
            bmd: None,
            model_signal: None,
        }
    }

    fn has_rule(result: &ScreeningResult, rule: &str) -> bool {
        result.audit.logic_trace.iter().any(|s| s.rule == rule)
    }

    // -- Reference scenarios -------------------------------------------------

    #[test]
    fn scenario_a_older_female_without_cues() {
        let result = score(&patient(Some(72), Sex::Female, CxrView::Pa));
        assert_eq!(result.risk_score_0_100, 40);
        assert_eq!(result.risk_band, RiskBand::Moderate);
        assert_eq!(result.screening_flag, ScreeningFlag::NeedsReview);
        assert_eq!(result.urgency, Urgency::Routine);
        assert!(!has_rule(&result, "forced_review"));
    }

    #[test]
    fn scenario_b_older_male_with_vertebral_cue_and_fracture() {
        let mut input = patient(Some(80), Sex::Male, CxrView::Ap);
        input.risk_factors.prior_low_trauma_fracture = TriState::Yes;
        input.image_findings.vertebral_wedge_or_compression_suspected = TriState::Yes;

        let result = score(&input);
        assert_eq!(result.risk_score_0_100, 85);
        assert_eq!(result.risk_band, RiskBand::VeryHigh);
        assert_eq!(result.screening_flag, ScreeningFlag::Flag);
        assert_eq!(result.urgency, Urgency::Priority);
    }

    #[test]
    fn scenario_c_missing_demographics_forces_review_and_floor() {
        let result = score(&patient(None, Sex::Unknown, CxrView::Unknown));
        assert_eq!(result.risk_score_0_100, 10);
        assert_eq!(result.screening_flag, ScreeningFlag::NeedsReview);
        assert_eq!(result.risk_band, RiskBand::Moderate);
        assert_eq!(result.urgency, Urgency::Routine);
        assert!(has_rule(&result, "band_floor"));
        assert!(!result.audit.inputs_used.contains(&"age".to_string()));
    }

    #[test]
    fn scenario_d_young_female_without_cues() {
        let result = score(&patient(Some(30), Sex::Female, CxrView::Pa));
        assert_eq!(result.risk_score_0_100, 10);
        assert_eq!(result.risk_band, RiskBand::Low);
        assert_eq!(result.screening_flag, ScreeningFlag::NoFlag);
        assert_eq!(result.urgency, Urgency::Routine);
    }

    // -- Point rules ---------------------------------------------------------

    #[test]
    fn age_50_to_64_adds_ten() {
        let result = score(&patient(Some(55), Sex::Male, CxrView::Pa));
        assert_eq!(result.risk_score_0_100, 20);
        let result = score(&patient(Some(64), Sex::Male, CxrView::Pa));
        assert_eq!(result.risk_score_0_100, 20);
        let result = score(&patient(Some(65), Sex::Male, CxrView::Pa));
        assert_eq!(result.risk_score_0_100, 30);
    }

    #[test]
    fn female_bonus_needs_age_50() {
        assert_eq!(score(&patient(Some(49), Sex::Female, CxrView::Pa)).risk_score_0_100, 10);
        assert_eq!(score(&patient(Some(50), Sex::Female, CxrView::Pa)).risk_score_0_100, 30);
        assert_eq!(score(&patient(Some(50), Sex::Other, CxrView::Pa)).risk_score_0_100, 20);
    }

    #[test]
    fn other_sex_is_not_missing() {
        let result = score(&patient(Some(50), Sex::Other, CxrView::Pa));
        assert!(!has_rule(&result, "sex_missing"));
        assert!(!has_rule(&result, "forced_review"));
        assert!(result.audit.inputs_used.contains(&"sex".to_string()));
    }

    #[test]
    fn each_cue_adds_its_weight() {
        let base = patient(Some(40), Sex::Male, CxrView::Pa);

        let mut input = base.clone();
        input.image_findings.diffuse_bone_demineralization_suspected = TriState::Yes;
        assert_eq!(score(&input).risk_score_0_100, 25);

        let mut input = base.clone();
        input.image_findings.rib_or_clavicle_cortical_thinning_suspected = TriState::Yes;
        let result = score(&input);
        assert_eq!(result.risk_score_0_100, 20);
        assert_eq!(result.screening_flag, ScreeningFlag::NeedsReview);

        let mut input = base;
        input.image_findings.vertebral_wedge_or_compression_suspected = TriState::Yes;
        let result = score(&input);
        assert_eq!(result.risk_score_0_100, 45);
        assert_eq!(result.screening_flag, ScreeningFlag::Flag);
        assert_eq!(result.urgency, Urgency::Priority);
    }

    #[test]
    fn weighted_risk_factors() {
        let mut input = patient(Some(40), Sex::Male, CxrView::Pa);
        input.risk_factors.prior_low_trauma_fracture = TriState::Yes;
        input.risk_factors.long_term_glucocorticoids = TriState::Yes;
        let result = score(&input);
        assert_eq!(result.risk_score_0_100, 45);
        assert_eq!(result.risk_band, RiskBand::Moderate);
    }

    #[test]
    fn informational_factors_carry_no_points_but_are_audited() {
        let mut input = patient(Some(40), Sex::Female, CxrView::Pa);
        input.risk_factors = RiskFactors {
            postmenopausal: TriState::Yes,
            rheumatoid_arthritis: TriState::Yes,
            low_body_weight: TriState::Yes,
            smoking: TriState::Yes,
            parental_hip_fracture: TriState::Yes,
            alcohol_high: TriState::Yes,
            secondary_osteoporosis: TriState::No,
            ..Default::default()
        };
        let result = score(&input);
        assert_eq!(result.risk_score_0_100, 10);
        assert!(result
            .audit
            .inputs_used
            .contains(&"risk_factors.smoking".to_string()));
        assert!(result
            .audit
            .inputs_used
            .contains(&"risk_factors.postmenopausal".to_string()));
        assert!(has_rule(&result, "context_secondary_osteoporosis"));
    }

    #[test]
    fn clamp_is_traced_and_replayable() {
        let mut input = patient(Some(90), Sex::Female, CxrView::Pa);
        input.image_findings.vertebral_wedge_or_compression_suspected = TriState::Yes;
        input.image_findings.diffuse_bone_demineralization_suspected = TriState::Yes;
        input.image_findings.rib_or_clavicle_cortical_thinning_suspected = TriState::Yes;
        input.risk_factors.prior_low_trauma_fracture = TriState::Yes;
        input.risk_factors.long_term_glucocorticoids = TriState::Yes;

        let result = score(&input);
        assert_eq!(result.risk_score_0_100, 100);
        assert!(has_rule(&result, "clamp"));
        assert_eq!(result.audit.replay(), 100);
    }

    // -- Uncertainty and forced review --------------------------------------

    #[test]
    fn two_uncertain_cues_escalate() {
        let mut input = patient(Some(30), Sex::Female, CxrView::Pa);
        input.image_findings.diffuse_bone_demineralization_suspected = TriState::Unknown;
        input.image_findings.rib_or_clavicle_cortical_thinning_suspected = TriState::Unknown;

        let result = score(&input);
        assert_eq!(result.risk_score_0_100, 20);
        assert_eq!(result.screening_flag, ScreeningFlag::NeedsReview);
        assert_eq!(result.risk_band, RiskBand::Moderate);
        assert!(has_rule(&result, "uncertainty_escalation"));
    }

    #[test]
    fn single_uncertain_cue_on_good_image_only_blocks_no_flag() {
        let mut input = patient(Some(30), Sex::Female, CxrView::Pa);
        input.image_findings.rib_or_clavicle_cortical_thinning_suspected = TriState::Unknown;

        let result = score(&input);
        assert_eq!(result.risk_score_0_100, 10);
        assert_eq!(result.screening_flag, ScreeningFlag::NeedsReview);
        assert_eq!(result.risk_band, RiskBand::Low);
        assert!(!has_rule(&result, "forced_review"));
    }

    #[test]
    fn poor_image_with_uncertain_cue_forces_review() {
        let mut input = patient(Some(30), Sex::Female, CxrView::Pa);
        input.image_findings.image_quality = ImageQuality::Poor;
        input.image_findings.rib_or_clavicle_cortical_thinning_suspected = TriState::Unknown;

        let result = score(&input);
        assert_eq!(result.screening_flag, ScreeningFlag::NeedsReview);
        assert_eq!(result.risk_band, RiskBand::Moderate);
        assert!(result
            .audit
            .inputs_used
            .contains(&"image_findings.image_quality".to_string()));
    }

    #[test]
    fn unknown_image_quality_with_uncertain_cue_forces_review() {
        let mut input = patient(Some(30), Sex::Female, CxrView::Pa);
        input.image_findings.image_quality = ImageQuality::Unknown;
        input.image_findings.rib_or_clavicle_cortical_thinning_suspected = TriState::Unknown;

        let result = score(&input);
        assert_eq!(result.risk_score_0_100, 10);
        assert_eq!(result.screening_flag, ScreeningFlag::NeedsReview);
        assert_eq!(result.risk_band, RiskBand::Moderate);
        assert!(has_rule(&result, "forced_review"));
        assert!(has_rule(&result, "band_floor"));
        assert!(result
            .audit
            .inputs_used
            .contains(&"image_findings.image_quality".to_string()));
    }

    #[test]
    fn limited_image_quality_does_not_force_review() {
        let mut input = patient(Some(30), Sex::Female, CxrView::Pa);
        input.image_findings.image_quality = ImageQuality::Limited;
        input.image_findings.rib_or_clavicle_cortical_thinning_suspected = TriState::Unknown;

        let result = score(&input);
        assert_eq!(result.risk_score_0_100, 10);
        assert_eq!(result.risk_band, RiskBand::Low);
        assert_eq!(result.screening_flag, ScreeningFlag::NeedsReview);
        assert!(!has_rule(&result, "forced_review"));
        assert!(!result
            .audit
            .inputs_used
            .contains(&"image_findings.image_quality".to_string()));
    }

    #[test]
    fn poor_image_without_uncertain_cues_is_not_forced() {
        let mut input = patient(Some(30), Sex::Female, CxrView::Pa);
        input.image_findings.image_quality = ImageQuality::Poor;
        let result = score(&input);
        assert_eq!(result.screening_flag, ScreeningFlag::NoFlag);
    }

    #[test]
    fn forced_review_overrides_flag() {
        let mut input = patient(Some(80), Sex::Female, CxrView::Unknown);
        input.image_findings.vertebral_wedge_or_compression_suspected = TriState::Yes;
        let result = score(&input);
        assert_eq!(result.screening_flag, ScreeningFlag::NeedsReview);
        assert_eq!(result.risk_band, RiskBand::VeryHigh);
        assert_eq!(result.urgency, Urgency::Priority);
    }

    #[test]
    fn absent_findings_block_escalates() {
        let input = normalize(PatientIntake {
            age: Some(60),
            sex: Some(Sex::Male),
            cxr_view: Some(CxrView::Pa),
            ..Default::default()
        });
        let result = score(&input);
        assert_eq!(result.risk_score_0_100, 30);
        assert_eq!(result.screening_flag, ScreeningFlag::NeedsReview);
    }

    // -- Context-only inputs -------------------------------------------------

    #[test]
    fn confident_bmd_is_context_only() {
        let mut input = patient(Some(72), Sex::Female, CxrView::Pa);
        input.bmd = Some(BmdData {
            available: true,
            femoral_neck_t_score: Some(-2.8),
            extraction_confidence_0_1: Some(0.92),
        });
        let result = score(&input);
        assert_eq!(result.risk_score_0_100, 40);
        assert!(result.audit.inputs_used.contains(&"bmd".to_string()));
        let step = result
            .audit
            .logic_trace
            .iter()
            .find(|s| s.rule == "context_bmd")
            .unwrap();
        assert!(step.detail.contains("at or below"));
    }

    #[test]
    fn low_confidence_bmd_is_ignored() {
        let mut input = patient(Some(72), Sex::Female, CxrView::Pa);
        input.bmd = Some(BmdData {
            available: true,
            femoral_neck_t_score: Some(-2.8),
            extraction_confidence_0_1: Some(0.5),
        });
        let result = score(&input);
        assert!(!result.audit.inputs_used.contains(&"bmd".to_string()));
        assert!(has_rule(&result, "bmd_ignored"));
    }

    #[test]
    fn model_signal_is_context_only() {
        let mut input = patient(Some(72), Sex::Female, CxrView::Pa);
        input.model_signal = Some(VisionModelOutput {
            model_name: "cxr-osteoflag-v0".into(),
            model_risk_score_0_1: 0.91,
            model_uncertainty_0_1: 0.1,
        });
        let result = score(&input);
        assert_eq!(result.risk_score_0_100, 40);
        assert!(has_rule(&result, "context_model_signal"));
    }

    // -- Properties ----------------------------------------------------------

    fn all_inputs() -> Vec<PatientInput> {
        let tri = [TriState::Yes, TriState::No, TriState::Unknown];
        let mut inputs = Vec::new();
        for age in [None, Some(30), Some(55), Some(70), Some(120)] {
            for sex in [Sex::Female, Sex::Male, Sex::Unknown] {
                for v in tri {
                    for d in tri {
                        for r in tri {
                            for fracture in [TriState::Yes, TriState::No] {
                                let mut input = patient(age, sex, CxrView::Pa);
                                input.image_findings.vertebral_wedge_or_compression_suspected = v;
                                input.image_findings.diffuse_bone_demineralization_suspected = d;
                                input
                                    .image_findings
                                    .rib_or_clavicle_cortical_thinning_suspected = r;
                                input.risk_factors.prior_low_trauma_fracture = fracture;
                                input.risk_factors.long_term_glucocorticoids = fracture;
                                input.risk_factors.postmenopausal = TriState::Yes;
                                inputs.push(input);
                            }
                        }
                    }
                }
            }
        }
        inputs
    }

    #[test]
    fn score_always_in_range_and_replayable() {
        for input in all_inputs() {
            let result = score(&input);
            assert!(result.risk_score_0_100 <= 100);
            assert_eq!(result.audit.replay(), i32::from(result.risk_score_0_100));
        }
    }

    #[test]
    fn band_follows_score_unless_floored() {
        for input in all_inputs() {
            let result = score(&input);
            let computed = band_for_score(result.risk_score_0_100);
            if result.screening_flag == ScreeningFlag::NeedsReview && computed == RiskBand::Low {
                assert!(result.risk_band == computed || result.risk_band == RiskBand::Moderate);
            } else {
                assert_eq!(result.risk_band, computed);
            }
        }
    }

    #[test]
    fn male_postmenopausal_never_used() {
        for input in all_inputs().into_iter().filter(|i| i.sex != Sex::Female) {
            let result = score(&input);
            assert!(!result
                .audit
                .inputs_used
                .contains(&"risk_factors.postmenopausal".to_string()));
            assert!(!has_rule(&result, "context_postmenopausal"));
        }
    }

    #[test]
    fn vertebral_cue_is_monotonic() {
        for input in all_inputs() {
            let mut with = input.clone();
            with.image_findings.vertebral_wedge_or_compression_suspected = TriState::Yes;
            let mut without = input;
            without.image_findings.vertebral_wedge_or_compression_suspected = TriState::No;
            assert!(score(&with).risk_score_0_100 >= score(&without).risk_score_0_100);
        }
    }

    #[test]
    fn two_unknown_cues_always_need_review_and_never_low() {
        for input in all_inputs()
            .into_iter()
            .filter(|i| i.image_findings.uncertain_cue_count() >= 2)
        {
            let result = score(&input);
            assert_eq!(result.screening_flag, ScreeningFlag::NeedsReview);
            assert_ne!(result.risk_band, RiskBand::Low);
        }
    }

    #[test]
    fn scoring_is_deterministic() {
        for input in all_inputs().into_iter().take(50) {
            assert_eq!(score(&input), score(&input));
        }
    }
}
