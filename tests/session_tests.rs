use claimcheck::{
    assess, quick_check, ClaimSubmission, ClaimWarning, EvidenceCategory, HypothesisFlag,
    IntegrityError, MetricFlag, RiskLevel, Session,
};
use std::collections::BTreeMap;

#[test]
fn evidence_weights_follow_the_trust_order() {
    let weights: Vec<f64> = EvidenceCategory::ALL.iter().map(|c| c.weight()).collect();
    assert_eq!(weights, vec![1.0, 0.85, 0.65, 0.45, 0.25]);
    for pair in weights.windows(2) {
        assert!(pair[0] > pair[1], "weights must strictly decrease");
    }
}

#[test]
fn claim_score_equals_category_weight_regardless_of_warnings() {
    let mut session = Session::new("integration");
    let claim = session
        .submit_claim(ClaimSubmission::new(
            "This undoubtedly proves the projected outcome",
            EvidenceCategory::Projected,
            "",
        ))
        .unwrap();

    assert_eq!(claim.warnings().len(), 3, "expected every warning to fire");
    assert_eq!(claim.score(), 0.25);
}

#[test]
fn empty_theoretical_basis_always_flags_weak_theory() {
    let mut session = Session::new("integration");
    let hypothesis = session
        .submit_hypothesis(
            "Support levels predict constitutional durability",
            "Dixon & Landau (2025) 'Utopian Constitutionalism'",
            "",
            true,
        )
        .unwrap();
    assert!(hypothesis.risk_flags().contains(&HypothesisFlag::WeakTheory));
}

#[test]
fn baseline_without_year_always_flags_no_baseline() {
    let mut session = Session::new("integration");
    let hypothesis = session
        .submit_hypothesis(
            "Support levels predict constitutional durability",
            "no citation here",
            "Comparative constitutional research links durable charters to sustained support.",
            true,
        )
        .unwrap();
    assert!(hypothesis.risk_flags().contains(&HypothesisFlag::NoBaseline));
}

#[test]
fn projected_claim_without_limitations_flags_no_limits() {
    let mut session = Session::new("integration");
    let flagged = session
        .submit_claim(ClaimSubmission::new(
            "Implementation would reach 12% by 2030",
            EvidenceCategory::Projected,
            "counterfactual fiscal projection",
        ))
        .unwrap();
    assert!(flagged.warnings().contains(&ClaimWarning::NoLimits));

    let documented = session
        .submit_claim(
            ClaimSubmission::new(
                "Implementation would reach 12% by 2030",
                EvidenceCategory::Projected,
                "counterfactual fiscal projection",
            )
            .with_limitations(["assumes stable budgets"]),
        )
        .unwrap();
    assert!(!documented.warnings().contains(&ClaimWarning::NoLimits));
}

#[test]
fn clustered_metric_values_flag_low_variance() {
    let mut session = Session::new("integration");
    let values: BTreeMap<String, f64> = [
        ("A".to_string(), 0.90),
        ("B".to_string(), 0.91),
        ("C".to_string(), 0.89),
    ]
    .into();
    let flags = session.check_metric("CF", &values, None);
    assert_eq!(flags, vec![MetricFlag::LowVariance]);
}

#[test]
fn three_tier_mean_at_the_moderate_boundary() {
    let mut session = Session::new("integration");
    for (text, category) in [
        ("Official turnout recorded at 85%", EvidenceCategory::Verified),
        ("Gap ratio computed from spending series", EvidenceCategory::Calculated),
        ("Post-2030 lock-in trajectory", EvidenceCategory::Projected),
    ] {
        session
            .submit_claim(
                ClaimSubmission::new(text, category, "series = spending / promises")
                    .with_limitations(["projection horizon uncertainty"]),
            )
            .unwrap();
    }

    let assessment = assess(&session);
    let mean = assessment.verification_score.unwrap();
    assert!((mean - 0.70).abs() < 1e-9, "mean was {mean}");
    assert_eq!(assessment.risk_level, RiskLevel::Moderate);
}

#[test]
fn empty_session_returns_the_unknown_sentinel() {
    let session = Session::new("integration");
    let assessment = assess(&session);
    assert_eq!(assessment.risk_level, RiskLevel::Unknown);
    assert_eq!(assessment.verification_score, None);
    assert_eq!(assessment.total_claims, 0);
    assert_eq!(assessment.recommendation, "No claims validated yet.");
}

#[test]
fn assessment_is_idempotent_between_submissions() {
    let mut session = Session::new("integration");
    session
        .submit_claim(ClaimSubmission::new(
            "Registry reports 34 time points",
            EvidenceCategory::Verified,
            "official registry export",
        ))
        .unwrap();

    let first = assess(&session);
    let second = assess(&session);
    assert_eq!(first, second);
}

#[test]
fn risk_flags_count_sums_hypothesis_flags_and_log_entries() {
    let mut session = Session::new("integration");
    // two hypothesis flags (weak theory + no baseline), one log entry
    session
        .submit_hypothesis("Gaps narrow over decades", "", "", true)
        .unwrap();
    // one claim warning, one more log entry
    session
        .submit_claim(ClaimSubmission::new(
            "Counterfactual rate near 12%",
            EvidenceCategory::Projected,
            "projection notes",
        ))
        .unwrap();

    let assessment = assess(&session);
    assert_eq!(assessment.risk_flags_count, 2 + 2);
}

#[test]
fn input_errors_do_not_store_partial_records() {
    let mut session = Session::new("integration");
    let err = session
        .submit_claim(ClaimSubmission::new("", EvidenceCategory::Verified, "src"))
        .unwrap_err();
    assert!(matches!(err, IntegrityError::EmptyInput { .. }));
    assert!(session.claims().is_empty());
    assert!(session.risk_log().is_empty());
}

#[test]
fn quick_check_scores_ad_hoc_claims() {
    let assessment = quick_check([
        (
            "Election results published by the registry",
            EvidenceCategory::Verified,
            "official bulletin",
        ),
        (
            "Spending share derived from national accounts",
            EvidenceCategory::Verified,
            "accounts table",
        ),
    ])
    .unwrap();

    assert_eq!(assessment.risk_level, RiskLevel::Low);
    assert_eq!(assessment.total_claims, 2);
    assert_eq!(assessment.evidence_breakdown.verified, 2);
}
