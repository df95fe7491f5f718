//! Report assembly: one session snapshot becomes the single value every
//! renderer consumes, so the output formats cannot drift.

use crate::core::{Claim, EvidenceCategory, Hypothesis, RiskLogEntry};
use crate::risk::{assess, RiskAssessment};
use crate::session::Session;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Label for the risk framework the checks are drawn from.
pub const FRAMEWORK: &str = "Miyai et al. (2025) Jr. AI Scientist Risk Assessment";

/// Verified share below which the report recommends more verified
/// sources.
const VERIFIED_SHARE_FLOOR: f64 = 0.30;

/// Projected share above which the report recommends reducing reliance
/// on counterfactuals.
const PROJECTED_SHARE_CEILING: f64 = 0.20;

/// Unvalidated non-verified claims beyond this share of all claims
/// trigger the external-validation recommendation.
const UNVALIDATED_SHARE_CEILING: f64 = 0.5;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ReportMetadata {
    pub project_name: String,
    pub generated_at: DateTime<Utc>,
    /// Elapsed wall time between session start and report generation.
    pub duration: String,
    pub framework: String,
}

/// Full integrity report: metadata, the aggregate assessment, every
/// record, the risk log, and the rule-derived recommendations.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct IntegrityReport {
    pub metadata: ReportMetadata,
    pub risk_assessment: RiskAssessment,
    pub hypotheses: Vec<Hypothesis>,
    pub claims: Vec<Claim>,
    pub risk_log: Vec<RiskLogEntry>,
    pub recommendations: Vec<String>,
}

impl IntegrityReport {
    /// Snapshot the session as of `generated_at`. The instant is
    /// injected so two builds over the same session state are
    /// byte-identical.
    pub fn build(session: &Session, generated_at: DateTime<Utc>) -> IntegrityReport {
        IntegrityReport {
            metadata: ReportMetadata {
                project_name: session.project_name().to_string(),
                generated_at,
                duration: format_duration(generated_at - session.started_at()),
                framework: FRAMEWORK.to_string(),
            },
            risk_assessment: assess(session),
            hypotheses: session.hypotheses().to_vec(),
            claims: session.claims().to_vec(),
            risk_log: session.risk_log().to_vec(),
            recommendations: recommendations(session),
        }
    }
}

/// Rule-derived advice from the evidence mix and hypothesis quality.
fn recommendations(session: &Session) -> Vec<String> {
    let mut recs = Vec::new();
    let claims = session.claims();
    let total = claims.len().max(1) as f64;

    let share = |category: EvidenceCategory| {
        claims
            .iter()
            .filter(|claim| claim.category() == category)
            .count() as f64
            / total
    };

    if share(EvidenceCategory::Verified) < VERIFIED_SHARE_FLOOR {
        recs.push("Increase proportion of verified claims (currently <30%)".to_string());
    }

    if share(EvidenceCategory::Projected) > PROJECTED_SHARE_CEILING {
        recs.push("Reduce reliance on projections/counterfactuals (currently >20%)".to_string());
    }

    let unvalidated = claims
        .iter()
        .filter(|claim| {
            claim.external_validation().is_none()
                && claim.category() != EvidenceCategory::Verified
        })
        .count();
    if unvalidated as f64 > claims.len() as f64 * UNVALIDATED_SHARE_CEILING {
        recs.push("Add external validation for key claims (>50% lack validation)".to_string());
    }

    let weak_hypotheses = session
        .hypotheses()
        .iter()
        .filter(|hypothesis| !hypothesis.is_valid())
        .count();
    if weak_hypotheses > 0 {
        recs.push(format!(
            "Strengthen theoretical justification for {weak_hypotheses} hypothesis/es"
        ));
    }

    if recs.is_empty() {
        recs.push("No major improvements needed. Maintain current standards.".to_string());
    }
    recs
}

fn format_duration(elapsed: Duration) -> String {
    let millis = elapsed.num_milliseconds().max(0);
    format!("{}.{:03}s", millis / 1000, millis % 1000)
}
