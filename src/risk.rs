//! Aggregate risk assessment over a session's claims.

use crate::core::EvidenceCategory;
use crate::session::Session;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mean claim score at or above which each level applies, checked
/// high-to-low with first match winning.
const LOW_RISK_FLOOR: f64 = 0.85;
const MODERATE_RISK_FLOOR: f64 = 0.70;
const HIGH_RISK_FLOOR: f64 = 0.50;

/// Ordinal integrity risk scale derived from the mean claim score.
///
/// `Unknown` is the sentinel for a session holding no claims; the four
/// scored levels are only ever produced by [`RiskLevel::from_mean_score`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
    Unknown,
}

impl RiskLevel {
    /// Map a mean claim score onto the four-level scale.
    pub fn from_mean_score(mean: f64) -> RiskLevel {
        if mean >= LOW_RISK_FLOOR {
            RiskLevel::Low
        } else if mean >= MODERATE_RISK_FLOOR {
            RiskLevel::Moderate
        } else if mean >= HIGH_RISK_FLOOR {
            RiskLevel::High
        } else {
            RiskLevel::Critical
        }
    }

    /// Fixed publication-readiness recommendation for the level.
    pub fn recommendation(self) -> &'static str {
        match self {
            RiskLevel::Low => "APPROVED for publication. High integrity standards met.",
            RiskLevel::Moderate => {
                "REVISION SUGGESTED. Add more verified data sources or acknowledge limitations."
            }
            RiskLevel::High => {
                "MAJOR REVISION REQUIRED. Strengthen empirical foundation before publication."
            }
            RiskLevel::Critical => "NOT READY. Critical integrity issues must be resolved.",
            RiskLevel::Unknown => "No claims validated yet.",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Moderate => "MODERATE",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
            RiskLevel::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Claim counts per evidence tier.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvidenceBreakdown {
    pub verified: usize,
    pub calculated: usize,
    pub estimated: usize,
    pub inferred: usize,
    pub projected: usize,
}

impl EvidenceBreakdown {
    fn count(&mut self, category: EvidenceCategory) {
        match category {
            EvidenceCategory::Verified => self.verified += 1,
            EvidenceCategory::Calculated => self.calculated += 1,
            EvidenceCategory::Estimated => self.estimated += 1,
            EvidenceCategory::Inferred => self.inferred += 1,
            EvidenceCategory::Projected => self.projected += 1,
        }
    }

    /// Counts in taxonomy order, strongest evidence first.
    pub fn counts(&self) -> [(EvidenceCategory, usize); 5] {
        [
            (EvidenceCategory::Verified, self.verified),
            (EvidenceCategory::Calculated, self.calculated),
            (EvidenceCategory::Estimated, self.estimated),
            (EvidenceCategory::Inferred, self.inferred),
            (EvidenceCategory::Projected, self.projected),
        ]
    }
}

/// Aggregate integrity assessment for one session.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RiskAssessment {
    pub risk_level: RiskLevel,
    /// Mean claim trust weight; absent when the session holds no claims.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_score: Option<f64>,
    pub total_claims: usize,
    pub evidence_breakdown: EvidenceBreakdown,
    /// Hypothesis risk flags plus risk-log entries.
    pub risk_flags_count: usize,
    pub recommendation: String,
}

/// Compute the aggregate risk for a session.
///
/// Pure and idempotent: without new submissions, repeated calls yield
/// identical output. An empty session yields the `UNKNOWN` sentinel
/// instead of dividing by zero.
pub fn assess(session: &Session) -> RiskAssessment {
    let hypothesis_flags: usize = session
        .hypotheses()
        .iter()
        .map(|hypothesis| hypothesis.risk_flags().len())
        .sum();
    let risk_flags_count = hypothesis_flags + session.risk_log().len();

    let claims = session.claims();
    if claims.is_empty() {
        return RiskAssessment {
            risk_level: RiskLevel::Unknown,
            verification_score: None,
            total_claims: 0,
            evidence_breakdown: EvidenceBreakdown::default(),
            risk_flags_count,
            recommendation: RiskLevel::Unknown.recommendation().to_string(),
        };
    }

    let mut breakdown = EvidenceBreakdown::default();
    for claim in claims {
        breakdown.count(claim.category());
    }
    let mean = claims.iter().map(|claim| claim.score()).sum::<f64>() / claims.len() as f64;
    let risk_level = RiskLevel::from_mean_score(mean);

    RiskAssessment {
        risk_level,
        verification_score: Some(mean),
        total_claims: claims.len(),
        evidence_breakdown: breakdown,
        risk_flags_count,
        recommendation: risk_level.recommendation().to_string(),
    }
}
