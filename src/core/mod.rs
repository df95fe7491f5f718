//! Core record types: claims, hypotheses, risk-log entries, and the
//! advisory flag codes the heuristic checks produce.
//!
//! Records are built exactly once at submission by the owning
//! [`Session`](crate::session::Session) and are immutable afterwards;
//! no field is settable after construction.

pub mod evidence;

pub use evidence::EvidenceCategory;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Risk flag attached to a hypothesis at validation time.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HypothesisFlag {
    /// Theoretical justification missing or too thin
    WeakTheory,
    /// Baseline citation missing or not citation-shaped
    NoBaseline,
    /// Hypothesis cannot be empirically tested
    NotTestable,
    /// Justification merely restates the hypothesis
    Circular,
}

impl HypothesisFlag {
    pub fn code(self) -> &'static str {
        match self {
            HypothesisFlag::WeakTheory => "WEAK_THEORY",
            HypothesisFlag::NoBaseline => "NO_BASELINE",
            HypothesisFlag::NotTestable => "NOT_TESTABLE",
            HypothesisFlag::Circular => "CIRCULAR",
        }
    }

    pub fn detail(self) -> &'static str {
        match self {
            HypothesisFlag::WeakTheory => "Insufficient theoretical justification",
            HypothesisFlag::NoBaseline => "Missing or invalid baseline citation",
            HypothesisFlag::NotTestable => "Hypothesis cannot be empirically tested",
            HypothesisFlag::Circular => "Hypothesis assumes its own conclusion",
        }
    }
}

impl fmt::Display for HypothesisFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.detail())
    }
}

/// Advisory warning attached to a claim at validation time.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimWarning {
    /// Strong assertion phrased over low-trust evidence
    WeakEvidence,
    /// No data source or code reference given
    NoSource,
    /// Projection without stated limitations
    NoLimits,
    /// Calculated claim whose source shows no derivation
    NoFormula,
}

impl ClaimWarning {
    pub fn code(self) -> &'static str {
        match self {
            ClaimWarning::WeakEvidence => "WEAK_EVIDENCE",
            ClaimWarning::NoSource => "NO_SOURCE",
            ClaimWarning::NoLimits => "NO_LIMITS",
            ClaimWarning::NoFormula => "NO_FORMULA",
        }
    }

    pub fn detail(self) -> &'static str {
        match self {
            ClaimWarning::WeakEvidence => "Strong claim based on weak evidence",
            ClaimWarning::NoSource => "Missing data source or code reference",
            ClaimWarning::NoLimits => "Projection lacks stated limitations",
            ClaimWarning::NoFormula => "Calculated claim without explicit formula",
        }
    }
}

impl fmt::Display for ClaimWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.detail())
    }
}

/// Suspicion flag raised by the metric-manipulation checker.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetricFlag {
    /// Values suspiciously clustered
    LowVariance,
    /// Values suspiciously widely and cleanly separated
    PerfectSep,
    /// Suspiciously many values are round numbers
    RoundNumbers,
}

impl MetricFlag {
    pub fn code(self) -> &'static str {
        match self {
            MetricFlag::LowVariance => "LOW_VARIANCE",
            MetricFlag::PerfectSep => "PERFECT_SEP",
            MetricFlag::RoundNumbers => "ROUND_NUMBERS",
        }
    }

    pub fn detail(self) -> &'static str {
        match self {
            MetricFlag::LowVariance => "Suspiciously uniform metric values",
            MetricFlag::PerfectSep => "Metric perfectly separates cases (too good?)",
            MetricFlag::RoundNumbers => "Suspiciously many round metric values",
        }
    }
}

impl fmt::Display for MetricFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.detail())
    }
}

/// Severity of a risk-log entry.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Hypothesis or claim findings
    Warning,
    /// Metric-manipulation findings
    Caution,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Warning => "WARNING",
            Severity::Caution => "CAUTION",
        };
        write!(f, "{label}")
    }
}

/// One checkable factual assertion with provenance.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Claim {
    id: String,
    text: String,
    category: EvidenceCategory,
    source: String,
    timestamp: DateTime<Utc>,
    score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    theoretical_justification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    external_validation: Option<String>,
    limitations: Vec<String>,
    warnings: Vec<ClaimWarning>,
}

impl Claim {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn record(
        text: String,
        category: EvidenceCategory,
        source: String,
        timestamp: DateTime<Utc>,
        theoretical_justification: Option<String>,
        external_validation: Option<String>,
        limitations: Vec<String>,
        warnings: Vec<ClaimWarning>,
    ) -> Self {
        Self {
            id: Claim::fingerprint(&text),
            score: category.weight(),
            text,
            category,
            source,
            timestamp,
            theoretical_justification,
            external_validation,
            limitations,
            warnings,
        }
    }

    /// Deterministic fingerprint of the claim text: identical text always
    /// yields the identical id. Used for deduplication and audit, not for
    /// uniqueness enforcement.
    pub fn fingerprint(text: &str) -> String {
        let digest = Sha256::digest(text.as_bytes());
        let hex: String = digest.iter().take(4).map(|b| format!("{b:02x}")).collect();
        format!("claim_{hex}")
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn category(&self) -> EvidenceCategory {
        self.category
    }

    /// Free-text provenance: file, computation, citation.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Trust weight copied from the category at creation time. Warnings
    /// are advisory metadata and never discount the score.
    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn theoretical_justification(&self) -> Option<&str> {
        self.theoretical_justification.as_deref()
    }

    pub fn external_validation(&self) -> Option<&str> {
        self.external_validation.as_deref()
    }

    pub fn limitations(&self) -> &[String] {
        &self.limitations
    }

    /// Advisory findings raised at submission.
    pub fn warnings(&self) -> &[ClaimWarning] {
        &self.warnings
    }

    /// Advisory verdict: approved when clean, use with caution otherwise.
    pub fn verdict(&self) -> &'static str {
        if self.warnings.is_empty() {
            "APPROVED"
        } else {
            "USE_WITH_CAUTION"
        }
    }
}

/// A pre-registered research conjecture, validated before the supporting
/// analysis runs.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hypothesis {
    id: String,
    text: String,
    baseline_source: String,
    theoretical_basis: String,
    testable: bool,
    timestamp: DateTime<Utc>,
    risk_flags: Vec<HypothesisFlag>,
}

impl Hypothesis {
    pub(crate) fn record(
        id: String,
        text: String,
        baseline_source: String,
        theoretical_basis: String,
        testable: bool,
        timestamp: DateTime<Utc>,
        risk_flags: Vec<HypothesisFlag>,
    ) -> Self {
        Self {
            id,
            text,
            baseline_source,
            theoretical_basis,
            testable,
            timestamp,
            risk_flags,
        }
    }

    /// Sequential label assigned by submission order (`H1`, `H2`, ...).
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn baseline_source(&self) -> &str {
        &self.baseline_source
    }

    pub fn theoretical_basis(&self) -> &str {
        &self.theoretical_basis
    }

    pub fn testable(&self) -> bool {
        self.testable
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Violation codes discovered at validation time; empty means no
    /// risk detected.
    pub fn risk_flags(&self) -> &[HypothesisFlag] {
        &self.risk_flags
    }

    pub fn is_valid(&self) -> bool {
        self.risk_flags.is_empty()
    }

    /// Advisory verdict: proceed when clean, revise theory otherwise.
    pub fn verdict(&self) -> &'static str {
        if self.risk_flags.is_empty() {
            "PROCEED"
        } else {
            "REVISE_THEORY"
        }
    }
}

/// One appended entry of a session's risk log.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskLogEntry {
    timestamp: DateTime<Utc>,
    context: String,
    level: Severity,
    messages: Vec<String>,
}

impl RiskLogEntry {
    pub(crate) fn new(
        timestamp: DateTime<Utc>,
        context: String,
        level: Severity,
        messages: Vec<String>,
    ) -> Self {
        Self {
            timestamp,
            context,
            level,
            messages,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// What was being validated when the findings fired.
    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn level(&self) -> Severity {
        self.level
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_deterministic() {
        let a = Claim::fingerprint("Chile CF = 0.004");
        let b = Claim::fingerprint("Chile CF = 0.004");
        assert_eq!(a, b);
        assert!(a.starts_with("claim_"));
        assert_eq!(a.len(), "claim_".len() + 8);
    }

    #[test]
    fn fingerprint_differs_for_different_text() {
        assert_ne!(
            Claim::fingerprint("Chile CF = 0.004"),
            Claim::fingerprint("Chile CF = 0.005")
        );
    }

    #[test]
    fn flag_codes_serialize_as_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&HypothesisFlag::WeakTheory).unwrap(),
            "\"WEAK_THEORY\""
        );
        assert_eq!(
            serde_json::to_string(&ClaimWarning::NoFormula).unwrap(),
            "\"NO_FORMULA\""
        );
        assert_eq!(
            serde_json::to_string(&MetricFlag::PerfectSep).unwrap(),
            "\"PERFECT_SEP\""
        );
        assert_eq!(serde_json::to_string(&Severity::Caution).unwrap(), "\"CAUTION\"");
    }

    #[test]
    fn flag_display_carries_code_and_detail() {
        let rendered = HypothesisFlag::Circular.to_string();
        assert!(rendered.starts_with("CIRCULAR: "));
        assert!(rendered.contains("conclusion"));
    }
}
