//! Per-run accumulator applying the heuristic checks at submission time.

use crate::checks::{claim_warnings, hypothesis_flags, metric_flags};
use crate::core::{Claim, EvidenceCategory, Hypothesis, MetricFlag, RiskLogEntry, Severity};
use crate::errors::IntegrityError;
use crate::risk::{assess, RiskAssessment};
use chrono::{DateTime, Utc};
use log::{info, warn};
use std::collections::BTreeMap;

/// Claim inputs for [`Session::submit_claim`].
///
/// The required fields go through [`ClaimSubmission::new`]; optional
/// provenance is attached builder-style, and the session turns the
/// whole submission into an immutable [`Claim`] record.
#[derive(Clone, Debug)]
pub struct ClaimSubmission {
    text: String,
    category: EvidenceCategory,
    source: String,
    theoretical_justification: Option<String>,
    external_validation: Option<String>,
    limitations: Vec<String>,
}

impl ClaimSubmission {
    pub fn new(
        text: impl Into<String>,
        category: EvidenceCategory,
        source: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            category,
            source: source.into(),
            theoretical_justification: None,
            external_validation: None,
            limitations: Vec::new(),
        }
    }

    /// Why this result is theoretically expected.
    pub fn with_justification(mut self, justification: impl Into<String>) -> Self {
        self.theoretical_justification = Some(justification.into());
        self
    }

    /// Independent confirmation, if available.
    pub fn with_external_validation(mut self, validation: impl Into<String>) -> Self {
        self.external_validation = Some(validation.into());
        self
    }

    /// Known caveats of the claim.
    pub fn with_limitations<I, S>(mut self, limitations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.limitations = limitations.into_iter().map(Into::into).collect();
        self
    }
}

/// Accumulating store of every hypothesis and claim examined in one
/// analysis run.
///
/// The session is the single writer of its records: each record is built
/// exactly once at submission and immutable afterwards, and insertion
/// order is preserved for reporting. Duplicate claims are permitted.
/// Sharing one session across threads is unsupported; callers hold
/// exclusive access for the duration of the run.
pub struct Session {
    project_name: String,
    started_at: DateTime<Utc>,
    hypotheses: Vec<Hypothesis>,
    claims: Vec<Claim>,
    risk_log: Vec<RiskLogEntry>,
}

impl Session {
    pub fn new(project_name: impl Into<String>) -> Self {
        let project_name = project_name.into();
        info!("integrity filter initialized for project: {project_name}");
        Self {
            project_name,
            started_at: Utc::now(),
            hypotheses: Vec::new(),
            claims: Vec::new(),
            risk_log: Vec::new(),
        }
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Stored hypotheses in submission order.
    pub fn hypotheses(&self) -> &[Hypothesis] {
        &self.hypotheses
    }

    /// Stored claims in submission order.
    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    /// Every logged finding, oldest first.
    pub fn risk_log(&self) -> &[RiskLogEntry] {
        &self.risk_log
    }

    /// Validate and store a hypothesis before the supporting analysis
    /// runs. The record is stored regardless of flags; rejection is
    /// advisory and left to the caller.
    pub fn submit_hypothesis(
        &mut self,
        text: &str,
        baseline_source: &str,
        theoretical_basis: &str,
        testable: bool,
    ) -> Result<Hypothesis, IntegrityError> {
        if text.trim().is_empty() {
            return Err(IntegrityError::EmptyInput {
                field: "hypothesis text",
            });
        }

        let id = format!("H{}", self.hypotheses.len() + 1);
        let risk_flags = hypothesis_flags(text, baseline_source, theoretical_basis, testable);
        let hypothesis = Hypothesis::record(
            id.clone(),
            text.to_string(),
            baseline_source.to_string(),
            theoretical_basis.to_string(),
            testable,
            Utc::now(),
            risk_flags.clone(),
        );

        if risk_flags.is_empty() {
            info!("hypothesis {id} validated, no risks");
        } else {
            warn!("hypothesis {id}: {} risk flag(s)", risk_flags.len());
            self.log_risk(
                format!("Hypothesis {id} validation"),
                Severity::Warning,
                risk_flags.iter().map(|flag| flag.to_string()).collect(),
            );
        }

        self.hypotheses.push(hypothesis.clone());
        Ok(hypothesis)
    }

    /// Validate and store a claim with provenance. The score is fixed to
    /// the category weight; warnings are advisory metadata and never
    /// discount it.
    pub fn submit_claim(&mut self, submission: ClaimSubmission) -> Result<Claim, IntegrityError> {
        if submission.text.trim().is_empty() {
            return Err(IntegrityError::EmptyInput {
                field: "claim text",
            });
        }

        let warnings = claim_warnings(
            &submission.text,
            submission.category,
            &submission.source,
            &submission.limitations,
        );
        let claim = Claim::record(
            submission.text,
            submission.category,
            submission.source,
            Utc::now(),
            submission.theoretical_justification,
            submission.external_validation,
            submission.limitations,
            warnings.clone(),
        );

        if warnings.is_empty() {
            info!(
                "claim [{}] validated: {}",
                claim.category(),
                truncate(claim.text(), 60)
            );
        } else {
            warn!("claim [{}]: {} warning(s)", claim.category(), warnings.len());
            self.log_risk(
                format!("Claim validation: {}...", truncate(claim.text(), 50)),
                Severity::Warning,
                warnings.iter().map(|warning| warning.to_string()).collect(),
            );
        }

        self.claims.push(claim.clone());
        Ok(claim)
    }

    /// Scan one metric's values for manipulation signatures. Values are
    /// keyed by case so the log can name what was checked; the heuristics
    /// treat them as an unordered set.
    pub fn check_metric(
        &mut self,
        name: &str,
        values: &BTreeMap<String, f64>,
        expected_pattern: Option<&str>,
    ) -> Vec<MetricFlag> {
        let flags = metric_flags(&values.values().copied().collect::<Vec<_>>());
        if flags.is_empty() {
            info!("metric '{name}' appears natural");
        } else {
            warn!("metric '{name}': {} suspicion flag(s)", flags.len());
            let context = match expected_pattern {
                Some(pattern) => format!("Metric optimization check: {name} (expected: {pattern})"),
                None => format!("Metric optimization check: {name}"),
            };
            self.log_risk(
                context,
                Severity::Caution,
                flags.iter().map(|flag| flag.to_string()).collect(),
            );
        }
        flags
    }

    fn log_risk(&mut self, context: String, level: Severity, messages: Vec<String>) {
        self.risk_log
            .push(RiskLogEntry::new(Utc::now(), context, level, messages));
    }
}

/// Ad-hoc integrity check: submit each `(text, category, source)` entry
/// as a claim in a throwaway session and return the aggregate
/// assessment.
pub fn quick_check<'a, I>(entries: I) -> Result<RiskAssessment, IntegrityError>
where
    I: IntoIterator<Item = (&'a str, EvidenceCategory, &'a str)>,
{
    let mut session = Session::new("quick_check");
    for (text, category, source) in entries {
        session.submit_claim(ClaimSubmission::new(text, category, source))?;
    }
    Ok(assess(&session))
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
