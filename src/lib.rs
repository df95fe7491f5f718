//! claimcheck scores the evidentiary strength of research claims made
//! during a data analysis and reports the integrity risks it finds.
//!
//! The flow: create a [`session::Session`]; submit each hypothesis and
//! claim as the analysis produces them (the heuristic checks run at
//! submission and attach advisory flags); optionally sweep computed
//! metrics for manipulation signatures; then request the aggregate
//! [`risk::RiskAssessment`] and emit the report files.
//!
//! A session is single-writer, in-memory state for one run. The checks
//! are labeled syntactic heuristics, never ground truth, and their
//! findings never block a submission.

pub mod checks;
pub mod cli;
pub mod core;
pub mod errors;
pub mod io;
pub mod output;
pub mod report;
pub mod risk;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Claim, ClaimWarning, EvidenceCategory, Hypothesis, HypothesisFlag, MetricFlag, RiskLogEntry,
    Severity,
};
pub use crate::errors::IntegrityError;
pub use crate::io::{FileDestination, MemoryDestination, ReportDestination};
pub use crate::output::{emit_reports, render_json, render_markdown, write_report};
pub use crate::report::{IntegrityReport, ReportMetadata};
pub use crate::risk::{assess, EvidenceBreakdown, RiskAssessment, RiskLevel};
pub use crate::session::{quick_check, ClaimSubmission, Session};
