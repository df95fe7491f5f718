//! Colored console banner for the aggregate assessment.

use crate::risk::{RiskAssessment, RiskLevel};
use colored::{ColoredString, Colorize};

/// Render the assessment banner. Rendering is separate from printing so
/// tests can inspect the text.
pub fn render_assessment(project_name: &str, assessment: &RiskAssessment) -> String {
    let rule = "=".repeat(70);
    let mut out = String::new();

    out.push_str(&format!("{rule}\n"));
    out.push_str(&format!(
        "INTEGRITY RISK ASSESSMENT - {}\n",
        project_name.to_uppercase()
    ));
    out.push_str(&format!("{rule}\n"));
    out.push_str(&format!("Risk Level: {}\n", level_label(assessment.risk_level)));
    if let Some(score) = assessment.verification_score {
        out.push_str(&format!(
            "Average Verification Score: {:.2}%\n",
            score * 100.0
        ));
    }
    out.push_str(&format!("Total Claims: {}\n", assessment.total_claims));
    for (category, count) in assessment.evidence_breakdown.counts() {
        out.push_str(&format!("  - {category:?}: {count}\n"));
    }
    out.push_str(&format!("Risk Flags: {}\n", assessment.risk_flags_count));
    out.push_str(&format!("Recommendation: {}\n", assessment.recommendation));
    out.push_str(&format!("{rule}\n"));

    out
}

pub fn print_assessment(project_name: &str, assessment: &RiskAssessment) {
    println!("{}", render_assessment(project_name, assessment));
}

fn level_label(level: RiskLevel) -> ColoredString {
    match level {
        RiskLevel::Low => level.as_str().green().bold(),
        RiskLevel::Moderate => level.as_str().yellow().bold(),
        RiskLevel::High | RiskLevel::Critical => level.as_str().red().bold(),
        RiskLevel::Unknown => level.as_str().dimmed(),
    }
}
