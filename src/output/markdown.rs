//! Human-readable rendering of the integrity report.

use crate::report::IntegrityReport;

/// How many claims the prose rendering shows in full.
const CLAIM_SAMPLE: usize = 10;

/// Prose rendering of the report as headed sections, derived from the
/// same value as the JSON artifact.
pub fn render_markdown(report: &IntegrityReport) -> String {
    let mut out = String::new();

    out.push_str("# Integrity Assessment Report\n\n");
    out.push_str(&format!("**Project**: {}\n", report.metadata.project_name));
    out.push_str(&format!(
        "**Generated**: {}\n",
        report.metadata.generated_at.to_rfc3339()
    ));
    out.push_str(&format!("**Duration**: {}\n", report.metadata.duration));
    out.push_str(&format!("**Framework**: {}\n\n", report.metadata.framework));

    let risk = &report.risk_assessment;
    out.push_str(&format!("## Risk Level: {}\n\n", risk.risk_level));
    if let Some(score) = risk.verification_score {
        out.push_str(&format!(
            "- **Verification Score**: {:.1}%\n",
            score * 100.0
        ));
    }
    out.push_str(&format!("- **Total Claims**: {}\n", risk.total_claims));
    out.push_str(&format!("- **Risk Flags**: {}\n", risk.risk_flags_count));
    out.push_str(&format!("- **Recommendation**: {}\n\n", risk.recommendation));

    out.push_str("### Evidence Breakdown\n\n");
    for (category, count) in risk.evidence_breakdown.counts() {
        let pct = if risk.total_claims > 0 {
            count as f64 / risk.total_claims as f64 * 100.0
        } else {
            0.0
        };
        out.push_str(&format!("- **{category:?}**: {count} ({pct:.1}%)\n"));
    }

    out.push_str("\n## Recommendations\n\n");
    for recommendation in &report.recommendations {
        out.push_str(&format!("- {recommendation}\n"));
    }

    if !report.hypotheses.is_empty() {
        out.push_str(&format!("\n## Hypotheses ({})\n\n", report.hypotheses.len()));
        for hypothesis in &report.hypotheses {
            out.push_str(&format!(
                "### {}: {}\n\n",
                hypothesis.id(),
                clip(hypothesis.text(), 100)
            ));
            out.push_str(&format!("- **Baseline**: {}\n", hypothesis.baseline_source()));
            out.push_str(&format!(
                "- **Theoretical Basis**: {}\n",
                clip(hypothesis.theoretical_basis(), 200)
            ));
            if !hypothesis.risk_flags().is_empty() {
                let flags: Vec<String> = hypothesis
                    .risk_flags()
                    .iter()
                    .map(|flag| flag.to_string())
                    .collect();
                out.push_str(&format!("- **Risk Flags**: {}\n", flags.join(", ")));
            }
            out.push('\n');
        }
    }

    if !report.claims.is_empty() {
        let shown = report.claims.len().min(CLAIM_SAMPLE);
        out.push_str(&format!(
            "\n## Sample Claims (showing {shown}/{})\n\n",
            report.claims.len()
        ));
        for claim in report.claims.iter().take(CLAIM_SAMPLE) {
            out.push_str(&format!(
                "**[{}]** {}\n",
                claim.category().as_str().to_uppercase(),
                clip(claim.text(), 80)
            ));
            out.push_str(&format!("- Score: {:.2}\n", claim.score()));
            out.push_str(&format!("- Source: {}\n", clip(claim.source(), 100)));
            if !claim.warnings().is_empty() {
                let warnings: Vec<String> = claim
                    .warnings()
                    .iter()
                    .map(|warning| warning.to_string())
                    .collect();
                out.push_str(&format!("- Warnings: {}\n", warnings.join(", ")));
            }
            out.push('\n');
        }
    }

    if !report.risk_log.is_empty() {
        out.push_str(&format!("\n## Risk Log ({} entries)\n\n", report.risk_log.len()));
        for entry in &report.risk_log {
            out.push_str(&format!(
                "- `{}` [{}] {}: {}\n",
                entry.timestamp().to_rfc3339(),
                entry.level(),
                entry.context(),
                entry.messages().join("; ")
            ));
        }
    }

    out
}

/// Char-safe prefix with an ellipsis when the text was cut.
fn clip(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let prefix: String = text.chars().take(max_chars).collect();
        format!("{prefix}...")
    }
}
