use anyhow::Result;
use clap::Parser;
use claimcheck::cli::Cli;
use claimcheck::core::EvidenceCategory;
use claimcheck::output::{emit_reports, print_assessment};
use claimcheck::risk::assess;
use claimcheck::session::{ClaimSubmission, Session};
use std::collections::BTreeMap;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut session = Session::new(&cli.project);
    run_exemplar_analysis(&mut session)?;

    let assessment = assess(&session);
    print_assessment(session.project_name(), &assessment);

    let report_path = emit_reports(&session, &cli.output)?;
    println!("report saved: {}", report_path.display());
    Ok(())
}

/// Walk the filter through one analysis run: a pre-registered
/// hypothesis, claims across the evidence tiers, and a metric sweep.
fn run_exemplar_analysis(session: &mut Session) -> Result<()> {
    session.submit_hypothesis(
        "Colombia 1991 succeeded due to adequate popular support and institutional pathways",
        "Dixon & Landau (2025) 'Utopian Constitutionalism'",
        "The Dixon & Landau framework predicts transformative success when both support and \
         pathways are adequate. Colombia had 70% popular support (above threshold) and \
         CLI = 0.135 (open pathways).",
        true,
    )?;

    session.submit_claim(
        ClaimSubmission::new(
            "Chile 2022 plebiscite resulted in 62% rejection (38.14% approval)",
            EvidenceCategory::Verified,
            "SERVEL official election results, September 4, 2022",
        )
        .with_external_validation("Multiple news sources, international observers"),
    )?;

    session.submit_claim(
        ClaimSubmission::new(
            "Chile Constitutional Fitness CF = 0.0037",
            EvidenceCategory::Calculated,
            "chile_h2 analysis: CF = [PE × (1-Gap) × (1-CD) × SP] / (CLI + ε)",
        )
        .with_justification(
            "Low CF expected given high CLI (0.81), high Gap (0.77), and low SP (0.304)",
        ),
    )?;

    session.submit_claim(
        ClaimSubmission::new(
            "If the Chile constitution had passed, the implementation rate would be ~12%",
            EvidenceCategory::Projected,
            "Counterfactual projection based on fiscal gap analysis",
        )
        .with_limitations([
            "Assumes no budget increases",
            "Does not account for political shifts",
            "Based on 2022 fiscal capacity",
        ]),
    )?;

    let metric_values: BTreeMap<String, f64> = [
        ("Colombia".to_string(), 0.913),
        ("Chile".to_string(), 0.004),
        ("Argentina".to_string(), 0.011),
    ]
    .into();
    session.check_metric("Constitutional_Fitness", &metric_values, None);

    Ok(())
}
