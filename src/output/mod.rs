//! Report renderers and the emission entry points. Every format renders
//! from the same [`IntegrityReport`] value.

pub mod json;
pub mod markdown;
pub mod terminal;

pub use json::render_json;
pub use markdown::render_markdown;
pub use terminal::{print_assessment, render_assessment};

use crate::errors::IntegrityError;
use crate::io::{ensure_dir, FileDestination, ReportDestination};
use crate::report::IntegrityReport;
use crate::session::Session;
use chrono::Utc;
use log::info;
use std::path::{Path, PathBuf};

/// Write both renderings of a report through injected destinations.
pub fn write_report(
    report: &IntegrityReport,
    json_dest: &dyn ReportDestination,
    markdown_dest: &dyn ReportDestination,
) -> Result<(), IntegrityError> {
    json_dest.write_str(&render_json(report)?)?;
    markdown_dest.write_str(&render_markdown(report))?;
    Ok(())
}

/// Emit the session's report files into `output_dir`, creating it if
/// missing. Returns the path of the JSON artifact; the Markdown
/// rendering lands next to it with the same stem.
pub fn emit_reports(session: &Session, output_dir: &Path) -> Result<PathBuf, IntegrityError> {
    let generated_at = Utc::now();
    let report = IntegrityReport::build(session, generated_at);

    ensure_dir(output_dir)?;
    let stem = format!("integrity_report_{}", generated_at.format("%Y%m%d_%H%M%S"));
    let json_path = output_dir.join(format!("{stem}.json"));
    let markdown_path = output_dir.join(format!("{stem}.md"));

    let json_dest = FileDestination::new(json_path.clone());
    let markdown_dest = FileDestination::new(markdown_path.clone());
    write_report(&report, &json_dest, &markdown_dest)?;

    info!("integrity report saved: {}", json_dest.description());
    info!("markdown report saved: {}", markdown_dest.description());
    Ok(json_path)
}
