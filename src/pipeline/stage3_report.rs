use std::io::{BufRead, Write};

use tracing::info;

use crate::input::Console;
use crate::model::policy::GradePolicy;
use crate::model::student::Roster;
use crate::pipeline::PipelineError;
use crate::report::json::render_report_json;
use crate::report::text::render_report_text;
use crate::report::{GradeReport, build_report};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

pub fn run_stage3<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    roster: &Roster,
    policy: &GradePolicy,
    format: ReportFormat,
) -> Result<GradeReport, PipelineError> {
    let report = build_report(roster, policy);
    match format {
        ReportFormat::Text => console.emit(&render_report_text(&report))?,
        ReportFormat::Json => console.emit(&render_report_json(&report)?)?,
    }
    info!(
        students = report.students.len(),
        failing_total = report.failing.total,
        ?format,
        "report written"
    );
    Ok(report)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_report.rs"]
mod tests;
