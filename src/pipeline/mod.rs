pub mod stage1_count;
pub mod stage2_roster;
pub mod stage3_report;

use std::io::{BufRead, Write};

use tracing::debug;

use crate::input::{Console, InputError};
use crate::model::policy::GradePolicy;
use crate::model::student::Roster;
use crate::report::GradeReport;
use stage1_count::run_stage1;
use stage2_roster::run_stage2;
use stage3_report::{ReportFormat, run_stage3};

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("failed to render JSON report: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug)]
enum Stage {
    AwaitCount,
    BuildRoster { count: usize },
    Report { roster: Roster },
    Done { report: GradeReport },
}

/// Drives one full session: count prompt, roster intake, then the report.
/// Rejected input loops inside each stage; only I/O failure or closed input
/// ends the session early.
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    policy: &GradePolicy,
    format: ReportFormat,
) -> Result<GradeReport, PipelineError> {
    let mut stage = Stage::AwaitCount;
    loop {
        stage = match stage {
            Stage::AwaitCount => Stage::BuildRoster {
                count: run_stage1(console)?,
            },
            Stage::BuildRoster { count } => Stage::Report {
                roster: run_stage2(console, count, policy)?,
            },
            Stage::Report { roster } => Stage::Done {
                report: run_stage3(console, &roster, policy, format)?,
            },
            Stage::Done { report } => {
                debug!("session finished");
                return Ok(report);
            }
        };
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
