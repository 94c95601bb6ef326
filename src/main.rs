mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::io;

use clap::Parser;
use tracing::info;

use crate::input::Console;
use crate::logging::LoggingError;
use crate::model::policy::{
    DEFAULT_MAX_GRADE, DEFAULT_MIN_GRADE, DEFAULT_PASSING_GRADE, GradePolicy, PolicyError,
};
use crate::pipeline::stage3_report::ReportFormat;
use crate::pipeline::{PipelineError, run_session};

/// Collect student grades interactively and print grade statistics.
#[derive(Debug, Clone, Parser)]
#[command(name = "kira-gradestats", version)]
struct Cli {
    /// Lowest accepted grade.
    #[arg(long, value_name = "grade", default_value_t = DEFAULT_MIN_GRADE, allow_negative_numbers = true)]
    min_grade: f64,
    /// Highest accepted grade.
    #[arg(long, value_name = "grade", default_value_t = DEFAULT_MAX_GRADE, allow_negative_numbers = true)]
    max_grade: f64,
    /// Grades at or below this value count as failing.
    #[arg(long, value_name = "grade", default_value_t = DEFAULT_PASSING_GRADE, allow_negative_numbers = true)]
    passing_grade: f64,
    /// Report rendering.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
    /// Tracing filter used when RUST_LOG is unset.
    #[arg(long, value_name = "filter", default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Clone)]
struct RunConfig {
    policy: GradePolicy,
    format: ReportFormat,
    log_level: String,
}

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("invalid grade policy: {0}")]
    Policy(#[from] PolicyError),
    #[error(transparent)]
    Logging(#[from] LoggingError),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let config = resolve_config(Cli::parse())?;
    logging::init(&config.log_level)?;
    info!(
        min_grade = config.policy.min_grade(),
        max_grade = config.policy.max_grade(),
        passing_grade = config.policy.passing_grade(),
        format = ?config.format,
        "starting grade session"
    );

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    run_session(&mut console, &config.policy, config.format)?;
    Ok(())
}

fn resolve_config(cli: Cli) -> Result<RunConfig, PolicyError> {
    let policy = GradePolicy::new(cli.min_grade, cli.max_grade, cli.passing_grade)?;
    Ok(RunConfig {
        policy,
        format: cli.format,
        log_level: cli.log_level,
    })
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
