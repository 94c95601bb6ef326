use crate::report::GradeReport;

/// Pretty-printed JSON with full-precision numbers. Key order follows the
/// struct field order.
pub fn render_report_json(report: &GradeReport) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(report)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
