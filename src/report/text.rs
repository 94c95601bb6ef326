use crate::model::student::Subject;
use crate::report::{FailingTally, GradeReport, StudentSummary, SubjectAverages, format_f64_2};

pub fn render_report_text(report: &GradeReport) -> String {
    let mut out = String::new();
    out.push_str(&render_student_section(&report.students));
    out.push_str(&render_averages_section(&report.averages));
    out.push_str(&render_failing_section(&report.failing));
    out
}

pub fn render_student_section(students: &[StudentSummary]) -> String {
    let mut out = String::from("\nStudent Information:\n");
    for s in students {
        out.push_str(&format!(
            "Student {}, Best Grade: {}, Average Grade: {}\n",
            s.name,
            format_f64_2(s.best),
            format_f64_2(s.average)
        ));
    }
    out
}

pub fn render_averages_section(averages: &SubjectAverages) -> String {
    let mut out = String::from("\nAverage grades per subject:\n");
    for subject in Subject::ALL {
        out.push_str(&format!(
            "{}: {}\n",
            subject.label(),
            format_f64_2(averages.for_subject(subject))
        ));
    }
    out.push_str(&format!(
        "\nOverall average grade across all subjects: {}\n",
        format_f64_2(averages.overall)
    ));
    out
}

pub fn render_failing_section(tally: &FailingTally) -> String {
    let mut out = String::from("\nFailing grades per student:\n");
    for s in &tally.per_student {
        out.push_str(&format!("{}: {} failing grade(s)\n", s.name, s.failing));
    }
    out.push_str(&format!(
        "\nTotal failing grades across all students: {}\n",
        tally.total
    ));
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
