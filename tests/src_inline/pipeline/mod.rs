use std::io::Cursor;

use super::*;

fn session(input: &str, format: ReportFormat) -> (Result<GradeReport, PipelineError>, String) {
    let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let result = run_session(&mut console, &GradePolicy::standard(), format);
    let (_, out) = console.into_parts();
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_full_session_transcript() {
    let (result, out) = session("2\nAnn\n60\n50\nBo\n55\n90\n", ReportFormat::Text);
    let report = result.unwrap();
    assert_eq!(report.students.len(), 2);

    let expected = "Enter the number of students: \n\
Enter details for student 1:\n\
Enter student's name: Enter English grade: Enter Math grade: \n\
Enter details for student 2:\n\
Enter student's name: Enter English grade: Enter Math grade: \n\
Student Information:\n\
Student Ann, Best Grade: 60.00, Average Grade: 55.00\n\
Student Bo, Best Grade: 90.00, Average Grade: 72.50\n\
\nAverage grades per subject:\n\
English: 57.50\n\
Math: 70.00\n\
\nOverall average grade across all subjects: 63.75\n\
\nFailing grades per student:\n\
Ann: 1 failing grade(s)\n\
Bo: 1 failing grade(s)\n\
\nTotal failing grades across all students: 2\n";
    assert_eq!(out, expected);
}

#[test]
fn test_session_retries_count_before_any_intake() {
    let (result, out) = session("x\n0\n-1\n1\nCy\n100\n0\n", ReportFormat::Text);
    let report = result.unwrap();
    assert_eq!(report.failing.total, 1);
    assert_eq!(out.matches("Enter the number of students: ").count(), 4);
    let last_count_error = out
        .rfind("Please enter a positive number greater than 0.")
        .unwrap();
    let first_header = out.find("Enter details for student 1:").unwrap();
    assert!(last_count_error < first_header);
}

#[test]
fn test_session_runs_once() {
    let (result, out) = session("1\nCy\n70\n80\n1\nExtra\n", ReportFormat::Text);
    assert!(result.is_ok());
    assert_eq!(out.matches("Enter the number of students: ").count(), 1);
    assert!(!out.contains("Extra"));
}

#[test]
fn test_session_eof_surfaces_input_error() {
    let (result, _) = session("2\nAnn\n60\n50\n", ReportFormat::Text);
    assert!(matches!(
        result,
        Err(PipelineError::Input(InputError::UnexpectedEof { .. }))
    ));
}

#[test]
fn test_session_json_report() {
    let (result, out) = session("1\nCy\n40\n60\n", ReportFormat::Json);
    assert_eq!(result.unwrap().failing.total, 1);
    let json_start = out.find('{').unwrap();
    let v: serde_json::Value = serde_json::from_str(&out[json_start..]).unwrap();
    assert_eq!(v["students"][0]["average"], 50.0);
}
