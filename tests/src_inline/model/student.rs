use super::*;

#[test]
fn test_best_and_average() {
    let ann = StudentRecord::new("Ann", 60.0, 50.0);
    assert_eq!(ann.best(), 60.0);
    assert_eq!(ann.average(), 55.0);

    let bo = StudentRecord::new("Bo", 55.0, 90.0);
    assert_eq!(bo.best(), 90.0);
    assert_eq!(bo.average(), 72.5);
}

#[test]
fn test_grade_by_subject() {
    let rec = StudentRecord::new("Cy", 12.5, 99.0);
    assert_eq!(rec.grade(Subject::English), 12.5);
    assert_eq!(rec.grade(Subject::Math), 99.0);
}

#[test]
fn test_subject_order_and_labels() {
    let labels: Vec<&str> = Subject::ALL.iter().map(|s| s.label()).collect();
    assert_eq!(labels, vec!["English", "Math"]);
    assert_eq!(Subject::Math.to_string(), "Math");
}

#[test]
fn test_roster_preserves_insertion_order_and_duplicates() {
    let mut roster = Roster::with_capacity(3);
    roster.push(StudentRecord::new("Bo", 1.0, 2.0));
    roster.push(StudentRecord::new("Ann", 3.0, 4.0));
    roster.push(StudentRecord::new("Bo", 5.0, 6.0));

    assert_eq!(roster.len(), 3);
    let names: Vec<&str> = roster.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Bo", "Ann", "Bo"]);
    assert_eq!(roster.as_slice()[2].english, 5.0);
}

#[test]
fn test_empty_roster() {
    let roster = Roster::default();
    assert!(roster.is_empty());
    assert_eq!((&roster).into_iter().count(), 0);
}
