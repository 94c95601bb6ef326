pub mod json;
pub mod text;

use serde::Serialize;

use crate::model::policy::GradePolicy;
use crate::model::student::{Roster, Subject};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentSummary {
    pub name: String,
    pub best: f64,
    pub average: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectAverages {
    pub english: f64,
    pub math: f64,
    pub overall: f64,
}

impl SubjectAverages {
    pub fn for_subject(&self, subject: Subject) -> f64 {
        match subject {
            Subject::English => self.english,
            Subject::Math => self.math,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentFailing {
    pub name: String,
    pub failing: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailingTally {
    pub per_student: Vec<StudentFailing>,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeReport {
    pub students: Vec<StudentSummary>,
    pub averages: SubjectAverages,
    pub failing: FailingTally,
    pub policy: GradePolicy,
}

pub fn build_report(roster: &Roster, policy: &GradePolicy) -> GradeReport {
    GradeReport {
        students: summarize_students(roster),
        averages: subject_averages(roster),
        failing: failing_tally(roster, policy),
        policy: *policy,
    }
}

pub fn summarize_students(roster: &Roster) -> Vec<StudentSummary> {
    roster
        .iter()
        .map(|s| StudentSummary {
            name: s.name.clone(),
            best: s.best(),
            average: s.average(),
        })
        .collect()
}

pub fn subject_averages(roster: &Roster) -> SubjectAverages {
    if roster.is_empty() {
        return SubjectAverages {
            english: 0.0,
            math: 0.0,
            overall: 0.0,
        };
    }
    let mut english_sum = 0f64;
    let mut math_sum = 0f64;
    for s in roster {
        english_sum += s.english;
        math_sum += s.math;
    }
    let n = roster.len() as f64;
    SubjectAverages {
        english: english_sum / n,
        math: math_sum / n,
        overall: (english_sum + math_sum) / (n * Subject::ALL.len() as f64),
    }
}

pub fn failing_tally(roster: &Roster, policy: &GradePolicy) -> FailingTally {
    let mut per_student = Vec::with_capacity(roster.len());
    let mut total = 0usize;
    for s in roster {
        let mut failing = 0u8;
        for subject in Subject::ALL {
            if policy.is_failing(s.grade(subject)) {
                failing += 1;
            }
        }
        total += usize::from(failing);
        per_student.push(StudentFailing {
            name: s.name.clone(),
            failing,
        });
    }
    FailingTally { per_student, total }
}

pub fn format_f64_2(v: f64) -> String {
    format!("{:.2}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
