use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::input::{Console, InputError, parse_grade, parse_name};
use crate::model::policy::GradePolicy;
use crate::model::student::{Roster, StudentRecord, Subject};

pub const NAME_PROMPT: &str = "Enter student's name: ";

// Upper bound on the up-front allocation; the roster still grows to `count`.
const PREALLOC_LIMIT: usize = 1024;

pub fn prompt_grade<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    subject: Subject,
    policy: &GradePolicy,
) -> Result<f64, InputError> {
    let prompt = format!("Enter {} grade: ", subject.label());
    console.ask_until(&prompt, |raw| parse_grade(raw, policy))
}

pub fn prompt_student<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    policy: &GradePolicy,
) -> Result<StudentRecord, InputError> {
    let name = console.ask_until(NAME_PROMPT, parse_name)?;
    let english = prompt_grade(console, Subject::English, policy)?;
    let math = prompt_grade(console, Subject::Math, policy)?;
    debug!(name = %name, english, math, "student recorded");
    Ok(StudentRecord::new(name, english, math))
}

pub fn run_stage2<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    count: usize,
    policy: &GradePolicy,
) -> Result<Roster, InputError> {
    let mut roster = Roster::with_capacity(count.min(PREALLOC_LIMIT));
    for i in 1..=count {
        console.say(&format!("\nEnter details for student {i}:"))?;
        roster.push(prompt_student(console, policy)?);
    }
    info!(students = roster.len(), "roster complete");
    Ok(roster)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_roster.rs"]
mod tests;
