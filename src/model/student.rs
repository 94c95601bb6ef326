use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Subject {
    English,
    Math,
}

impl Subject {
    pub const ALL: [Subject; 2] = [Subject::English, Subject::Math];

    pub fn label(self) -> &'static str {
        match self {
            Subject::English => "English",
            Subject::Math => "Math",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One student's validated intake. Fields are checked before construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRecord {
    pub name: String,
    pub english: f64,
    pub math: f64,
}

impl StudentRecord {
    pub fn new(name: impl Into<String>, english: f64, math: f64) -> Self {
        Self {
            name: name.into(),
            english,
            math,
        }
    }

    pub fn grade(&self, subject: Subject) -> f64 {
        match subject {
            Subject::English => self.english,
            Subject::Math => self.math,
        }
    }

    pub fn best(&self) -> f64 {
        self.english.max(self.math)
    }

    pub fn average(&self) -> f64 {
        (self.english + self.math) / 2.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    students: Vec<StudentRecord>,
}

impl Roster {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            students: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, record: StudentRecord) {
        self.students.push(record);
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StudentRecord> {
        self.students.iter()
    }

    pub fn as_slice(&self) -> &[StudentRecord] {
        &self.students
    }
}

impl FromIterator<StudentRecord> for Roster {
    fn from_iter<I: IntoIterator<Item = StudentRecord>>(iter: I) -> Self {
        Self {
            students: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a StudentRecord;
    type IntoIter = std::slice::Iter<'a, StudentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.students.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/student.rs"]
mod tests;
