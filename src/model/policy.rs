use serde::Serialize;

pub const DEFAULT_MIN_GRADE: f64 = 0.0;
pub const DEFAULT_MAX_GRADE: f64 = 100.0;
pub const DEFAULT_PASSING_GRADE: f64 = 55.0;

/// Grade bounds and the failing threshold in force for one run.
///
/// Built once from the command line and lent to validation and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradePolicy {
    min_grade: f64,
    max_grade: f64,
    passing_grade: f64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PolicyError {
    #[error("grade bounds must be finite (min={min}, max={max})")]
    NonFiniteBounds { min: f64, max: f64 },
    #[error("minimum grade {min} must be lower than maximum grade {max}")]
    InvertedBounds { min: f64, max: f64 },
    #[error("passing grade {passing} must lie within [{min}, {max}]")]
    PassingOutOfRange { passing: f64, min: f64, max: f64 },
}

impl GradePolicy {
    pub fn new(min_grade: f64, max_grade: f64, passing_grade: f64) -> Result<Self, PolicyError> {
        if !min_grade.is_finite() || !max_grade.is_finite() {
            return Err(PolicyError::NonFiniteBounds {
                min: min_grade,
                max: max_grade,
            });
        }
        if min_grade >= max_grade {
            return Err(PolicyError::InvertedBounds {
                min: min_grade,
                max: max_grade,
            });
        }
        // NaN fails both comparisons, so test the accepted range instead.
        if !(passing_grade >= min_grade && passing_grade <= max_grade) {
            return Err(PolicyError::PassingOutOfRange {
                passing: passing_grade,
                min: min_grade,
                max: max_grade,
            });
        }
        Ok(Self {
            min_grade,
            max_grade,
            passing_grade,
        })
    }

    pub fn standard() -> Self {
        Self {
            min_grade: DEFAULT_MIN_GRADE,
            max_grade: DEFAULT_MAX_GRADE,
            passing_grade: DEFAULT_PASSING_GRADE,
        }
    }

    pub fn min_grade(&self) -> f64 {
        self.min_grade
    }

    pub fn max_grade(&self) -> f64 {
        self.max_grade
    }

    pub fn passing_grade(&self) -> f64 {
        self.passing_grade
    }

    /// A grade equal to the passing threshold counts as failing.
    pub fn is_failing(&self, grade: f64) -> bool {
        grade <= self.passing_grade
    }
}

impl Default for GradePolicy {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/policy.rs"]
mod tests;
