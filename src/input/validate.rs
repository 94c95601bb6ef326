use crate::model::policy::GradePolicy;

/// A rejected line of user input. `Display` is the message shown before the
/// prompt repeats.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid input. Please enter a valid number between {min} and {max}.")]
    GradeNotNumeric { min: f64, max: f64 },
    #[error(
        "Invalid input. {} Please enter a number between {min} and {max}.",
        lower_bound_phrase(.min)
    )]
    GradeBelowMin { value: f64, min: f64, max: f64 },
    #[error("Invalid input. Grade cannot exceed {max}. Please enter a number between {min} and {max}.")]
    GradeAboveMax { value: f64, min: f64, max: f64 },
    #[error("Invalid input. Name cannot be empty or a digit. Please enter a valid name.")]
    InvalidName,
    #[error("Invalid input. Please enter a valid integer.")]
    CountNotInteger,
    #[error("Please enter a positive number greater than 0.")]
    CountNotPositive { value: i64 },
}

fn lower_bound_phrase(min: &f64) -> String {
    if *min == 0.0 {
        "Grade cannot be negative.".to_string()
    } else {
        format!("Grade cannot be below {min}.")
    }
}

pub fn parse_grade(raw: &str, policy: &GradePolicy) -> Result<f64, ValidationError> {
    let (min, max) = (policy.min_grade(), policy.max_grade());
    let value = match raw.trim().parse::<f64>() {
        Ok(v) if !v.is_nan() => v,
        _ => return Err(ValidationError::GradeNotNumeric { min, max }),
    };
    if value < min {
        return Err(ValidationError::GradeBelowMin { value, min, max });
    }
    if value > max {
        return Err(ValidationError::GradeAboveMax { value, min, max });
    }
    Ok(value)
}

/// Returns the trimmed name. Rejects blank names and names made only of digits.
pub fn parse_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() || name.chars().all(char::is_numeric) {
        return Err(ValidationError::InvalidName);
    }
    Ok(name.to_string())
}

pub fn parse_count(raw: &str) -> Result<usize, ValidationError> {
    let value = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::CountNotInteger)?;
    if value <= 0 {
        return Err(ValidationError::CountNotPositive { value });
    }
    usize::try_from(value).map_err(|_| ValidationError::CountNotInteger)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/validate.rs"]
mod tests;
