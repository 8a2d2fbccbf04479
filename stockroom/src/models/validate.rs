use thiserror::Error;

use super::ProductInput;

/// What the submission is for. Creation must carry stock; an edit may
/// deplete a product to zero but the form constraints otherwise match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Create,
    Edit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name is required")]
    EmptyName,
    #[error("code is required")]
    EmptyCode,
    #[error("count must be at least 1")]
    ZeroCount,
}

/// Form-level validation, applied before anything is submitted to the
/// remote resource. The store layer re-checks on its own terms.
pub fn validate(input: &ProductInput, intent: Intent) -> Result<(), ValidationError> {
    if input.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if input.code.trim().is_empty() {
        return Err(ValidationError::EmptyCode);
    }

    if intent == Intent::Create && input.count == 0 {
        return Err(ValidationError::ZeroCount);
    }

    Ok(())
}

#[cfg(test)]
pub(crate) fn sample_input(name: &str, code: &str, count: u32) -> ProductInput {
    ProductInput {
        name: name.to_owned(),
        code: code.to_owned(),
        count,
        description: None,
    }
}
