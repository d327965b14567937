use thiserror::Error;

/// A single problem found while validating a raw specification.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationIssue {
    #[error("missing required key: '{0}'")]
    MissingKey(String),

    #[error("dimension '{key}' is invalid: {value}")]
    InvalidDimension { key: String, value: String },

    #[error("dimension '{key}' is out of bounds: {value} exceeds {limit}")]
    DimensionOutOfBounds { key: String, value: f64, limit: f64 },
}

/// Aggregate validation failure.
///
/// Validation never stops at the first problem: `issues` carries every
/// violation found in one pass, and the display output enumerates them all,
/// so a caller sees the complete picture before retrying.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("spec validation failed: {}", enumerate(.issues))]
pub struct SpecValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl SpecValidationError {
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }
}

fn enumerate(issues: &[ValidationIssue]) -> String {
    let mut out = String::new();
    for (i, issue) in issues.iter().enumerate() {
        if i > 0 {
            out.push_str("; ");
        }
        out.push_str(&issue.to_string());
    }
    out
}
