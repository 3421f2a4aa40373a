//! Request validation for the mutating post operations.

use serde::Serialize;

/// A single validation failure for a named request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldViolation {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Check the fields shared by create and update.
///
/// Returns an empty list when the payload may proceed. Runs before slug
/// derivation and before any store call, so a rejected payload never
/// reaches the repository.
pub fn validate_post_fields(title: &str, content: &str) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    if title.is_empty() {
        violations.push(FieldViolation::new("title", "title must not be empty"));
    }
    if content.is_empty() {
        violations.push(FieldViolation::new("content", "content must not be empty"));
    }

    violations
}
