//! Domain-level error types.

use thiserror::Error;

/// Repository-level errors.
///
/// An absent record is not an error at this level; lookups return
/// `Option` and the caller decides what absence means.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
