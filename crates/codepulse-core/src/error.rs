//! Domain-level error types.

use thiserror::Error;

/// Repository-level errors.
///
/// A missing record is not an error: lookups return `Option` instead.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
