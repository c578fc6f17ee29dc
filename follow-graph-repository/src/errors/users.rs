//! Error types for the user repository.
//! Defines specific errors that can occur during database operations on user records.
use thiserror::Error;

/// Represents errors that can occur within the user repository.
///
/// This enum consolidates error conditions specific to persisting and
/// querying user records, such as SQLx errors and unique-index rejections.
#[derive(Debug, Error)]
pub enum UserRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    /// The unique index on usernames rejected the insert.
    #[error("Username already taken: {0}")]
    UsernameTaken(String),
}
