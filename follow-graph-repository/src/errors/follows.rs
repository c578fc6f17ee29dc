//! Error types for the follow repository.
//! Defines specific errors that can occur during database operations on follow edges.
use thiserror::Error;

/// Represents errors that can occur within the follow repository.
#[derive(Debug, Error)]
pub enum FollowRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}
