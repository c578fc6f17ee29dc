//! Error types for the follow graph.
//! Defines specific errors that can occur while mutating and querying follow edges.
use follow_graph_repository::{FollowRepositoryError, UserRepositoryError};
use thiserror::Error;

/// Represents errors that can occur within the follow graph.
///
/// Username resolution happens before any mutation, so an operation that
/// references an unknown user fails without partial effects.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A required username was empty or missing from the request.
    #[error("Follower and followee usernames are required")]
    InvalidInput,
    #[error("User not found: {0}")]
    UserNotFound(String),
    #[error("User repository error: {0}")]
    UserStorage(#[from] UserRepositoryError),
    #[error("Follow repository error: {0}")]
    FollowStorage(#[from] FollowRepositoryError),
}
