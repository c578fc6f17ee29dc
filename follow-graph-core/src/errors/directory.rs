//! Error types for the user directory.
//! Defines specific errors that can occur while registering and querying users.
use follow_graph_repository::UserRepositoryError;
use thiserror::Error;

/// Represents errors that can occur within the user directory.
///
/// Validation failures are detected before any mutation is attempted, so a
/// failed registration never leaves a partial record behind.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The supplied username was empty or missing.
    #[error("Username is required")]
    InvalidUsername,
    #[error("Username already registered: {0}")]
    DuplicateUsername(String),
    #[error("User repository error: {0}")]
    Storage(#[from] UserRepositoryError),
}
