//! This module defines the `UserRepository` trait, which provides an interface
//! for interacting with the underlying data store for user records.
//! It abstracts the database operations for persistence and retrieval.
use std::collections::HashMap;

use crate::errors::UserRepositoryError;
use follow_graph_shared::types::{User, UserId};

/// A trait that defines the interface for interacting with the user data repository.
///
/// Implementors of this trait provide methods for inserting users, looking them
/// up by username, enumerating all users, and resolving identifier sets back to
/// usernames.
#[async_trait::async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new `User` record into the repository.
    ///
    /// # Arguments
    ///
    /// * `user` - The `User` to be persisted.
    ///
    /// # Returns
    ///
    /// A `Result` indicating success, `UserRepositoryError::UsernameTaken` if
    /// the username is already registered, or another `UserRepositoryError` if
    /// the insertion fails.
    async fn insert_user(&self, user: &User) -> Result<(), UserRepositoryError>;

    /// Looks up a user by exact, case-sensitive username match.
    ///
    /// # Arguments
    ///
    /// * `username` - The username to look up.
    ///
    /// # Returns
    ///
    /// A `Result` holding `Some(User)` on a match, `None` when no user has this
    /// username, or a `UserRepositoryError` if the query fails.
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, UserRepositoryError>;

    /// Returns all users in the repository.
    ///
    /// Order is implementation-defined.
    async fn list_all_users(&self) -> Result<Vec<User>, UserRepositoryError>;

    /// Resolves a set of user identifiers to their usernames in a single batch.
    ///
    /// Identifiers without a matching record are absent from the returned map.
    ///
    /// # Arguments
    ///
    /// * `ids` - The user identifiers to resolve.
    ///
    /// # Returns
    ///
    /// A `Result` holding the id-to-username mapping, or a
    /// `UserRepositoryError` if the query fails.
    async fn usernames_by_ids(&self, ids: &[UserId]) -> Result<HashMap<UserId, String>, UserRepositoryError>;
}
