//! This module defines the `UserDirectory`, the component that owns user
//! identity: registration, lookup by username, and enumeration.
//! It utilizes a `UserRepository` to interact with the underlying data store.
use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::errors::DirectoryError;
use follow_graph_repository::{UserRepository, UserRepositoryError};
use follow_graph_shared::types::{User, UserId};

/// `UserDirectory` owns user records and their registration.
///
/// Usernames are unique and immutable once registered. The directory holds no
/// state of its own; everything lives behind the repository.
pub struct UserDirectory {
    users: Arc<dyn UserRepository>,
}

impl UserDirectory {
    /// Creates a new `UserDirectory` instance.
    ///
    /// # Arguments
    ///
    /// * `users` - An `Arc` trait object that implements `UserRepository`,
    ///   providing the interface for user persistence.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Registers a new user and returns its generated identity.
    ///
    /// Fails with `DirectoryError::InvalidUsername` when the username is
    /// empty and with `DirectoryError::DuplicateUsername` when it is already
    /// registered. The duplicate check runs before the insert; a concurrent
    /// registration that slips past it is caught by the storage layer's
    /// unique index and reported as the same error.
    ///
    /// # Arguments
    ///
    /// * `username` - The username to register.
    ///
    /// # Returns
    ///
    /// A `Result` holding the new user's identity, or a `DirectoryError` if
    /// validation or persistence fails.
    pub async fn create_user(&self, username: &str) -> Result<UserId, DirectoryError> {
        if username.is_empty() {
            return Err(DirectoryError::InvalidUsername);
        }

        if self.users.find_user_by_username(username).await?.is_some() {
            return Err(DirectoryError::DuplicateUsername(username.to_string()));
        }

        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
        };

        match self.users.insert_user(&user).await {
            Ok(()) => {
                info!(username = %user.username, "user registered");
                Ok(user.id)
            }
            Err(UserRepositoryError::UsernameTaken(name)) => {
                Err(DirectoryError::DuplicateUsername(name))
            }
            Err(e) => Err(DirectoryError::Storage(e)),
        }
    }

    /// Looks up a user by exact, case-sensitive username match.
    ///
    /// Absence is reported as `None`, not an error.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DirectoryError> {
        Ok(self.users.find_user_by_username(username).await?)
    }

    /// Returns all registered users in storage order.
    pub async fn list_users(&self) -> Result<Vec<User>, DirectoryError> {
        Ok(self.users.list_all_users().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryUsers {
        rows: Mutex<Vec<User>>,
    }

    #[async_trait::async_trait]
    impl UserRepository for InMemoryUsers {
        async fn insert_user(&self, user: &User) -> Result<(), UserRepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            if rows.iter().any(|u| u.username == user.username) {
                return Err(UserRepositoryError::UsernameTaken(user.username.clone()));
            }
            rows.push(user.clone());
            Ok(())
        }

        async fn find_user_by_username(
            &self,
            username: &str,
        ) -> Result<Option<User>, UserRepositoryError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().find(|u| u.username == username).cloned())
        }

        async fn list_all_users(&self) -> Result<Vec<User>, UserRepositoryError> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn usernames_by_ids(
            &self,
            ids: &[UserId],
        ) -> Result<HashMap<UserId, String>, UserRepositoryError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows
                .iter()
                .filter(|u| ids.contains(&u.id))
                .map(|u| (u.id, u.username.clone()))
                .collect())
        }
    }

    fn directory() -> (Arc<InMemoryUsers>, UserDirectory) {
        let users = Arc::new(InMemoryUsers::default());
        let directory = UserDirectory::new(users.clone());
        (users, directory)
    }

    #[tokio::test]
    async fn test_create_then_find_user() {
        let (_, directory) = directory();

        let id = directory.create_user("alice").await.unwrap();
        let found = directory.find_by_username("alice").await.unwrap().unwrap();

        assert_eq!(found.id, id);
        assert_eq!(found.username, "alice");
    }

    #[tokio::test]
    async fn test_create_duplicate_username_fails() {
        let (_, directory) = directory();

        directory.create_user("alice").await.unwrap();
        let result = directory.create_user("alice").await;

        match result {
            Err(DirectoryError::DuplicateUsername(name)) => assert_eq!(name, "alice"),
            other => panic!("Expected DuplicateUsername, got {:?}", other),
        }

        // The failed registration must not change the user count.
        assert_eq!(directory.list_users().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_empty_username_fails() {
        let (users, directory) = directory();

        let result = directory.create_user("").await;
        assert!(matches!(result, Err(DirectoryError::InvalidUsername)));
        assert!(users.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_missing_user_is_none() {
        let (_, directory) = directory();

        let found = directory.find_by_username("ghost").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_find_is_case_sensitive() {
        let (_, directory) = directory();

        directory.create_user("Alice").await.unwrap();
        assert!(directory.find_by_username("alice").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_users_returns_all() {
        let (_, directory) = directory();

        directory.create_user("alice").await.unwrap();
        directory.create_user("bob").await.unwrap();

        let users = directory.list_users().await.unwrap();
        let usernames: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(usernames, vec!["alice", "bob"]);
    }
}
