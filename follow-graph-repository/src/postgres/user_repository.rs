//! PostgreSQL implementation of the user repository.
//!
//! Provides the production PostgreSQL backend for the `UserRepository` trait
//! with connection pooling and batch identifier resolution.
use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{UserRepository, UserRepositoryError};
use follow_graph_shared::types::{User, UserId};

/// PostgreSQL implementation of the user repository.
///
/// Provides database operations for user records using PostgreSQL with
/// connection pooling. Username uniqueness is backed by a unique index on
/// the `users` table; violations surface as
/// `UserRepositoryError::UsernameTaken`.
pub struct PostgresUserRepository {
    pool: sqlx::PgPool,
}

impl PostgresUserRepository {
    /// Creates a new PostgreSQL user repository instance.
    ///
    /// # Arguments
    ///
    /// * `pool` - Configured PostgreSQL connection pool with required schema
    ///
    /// # Returns
    ///
    /// * `Ok(PostgresUserRepository)` - Ready-to-use repository instance
    /// * `Err(UserRepositoryError)` - Future validation errors (currently always succeeds)
    pub async fn new(pool: sqlx::PgPool) -> Result<Self, UserRepositoryError> {
        Ok(Self { pool })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    /// Inserts a user record.
    ///
    /// Unique-index violations on the username column are mapped to
    /// `UserRepositoryError::UsernameTaken`; every other database error is
    /// propagated unchanged.
    async fn insert_user(&self, user: &User) -> Result<(), UserRepositoryError> {
        let result = sqlx::query("INSERT INTO users (id, username) VALUES ($1, $2)")
            .bind(user.id)
            .bind(&user.username)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) if e.as_database_error().is_some_and(|db| db.is_unique_violation()) => {
                Err(UserRepositoryError::UsernameTaken(user.username.clone()))
            }
            Err(e) => Err(UserRepositoryError::DatabaseError(e)),
        }
    }

    /// Looks up a user by exact username match.
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, UserRepositoryError> {
        let row = sqlx::query_as::<_, (Uuid, String)>(
            "SELECT id, username FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(id, username)| User { id, username }))
    }

    /// Returns all users in storage order.
    async fn list_all_users(&self) -> Result<Vec<User>, UserRepositoryError> {
        let rows = sqlx::query_as::<_, (Uuid, String)>("SELECT id, username FROM users")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id, username)| User { id, username })
            .collect())
    }

    /// Resolves an identifier set to usernames with a single `UNNEST` query.
    ///
    /// Empty input is a no-op and returns an empty map without touching the
    /// database.
    async fn usernames_by_ids(&self, ids: &[UserId]) -> Result<HashMap<UserId, String>, UserRepositoryError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, (Uuid, String)>(
            "SELECT id, username FROM users WHERE id IN (SELECT * FROM UNNEST($1::uuid[]))",
        )
        .bind(ids.to_vec())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().collect())
    }
}
