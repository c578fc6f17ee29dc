//! PostgreSQL implementation of the follow repository.
//!
//! Provides the production PostgreSQL backend for the `FollowRepository` trait.
//! Edge uniqueness per (follower, followee) pair is enforced by a unique
//! constraint on the `follows` table together with an idempotent insert.
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{FollowRepository, FollowRepositoryError};
use follow_graph_shared::types::{FollowEdge, UserId};

/// PostgreSQL implementation of the follow repository.
///
/// Provides database operations for follow edges using PostgreSQL with
/// connection pooling. Both endpoints of every edge are foreign keys into
/// the `users` table.
pub struct PostgresFollowRepository {
    pool: sqlx::PgPool,
}

impl PostgresFollowRepository {
    /// Creates a new PostgreSQL follow repository instance.
    ///
    /// # Arguments
    ///
    /// * `pool` - Configured PostgreSQL connection pool with required schema
    ///
    /// # Returns
    ///
    /// * `Ok(PostgresFollowRepository)` - Ready-to-use repository instance
    /// * `Err(FollowRepositoryError)` - Future validation errors (currently always succeeds)
    pub async fn new(pool: sqlx::PgPool) -> Result<Self, FollowRepositoryError> {
        Ok(Self { pool })
    }
}

#[async_trait]
impl FollowRepository for PostgresFollowRepository {
    /// Inserts a follow edge with `ON CONFLICT DO NOTHING`.
    ///
    /// When the (follower, followee) pair already has a live edge, the
    /// existing edge and its timestamp are kept and `false` is returned.
    async fn insert_edge(&self, edge: &FollowEdge) -> Result<bool, FollowRepositoryError> {
        let result = sqlx::query(
            "INSERT INTO follows (follower_id, followee_id, followed_at) VALUES ($1, $2, $3) \
             ON CONFLICT (follower_id, followee_id) DO NOTHING",
        )
        .bind(edge.follower_id)
        .bind(edge.followee_id)
        .bind(edge.followed_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes at most one edge matching the pair.
    ///
    /// The `ctid` subquery bounds the delete to a single row even if the
    /// uniqueness constraint were ever relaxed.
    async fn delete_one_edge(
        &self,
        follower_id: UserId,
        followee_id: UserId,
    ) -> Result<bool, FollowRepositoryError> {
        let result = sqlx::query(
            "DELETE FROM follows WHERE ctid IN \
             (SELECT ctid FROM follows WHERE follower_id = $1 AND followee_id = $2 LIMIT 1)",
        )
        .bind(follower_id)
        .bind(followee_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Returns all edges pointing at the followee.
    async fn edges_by_followee(&self, followee_id: UserId) -> Result<Vec<FollowEdge>, FollowRepositoryError> {
        let rows = sqlx::query_as::<_, (Uuid, Uuid, DateTime<Utc>)>(
            "SELECT follower_id, followee_id, followed_at FROM follows WHERE followee_id = $1",
        )
        .bind(followee_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(follower_id, followee_id, followed_at)| FollowEdge {
                follower_id,
                followee_id,
                followed_at,
            })
            .collect())
    }

    /// Returns all edges originating from the follower.
    async fn edges_by_follower(&self, follower_id: UserId) -> Result<Vec<FollowEdge>, FollowRepositoryError> {
        let rows = sqlx::query_as::<_, (Uuid, Uuid, DateTime<Utc>)>(
            "SELECT follower_id, followee_id, followed_at FROM follows WHERE follower_id = $1",
        )
        .bind(follower_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(follower_id, followee_id, followed_at)| FollowEdge {
                follower_id,
                followee_id,
                followed_at,
            })
            .collect())
    }

    /// Counts edges pointing at the followee created at or after `since`.
    async fn count_edges_since(
        &self,
        followee_id: UserId,
        since: DateTime<Utc>,
    ) -> Result<i64, FollowRepositoryError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM follows WHERE followee_id = $1 AND followed_at >= $2",
        )
        .bind(followee_id)
        .bind(since)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}
