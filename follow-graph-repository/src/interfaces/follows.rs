//! This module defines the `FollowRepository` trait, which provides an interface
//! for interacting with the underlying data store for follow edges.
use chrono::{DateTime, Utc};

use crate::errors::FollowRepositoryError;
use follow_graph_shared::types::{FollowEdge, UserId};

/// A trait that defines the interface for interacting with the follow edge repository.
///
/// Implementors of this trait provide methods for inserting and deleting edges
/// and for querying them by either endpoint. Edge uniqueness per
/// (follower, followee) pair is an invariant of every implementation.
#[async_trait::async_trait]
pub trait FollowRepository: Send + Sync {
    /// Inserts a follow edge if no edge for the same (follower, followee) pair exists.
    ///
    /// # Arguments
    ///
    /// * `edge` - The `FollowEdge` to be persisted.
    ///
    /// # Returns
    ///
    /// A `Result` holding `true` when a new edge was created, `false` when the
    /// pair already had a live edge (the existing edge and its timestamp are
    /// kept), or a `FollowRepositoryError` if the insertion fails.
    async fn insert_edge(&self, edge: &FollowEdge) -> Result<bool, FollowRepositoryError>;

    /// Deletes at most one edge matching the (follower, followee) pair.
    ///
    /// # Returns
    ///
    /// A `Result` holding `true` when an edge was deleted, `false` when no
    /// matching edge existed.
    async fn delete_one_edge(
        &self,
        follower_id: UserId,
        followee_id: UserId,
    ) -> Result<bool, FollowRepositoryError>;

    /// Returns all live edges pointing at the given followee.
    async fn edges_by_followee(&self, followee_id: UserId) -> Result<Vec<FollowEdge>, FollowRepositoryError>;

    /// Returns all live edges originating from the given follower.
    async fn edges_by_follower(&self, follower_id: UserId) -> Result<Vec<FollowEdge>, FollowRepositoryError>;

    /// Counts edges pointing at the followee whose creation time is at or
    /// after the given threshold.
    async fn count_edges_since(
        &self,
        followee_id: UserId,
        since: DateTime<Utc>,
    ) -> Result<i64, FollowRepositoryError>;
}
