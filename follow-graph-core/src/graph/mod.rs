//! This module defines the `FollowGraph`, the component that owns directed
//! follow edges between user identities and the queries over them.
//! Every operation first resolves usernames to stable user identities, then
//! operates on edges keyed by those identities; an unresolved username fails
//! the whole operation before any mutation.
use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Local, Utc};
use tracing::info;

use crate::errors::GraphError;
use follow_graph_repository::{FollowRepository, UserRepository};
use follow_graph_shared::types::{FollowEdge, User, UserId};

/// `FollowGraph` owns follow edges: follow/unfollow mutations and the
/// follower, following, daily-count and common-follower queries.
///
/// It utilizes a `FollowRepository` for edge storage and a `UserRepository`
/// for resolving usernames to identities and identities back to usernames.
/// Edges reference users by identity only; usernames are joined in
/// explicitly at query time.
pub struct FollowGraph {
    users: Arc<dyn UserRepository>,
    follows: Arc<dyn FollowRepository>,
}

impl FollowGraph {
    /// Creates a new `FollowGraph` instance.
    ///
    /// # Arguments
    ///
    /// * `users` - An `Arc` trait object implementing `UserRepository`.
    /// * `follows` - An `Arc` trait object implementing `FollowRepository`.
    pub fn new(users: Arc<dyn UserRepository>, follows: Arc<dyn FollowRepository>) -> Self {
        Self { users, follows }
    }

    /// Creates a follow edge from `follower_username` to `followee_username`,
    /// stamped with the current time.
    ///
    /// Both usernames are resolved before the edge is written, so nothing is
    /// persisted when either is unknown. Following an already-followed user
    /// is an ack: the existing edge and its timestamp are kept.
    ///
    /// # Arguments
    ///
    /// * `follower_username` - The user initiating the follow.
    /// * `followee_username` - The user being followed.
    ///
    /// # Returns
    ///
    /// A `Result` indicating success, or a `GraphError` if validation,
    /// resolution, or persistence fails.
    pub async fn follow(
        &self,
        follower_username: &str,
        followee_username: &str,
    ) -> Result<(), GraphError> {
        if follower_username.is_empty() || followee_username.is_empty() {
            return Err(GraphError::InvalidInput);
        }

        let follower = self.resolve(follower_username).await?;
        let followee = self.resolve(followee_username).await?;

        let edge = FollowEdge {
            follower_id: follower.id,
            followee_id: followee.id,
            followed_at: Utc::now(),
        };

        if self.follows.insert_edge(&edge).await? {
            info!(
                follower = %follower.username,
                followee = %followee.username,
                "follow edge created"
            );
        }
        Ok(())
    }

    /// Removes the follow edge from `follower_username` to
    /// `followee_username`, deleting at most one edge.
    ///
    /// Unfollowing when no edge exists is a success; only a missing user is
    /// an error for this operation.
    pub async fn unfollow(
        &self,
        follower_username: &str,
        followee_username: &str,
    ) -> Result<(), GraphError> {
        if follower_username.is_empty() || followee_username.is_empty() {
            return Err(GraphError::InvalidInput);
        }

        let follower = self.resolve(follower_username).await?;
        let followee = self.resolve(followee_username).await?;

        if self.follows.delete_one_edge(follower.id, followee.id).await? {
            info!(
                follower = %follower.username,
                followee = %followee.username,
                "follow edge removed"
            );
        }
        Ok(())
    }

    /// Returns the usernames of all users following `username`.
    ///
    /// Order follows the storage order of the underlying edges.
    pub async fn followers_of(&self, username: &str) -> Result<Vec<String>, GraphError> {
        let user = self.resolve(username).await?;
        let edges = self.follows.edges_by_followee(user.id).await?;
        self.join_usernames(edges.iter().map(|e| e.follower_id).collect())
            .await
    }

    /// Returns the usernames of all users that `username` follows.
    pub async fn following_of(&self, username: &str) -> Result<Vec<String>, GraphError> {
        let user = self.resolve(username).await?;
        let edges = self.follows.edges_by_follower(user.id).await?;
        self.join_usernames(edges.iter().map(|e| e.followee_id).collect())
            .await
    }

    /// Counts the followers gained today: edges pointing at `username` whose
    /// creation time falls on the current calendar day in the server's local
    /// time zone.
    ///
    /// This is a point-in-time count at call time, not a maintained counter.
    pub async fn daily_follower_count(&self, username: &str) -> Result<i64, GraphError> {
        let user = self.resolve(username).await?;
        let since = start_of_local_day(Local::now());
        Ok(self.follows.count_edges_since(user.id, since).await?)
    }

    /// Returns the usernames that follow both `username1` and `username2`.
    ///
    /// The result keeps the order of the first user's follower list;
    /// membership in the second list is tested against a hash set. For
    /// `username1 == username2` this is the full follower list of that user.
    ///
    /// # Arguments
    ///
    /// * `username1` - The first followee.
    /// * `username2` - The second followee.
    ///
    /// # Returns
    ///
    /// A `Result` holding the common follower usernames, or a `GraphError`
    /// if validation or resolution fails.
    pub async fn common_followers(
        &self,
        username1: &str,
        username2: &str,
    ) -> Result<Vec<String>, GraphError> {
        if username1.is_empty() || username2.is_empty() {
            return Err(GraphError::InvalidInput);
        }

        let first = self.resolve(username1).await?;
        let second = self.resolve(username2).await?;

        let first_edges = self.follows.edges_by_followee(first.id).await?;
        let second_edges = self.follows.edges_by_followee(second.id).await?;

        let first_followers = self
            .join_usernames(first_edges.iter().map(|e| e.follower_id).collect())
            .await?;
        let second_followers: HashSet<String> = self
            .join_usernames(second_edges.iter().map(|e| e.follower_id).collect())
            .await?
            .into_iter()
            .collect();

        Ok(first_followers
            .into_iter()
            .filter(|name| second_followers.contains(name))
            .collect())
    }

    /// Resolves a username to its user record, failing with `UserNotFound`
    /// when no record exists.
    async fn resolve(&self, username: &str) -> Result<User, GraphError> {
        self.users
            .find_user_by_username(username)
            .await?
            .ok_or_else(|| GraphError::UserNotFound(username.to_string()))
    }

    /// Maps a sequence of user identities back to usernames, preserving
    /// order, with a single batch lookup for the distinct identities.
    async fn join_usernames(&self, ids: Vec<UserId>) -> Result<Vec<String>, GraphError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut seen = HashSet::new();
        let distinct: Vec<UserId> = ids.iter().copied().filter(|id| seen.insert(*id)).collect();
        let names = self.users.usernames_by_ids(&distinct).await?;

        Ok(ids.iter().filter_map(|id| names.get(id).cloned()).collect())
    }
}

/// Start of the calendar day containing `now` in the local time zone,
/// expressed in UTC for comparison against stored edge timestamps.
///
/// Falls back to `now` itself in the degenerate case where local midnight
/// does not exist for the current day.
fn start_of_local_day(now: DateTime<Local>) -> DateTime<Utc> {
    now.date_naive()
        .and_hms_opt(0, 0, 0)
        .and_then(|midnight| midnight.and_local_timezone(Local).earliest())
        .map(|start| start.with_timezone(&Utc))
        .unwrap_or_else(|| now.with_timezone(&Utc))
}
