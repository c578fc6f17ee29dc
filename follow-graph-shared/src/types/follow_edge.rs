use crate::types::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a directed follow relationship between two users.
///
/// Edges reference users by identifier only and never embed user data.
/// `followed_at` is set once when the edge is created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FollowEdge {
    pub follower_id: UserId,
    pub followee_id: UserId,
    pub followed_at: DateTime<Utc>,
}
