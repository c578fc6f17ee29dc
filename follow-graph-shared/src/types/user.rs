use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a user record, independent of the username.
pub type UserId = Uuid;

/// Represents a registered user.
///
/// The username is unique across all users and immutable once set;
/// the id is generated when the record is created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
}
