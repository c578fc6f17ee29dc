mod follow_edge;
mod user;

pub use follow_edge::FollowEdge;
pub use user::{User, UserId};
