// Request payloads for the HTTP API. Field names follow the wire format;
// missing fields become empty values and fail core validation.
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FollowRequest {
    #[serde(rename = "followerUsername")]
    pub follower_username: Option<String>,
    #[serde(rename = "followeeUsername")]
    pub followee_username: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CommonFollowersRequest {
    pub username1: Option<String>,
    pub username2: Option<String>,
}
