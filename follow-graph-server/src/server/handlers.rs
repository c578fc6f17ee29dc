// HTTP request handlers
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use tracing::error;

use crate::models::{CommonFollowersRequest, CreateUserRequest, FollowRequest};
use crate::server::state::AppState;
use follow_graph_core::errors::{DirectoryError, GraphError};

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "Follow graph server is running")
}

/// Lists every registered user.
pub async fn list_users(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    match state.directory.list_users().await {
        Ok(users) => (StatusCode::OK, Json(json!(users))),
        Err(e) => directory_error_response(e),
    }
}

/// Registers a new user.
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> (StatusCode, Json<serde_json::Value>) {
    let username = payload.username.unwrap_or_default();

    match state.directory.create_user(&username).await {
        Ok(_) => (StatusCode::CREATED, Json(json!({ "message": "User added" }))),
        Err(e) => directory_error_response(e),
    }
}

/// Creates a follow edge between two users.
pub async fn follow(
    State(state): State<AppState>,
    Json(payload): Json<FollowRequest>,
) -> (StatusCode, Json<serde_json::Value>) {
    let follower = payload.follower_username.unwrap_or_default();
    let followee = payload.followee_username.unwrap_or_default();

    match state.graph.follow(&follower, &followee).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(json!({ "message": "Followed successfully" })),
        ),
        Err(e) => graph_error_response(e),
    }
}

/// Removes a follow edge between two users. Succeeds even when no edge
/// existed.
pub async fn unfollow(
    State(state): State<AppState>,
    Json(payload): Json<FollowRequest>,
) -> (StatusCode, Json<serde_json::Value>) {
    let follower = payload.follower_username.unwrap_or_default();
    let followee = payload.followee_username.unwrap_or_default();

    match state.graph.unfollow(&follower, &followee).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "message": "Unfollowed successfully" })),
        ),
        Err(e) => graph_error_response(e),
    }
}

/// Lists the usernames following the given user.
pub async fn followers_of(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> (StatusCode, Json<serde_json::Value>) {
    match state.graph.followers_of(&username).await {
        Ok(followers) => (StatusCode::OK, Json(json!(followers))),
        Err(e) => graph_error_response(e),
    }
}

/// Lists the usernames the given user follows.
pub async fn following_of(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> (StatusCode, Json<serde_json::Value>) {
    match state.graph.following_of(&username).await {
        Ok(following) => (StatusCode::OK, Json(json!(following))),
        Err(e) => graph_error_response(e),
    }
}

/// Counts the followers the given user gained today.
pub async fn daily_followers(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> (StatusCode, Json<serde_json::Value>) {
    match state.graph.daily_follower_count(&username).await {
        Ok(count) => (StatusCode::OK, Json(json!({ "daily_followers": count }))),
        Err(e) => graph_error_response(e),
    }
}

/// Lists the usernames following both requested users.
pub async fn common_followers(
    State(state): State<AppState>,
    Json(payload): Json<CommonFollowersRequest>,
) -> (StatusCode, Json<serde_json::Value>) {
    let username1 = payload.username1.unwrap_or_default();
    let username2 = payload.username2.unwrap_or_default();

    match state.graph.common_followers(&username1, &username2).await {
        Ok(common) => (StatusCode::OK, Json(json!(common))),
        Err(e) => graph_error_response(e),
    }
}

/// Translates a directory error into an HTTP response.
fn directory_error_response(err: DirectoryError) -> (StatusCode, Json<serde_json::Value>) {
    let status = match &err {
        DirectoryError::InvalidUsername => StatusCode::BAD_REQUEST,
        DirectoryError::DuplicateUsername(_) => StatusCode::CONFLICT,
        DirectoryError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        error!("Directory operation failed: {:?}", err);
    }
    (status, Json(json!({ "error": err.to_string() })))
}

/// Translates a follow graph error into an HTTP response.
fn graph_error_response(err: GraphError) -> (StatusCode, Json<serde_json::Value>) {
    let status = match &err {
        GraphError::InvalidInput => StatusCode::BAD_REQUEST,
        GraphError::UserNotFound(_) => StatusCode::NOT_FOUND,
        GraphError::UserStorage(_) | GraphError::FollowStorage(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        error!("Follow graph operation failed: {:?}", err);
    }
    (status, Json(json!({ "error": err.to_string() })))
}
