// Server module - HTTP server setup and routing
pub mod handlers;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tracing::info;

use crate::config::create_cors_layer;
use follow_graph_core::{FollowGraph, UserDirectory};
use self::state::AppState;

/// Create the axum application router with all routes and middleware
pub fn create_app(directory: Arc<UserDirectory>, graph: Arc<FollowGraph>) -> Router {
    let state = AppState { directory, graph };

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/users", get(handlers::list_users).post(handlers::create_user))
        .route("/follow", post(handlers::follow))
        .route("/unfollow", post(handlers::unfollow))
        .route("/followers/:username", get(handlers::followers_of))
        .route("/following/:username", get(handlers::following_of))
        .route("/daily_followers/:username", get(handlers::daily_followers))
        .route("/common_followers", post(handlers::common_followers))
        .layer(create_cors_layer())
        .with_state(state)
}

/// Run the server on the specified address
pub async fn run_server(app: Router, addr: SocketAddr) -> anyhow::Result<()> {
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
