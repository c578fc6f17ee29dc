//! Error types for the follow graph server.
//! Consolidates errors that can occur while wiring dependencies and serving,
//! from the core components and the database layer.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("User repository error: {0}")]
    UserRepository(#[from] follow_graph_repository::UserRepositoryError),
    #[error("Follow repository error: {0}")]
    FollowRepository(#[from] follow_graph_repository::FollowRepositoryError),
}
