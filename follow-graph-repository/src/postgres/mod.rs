mod follow_repository;
mod user_repository;

pub use follow_repository::PostgresFollowRepository;
pub use user_repository::PostgresUserRepository;
