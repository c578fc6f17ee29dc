use std::sync::Arc;

use crate::config::get_database_url;
use crate::errors::ServiceError;
use follow_graph_core::{FollowGraph, UserDirectory};
use follow_graph_repository::{
    FollowRepository, PostgresFollowRepository, PostgresUserRepository, UserRepository,
};

/// `Dependencies` struct holds the wired-up components of the follow graph
/// service.
///
/// It includes the user directory for identity operations and the follow
/// graph for edge operations, both backed by the same PostgreSQL pool.
pub struct Dependencies {
    pub directory: Arc<UserDirectory>,
    pub graph: Arc<FollowGraph>,
}

impl Dependencies {
    /// Creates a new `Dependencies` instance.
    ///
    /// This asynchronous function is responsible for initializing and wiring
    /// up the database pool, the repositories, and the core components.
    ///
    /// # Returns
    ///
    /// A `Result` which is `Ok(Self)` on successful initialization or a
    /// `ServiceError` if any dependency fails to initialize.
    pub async fn new() -> Result<Self, ServiceError> {
        let database_url = get_database_url();
        let pool = sqlx::PgPool::connect(&database_url)
            .await
            .map_err(ServiceError::Database)?;

        let users: Arc<dyn UserRepository> =
            Arc::new(PostgresUserRepository::new(pool.clone()).await?);
        let follows: Arc<dyn FollowRepository> =
            Arc::new(PostgresFollowRepository::new(pool).await?);

        let directory = Arc::new(UserDirectory::new(users.clone()));
        let graph = Arc::new(FollowGraph::new(users, follows));

        Ok(Dependencies { directory, graph })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[tokio::test]
    #[serial]
    #[should_panic(expected = "DATABASE_URL must be set")]
    async fn test_dependencies_new_missing_database_url() {
        unsafe {
            env::remove_var("DATABASE_URL");
        }

        let _ = Dependencies::new().await;
    }

    #[tokio::test]
    #[serial]
    async fn test_dependencies_new_invalid_database_url() {
        unsafe {
            env::set_var("DATABASE_URL", "invalid-database-url");
        }

        let result = Dependencies::new().await;
        assert!(matches!(result, Err(ServiceError::Database(_))));

        unsafe {
            env::remove_var("DATABASE_URL");
        }
    }
}
