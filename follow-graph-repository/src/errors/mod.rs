mod follows;
mod users;

pub use follows::FollowRepositoryError;
pub use users::UserRepositoryError;
