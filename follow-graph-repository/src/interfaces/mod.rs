mod follows;
mod users;

pub use follows::FollowRepository;
pub use users::UserRepository;
