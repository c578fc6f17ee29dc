//! # Follow Graph Repository
//! This crate provides traits and implementations for interacting with the
//! follow graph data store. It includes definitions for errors, interfaces,
//! and concrete implementations for PostgreSQL.
pub mod errors;
pub mod interfaces;
pub mod postgres;

pub use errors::{FollowRepositoryError, UserRepositoryError};
pub use interfaces::{FollowRepository, UserRepository};
pub use postgres::{PostgresFollowRepository, PostgresUserRepository};
