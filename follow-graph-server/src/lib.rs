//! # Follow Graph Server
//! HTTP entry point for the follow graph service. Wires configuration,
//! repositories and the core components together and exposes them over axum.
pub mod config;
pub mod errors;
pub mod models;
pub mod server;

pub use config::Dependencies;
pub use errors::ServiceError;
