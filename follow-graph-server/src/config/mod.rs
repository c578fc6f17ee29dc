// Configuration constants and environment helpers
mod dependencies;

pub use dependencies::Dependencies;

use std::net::SocketAddr;

use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

// Server configuration
pub const DEFAULT_HOST: [u8; 4] = [127, 0, 0, 1];
pub const DEFAULT_PORT: u16 = 3000;

/// Get database URL from environment
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").expect("DATABASE_URL must be set")
}

/// Resolve the bind address from SERVER_HOST/SERVER_PORT, falling back to
/// 127.0.0.1:3000 when unset or unparseable.
pub fn server_addr() -> SocketAddr {
    let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    format!("{host}:{port}")
        .parse()
        .unwrap_or_else(|_| SocketAddr::from((DEFAULT_HOST, DEFAULT_PORT)))
}

/// Create CORS layer for the JSON API
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    #[serial]
    fn test_server_addr_defaults() {
        unsafe {
            env::remove_var("SERVER_HOST");
            env::remove_var("SERVER_PORT");
        }

        assert_eq!(server_addr(), SocketAddr::from(([127, 0, 0, 1], 3000)));
    }

    #[test]
    #[serial]
    fn test_server_addr_from_env() {
        unsafe {
            env::set_var("SERVER_HOST", "0.0.0.0");
            env::set_var("SERVER_PORT", "8080");
        }

        assert_eq!(server_addr(), SocketAddr::from(([0, 0, 0, 0], 8080)));

        unsafe {
            env::remove_var("SERVER_HOST");
            env::remove_var("SERVER_PORT");
        }
    }

    #[test]
    #[serial]
    fn test_server_addr_ignores_bad_port() {
        unsafe {
            env::remove_var("SERVER_HOST");
            env::set_var("SERVER_PORT", "not-a-port");
        }

        assert_eq!(server_addr(), SocketAddr::from(([127, 0, 0, 1], 3000)));

        unsafe {
            env::remove_var("SERVER_PORT");
        }
    }
}
