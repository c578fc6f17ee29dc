use std::sync::Arc;

use follow_graph_core::{FollowGraph, UserDirectory};

/// Shared application state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<UserDirectory>,
    pub graph: Arc<FollowGraph>,
}
