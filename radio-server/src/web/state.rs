//! Application state for the web layer.

use std::sync::Arc;

use crate::directory::Directory;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Station directory with mirror failover
    pub directory: Arc<Directory>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(directory: Directory) -> Self {
        Self {
            directory: Arc::new(directory),
        }
    }
}
