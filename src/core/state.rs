// Application state (AppState)

use crate::stores::user_directory::UserDirectory;
use std::sync::Arc;

/// Shared application state
///
/// Built once at startup and only read by request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Read-only user records
    pub directory: Arc<UserDirectory>,
}

impl AppState {
    pub fn new(directory: UserDirectory) -> Self {
        Self {
            directory: Arc::new(directory),
        }
    }
}
