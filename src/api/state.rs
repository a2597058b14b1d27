//! Shared state for the user lookup service

use std::sync::Arc;

use crate::types::UserDirectory;

/// State handed to user lookup handlers
#[derive(Clone)]
pub struct AppState {
    /// Fixed, read-only user list built at startup
    pub users: Arc<UserDirectory>,
}

impl AppState {
    pub fn new(users: UserDirectory) -> Self {
        Self {
            users: Arc::new(users),
        }
    }

    /// State backed by the built-in Alice/Bob directory
    pub fn builtin() -> Self {
        Self::new(UserDirectory::builtin())
    }
}
