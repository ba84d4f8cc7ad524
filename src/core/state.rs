// Application state (AppState)

use crate::core::config::Config;
use crate::stores::user_store::UserStore;
use std::sync::Arc;

/// Shared application state
///
/// Built once at startup and handed to every handler. The store handle is
/// read-only after construction; the database serializes per-document writes.
#[derive(Clone)]
pub struct AppState {
    /// Backing user collection
    pub store: Arc<dyn UserStore>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn UserStore>) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}
