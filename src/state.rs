//! Shared application state for all routes.

use crate::store::ItemStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Created once at startup and shared by every request.
    pub store: Arc<dyn ItemStore>,
}

impl AppState {
    pub fn new(store: impl ItemStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
