//! Shared application state for the console server.

use std::sync::Arc;

use blocklist::store::BlockListStore;

use crate::view::PageRenderer;

/// Shared state accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<BlockListStore>,
    pub renderer: Arc<PageRenderer>,
}

impl AppState {
    pub fn new(store: BlockListStore, renderer: PageRenderer) -> Self {
        Self {
            store: Arc::new(store),
            renderer: Arc::new(renderer),
        }
    }
}
