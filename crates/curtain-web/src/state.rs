//! Application state.

use curtain_core::Relay;
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<Relay>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_relay(Arc::new(Relay::new()))
    }

    pub fn with_relay(relay: Arc<Relay>) -> Self {
        Self { relay }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
