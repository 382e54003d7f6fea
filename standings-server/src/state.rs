use standings_core::EventStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    // The store rescans its directory on each request to pick up filesystem changes
    pub store: EventStore,
}

impl AppState {
    pub fn new(store: EventStore) -> Self {
        AppState { store }
    }
}
