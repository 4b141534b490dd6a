use std::sync::Arc;

use crate::modules::reports::core::policy::ReportPolicy;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::signature_store::in_memory::InMemorySignatureStore;
use crate::shell::state::{AppState, ClockStore};
use crate::tests::fixtures::directory::seeded_directory;

pub fn state_with(event_store: ClockStore) -> AppState {
    AppState::new(
        Arc::new(event_store),
        Arc::new(seeded_directory()),
        Arc::new(InMemorySignatureStore::new()),
        ReportPolicy::default(),
        false,
    )
}

pub fn test_state() -> AppState {
    state_with(InMemoryEventStore::new())
}

/// State whose event store rejects every call.
pub fn offline_state() -> AppState {
    let mut event_store = InMemoryEventStore::new();
    event_store.toggle_offline();
    state_with(event_store)
}
