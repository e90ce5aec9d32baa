//! Application state for the lease API

use std::sync::Arc;

use clap::ValueEnum;
use lease_core::{InMemoryLeaseStore, LeaseStore, LoggingLeaseStore, PresencePolicy};

/// Which [`LeaseStore`] backs the server
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    /// Keep records in process memory, optionally bounded
    Memory,
    /// Log records without keeping them
    #[default]
    Log,
}

pub struct AppState {
    pub store: Arc<dyn LeaseStore>,
    pub policy: PresencePolicy,
}

impl AppState {
    /// `capacity` bounds the memory store and is ignored by the log store
    pub fn new(store: StoreKind, capacity: Option<usize>, policy: PresencePolicy) -> Self {
        let store: Arc<dyn LeaseStore> = match (store, capacity) {
            (StoreKind::Memory, Some(capacity)) => {
                Arc::new(InMemoryLeaseStore::with_capacity(capacity))
            }
            (StoreKind::Memory, None) => Arc::new(InMemoryLeaseStore::new()),
            (StoreKind::Log, _) => Arc::new(LoggingLeaseStore),
        };

        tracing::info!(
            "Using '{}' lease store with '{}' presence policy",
            store.name(),
            policy
        );

        Self::with_store(store, policy)
    }

    pub fn with_store(store: Arc<dyn LeaseStore>, policy: PresencePolicy) -> Self {
        Self { store, policy }
    }
}
