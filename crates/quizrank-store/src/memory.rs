//! In-memory gateway for testing and ephemeral use.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use quizrank_core::traits::StorageGateway;

/// A gateway that keeps every slot in a process-local map.
///
/// Tracks load/save call counts so tests can assert on the repository's
/// write-through behavior without a real backend.
#[derive(Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
    load_count: AtomicU32,
    save_count: AtomicU32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one slot pre-populated, for load-path tests.
    pub fn with_slot(slot: &str, payload: &str) -> Self {
        let store = Self::default();
        store
            .slots
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(slot.to_owned(), payload.to_owned());
        store
    }

    /// Number of `load` calls made against this store.
    pub fn load_count(&self) -> u32 {
        self.load_count.load(Ordering::Relaxed)
    }

    /// Number of `save` calls made against this store.
    pub fn save_count(&self) -> u32 {
        self.save_count.load(Ordering::Relaxed)
    }

    /// Current contents of `slot`, if any.
    pub fn snapshot(&self, slot: &str) -> Option<String> {
        self.slots
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(slot)
            .cloned()
    }
}

impl StorageGateway for MemoryStore {
    fn load(&self, slot: &str) -> anyhow::Result<Option<String>> {
        self.load_count.fetch_add(1, Ordering::Relaxed);
        Ok(self
            .slots
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(slot)
            .cloned())
    }

    fn save(&self, slot: &str, payload: &str) -> anyhow::Result<()> {
        self.save_count.fetch_add(1, Ordering::Relaxed);
        self.slots
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(slot.to_owned(), payload.to_owned());
        Ok(())
    }
}
