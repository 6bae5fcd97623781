//! Storage gateway trait.
//!
//! The repository persists its collections through this seam instead of an
//! ambient global store, so the core stays testable without a real backend.
//! Implementations live in the `quizrank-store` crate.

/// Slot under which the quiz collection is persisted.
pub const QUIZZES_SLOT: &str = "quizzes";

/// Slot under which the submission collection is persisted.
pub const SUBMISSIONS_SLOT: &str = "submissions";

/// Abstract key-value persistence for serialized collections.
///
/// Each slot holds one whole collection as text; `save` overwrites the slot
/// in full, there are no partial writes. `load` returns `None` for a slot
/// that has never been written.
pub trait StorageGateway: Send + Sync {
    /// Read the serialized collection stored under `slot`, if any.
    fn load(&self, slot: &str) -> anyhow::Result<Option<String>>;

    /// Replace the serialized collection stored under `slot`.
    fn save(&self, slot: &str, payload: &str) -> anyhow::Result<()>;
}
