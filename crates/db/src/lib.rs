//! Resource storage for the anthology site.
//!
//! [`AnthologyStore`] is the contract the HTTP layer depends on; [`MemStore`]
//! is the only implementation and keeps everything in process memory.

pub mod memory;
pub mod models;
pub mod seed;
pub mod store;

pub use memory::MemStore;
pub use store::AnthologyStore;

/// Failure reported by a store backend.
///
/// The in-memory store never produces one; the variant exists for backends
/// that can lose their connection.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Create the process-wide store.
pub fn create_store() -> MemStore {
    MemStore::new()
}
