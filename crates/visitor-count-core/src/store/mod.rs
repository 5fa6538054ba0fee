//! The store capability consumed by [`crate::CounterService`].

pub mod memory;

use async_trait::async_trait;

use crate::error::StoreError;

pub use memory::MemoryStore;

/// A record as returned by a store, translated into a neutral JSON object.
///
/// Backends must not interpret the fields; decoding into
/// [`crate::VisitorCount`] happens in the service.
pub type RecordAttributes = serde_json::Map<String, serde_json::Value>;

/// Atomic add, returning the record after the update.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Adds `delta` to `field` of the record keyed by `id` and returns the
    /// whole record as it exists after the update, in one round trip.
    ///
    /// The read-modify-write must be atomic at the store. A missing record is
    /// created from an implicit zero base.
    async fn atomic_add(
        &self,
        id: &str,
        field: &str,
        delta: u64,
    ) -> Result<RecordAttributes, StoreError>;
}
