use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error, instrument};

use crate::error::{CounterError, Result};
use crate::record::{VisitorCount, COUNT_FIELD, RECORD_ID};
use crate::response::CounterResponse;
use crate::store::CounterStore;

/// Increments the visitor counter and maps the outcome to a response.
///
/// Holds nothing but the store handle; the counter value lives in the store.
/// Cloning is cheap and clones share the handle.
#[derive(Clone)]
pub struct CounterService {
    store: Arc<dyn CounterStore>,
}

impl CounterService {
    pub fn new(store: Arc<dyn CounterStore>) -> Self {
        Self { store }
    }

    /// One invocation: a single atomic add against the store, then the
    /// response. Never fails; errors become 500 responses.
    ///
    /// Not idempotent: every call increments.
    pub async fn handle(&self) -> CounterResponse {
        self.increment().await.into()
    }

    /// Adds one to the counter and returns the post-update value.
    #[instrument(skip(self), fields(id = RECORD_ID))]
    pub async fn increment(&self) -> Result<u64> {
        let attrs = self
            .store
            .atomic_add(RECORD_ID, COUNT_FIELD, 1)
            .await
            .map_err(|e| {
                let err = CounterError::from(e);
                error!(code = err.client_code().as_str(), error = %err, "visitor count increment failed");
                err
            })?;

        // The add has committed by now; a decode failure still reports 500.
        let record: VisitorCount = serde_json::from_value(Value::Object(attrs)).map_err(|e| {
            let err = CounterError::Decode(e.to_string());
            error!(
                code = err.client_code().as_str(),
                error = %err,
                "store acknowledged the increment but the record did not decode"
            );
            err
        })?;

        debug!(count = record.count, "visitor count incremented");
        Ok(record.count)
    }
}
