//! Shared application state.
//!
//! Built once per process (Lambda cold start) and cloned into every
//! invocation. Read-only after construction.

use std::sync::Arc;

use visitor_count_core::{CounterService, CounterStore};

#[derive(Clone)]
pub struct AppState {
    counter: CounterService,
}

impl AppState {
    pub fn new(store: Arc<dyn CounterStore>) -> Self {
        Self {
            counter: CounterService::new(store),
        }
    }

    pub fn counter(&self) -> &CounterService {
        &self.counter
    }
}
