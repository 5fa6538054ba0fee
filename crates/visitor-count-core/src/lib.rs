//! Visitor counter core: the record model, store capability, error taxonomy,
//! and the increment-and-respond operation.
//!
//! This crate carries no transport or cloud dependencies. The gateway crate
//! plugs a concrete [`store::CounterStore`] in and adapts
//! [`response::CounterResponse`] to its HTTP stack.
//!
//! Panics, `unwrap`, and `expect` are compile-denied here. Every failure of a
//! request surfaces as a well-formed error response, never as a crash.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod record;
pub mod response;
pub mod service;
pub mod store;

pub use error::{CounterError, Result, StoreError};
pub use record::VisitorCount;
pub use response::CounterResponse;
pub use service::CounterService;
pub use store::{CounterStore, RecordAttributes};
