//! Visitor counter gateway library entry.
//!
//! Wires environment config, the DynamoDB store, and the axum router. It is
//! consumed by the Lambda binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod router;
pub mod store;
pub mod transport;
