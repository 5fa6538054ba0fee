//! Transport layer (HTTP).
//!
//! Adapts the core response model to axum and exposes the single handler
//! every request is routed to.

pub mod http;
