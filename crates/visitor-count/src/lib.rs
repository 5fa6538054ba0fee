//! Top-level facade crate for the visitor counter.
//!
//! Re-exports the core domain and the gateway wiring so users can depend on a single crate.

pub mod core {
    pub use visitor_count_core::*;
}

pub mod gateway {
    pub use visitor_count_gateway::*;
}
