//! Concrete store backends.

pub mod dynamo;

pub use dynamo::DynamoCounterStore;
