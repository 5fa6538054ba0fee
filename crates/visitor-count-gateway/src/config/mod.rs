//! Gateway config loader (environment).
//!
//! The table identifier is not checked here. A bad name or ARN surfaces per
//! request as a store failure, which still answers with a CORS-enabled 500.

pub mod schema;

pub use schema::{GatewayConfig, DEFAULT_TABLE_NAME};

/// Name of the variable holding the DynamoDB table name or ARN.
pub const TABLE_NAME_VAR: &str = "TABLE_NAME";

pub fn load_from_env() -> GatewayConfig {
    load_from_lookup(|k| std::env::var(k).ok())
}

/// Build the config from an arbitrary variable source. Unset or blank
/// `TABLE_NAME` falls back to [`DEFAULT_TABLE_NAME`].
pub fn load_from_lookup<F>(lookup: F) -> GatewayConfig
where
    F: Fn(&str) -> Option<String>,
{
    let table_name = lookup(TABLE_NAME_VAR)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string());

    GatewayConfig { table_name }
}
