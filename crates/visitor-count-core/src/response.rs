//! HTTP-shaped response model.
//!
//! Kept independent of any HTTP crate; the gateway converts it into its own
//! response type. Every response carries [`CORS_HEADERS`].

use serde_json::json;

use crate::error::CounterError;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// Fixed cross-origin header set attached to every outcome.
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "POST, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterResponse {
    pub status: u16,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: String,
}

impl CounterResponse {
    /// 200 with `{"count": <count>}` and a JSON content type.
    pub fn success(count: u64) -> Self {
        let mut headers = CORS_HEADERS.to_vec();
        headers.push((CONTENT_TYPE, APPLICATION_JSON));
        Self {
            status: 200,
            headers,
            body: json!({ "count": count }).to_string(),
        }
    }

    /// 500 with `{"error": "<message>"}`. Only the CORS set is attached.
    pub fn failure(err: &CounterError) -> Self {
        Self {
            status: 500,
            headers: CORS_HEADERS.to_vec(),
            body: json!({ "error": err.to_string() }).to_string(),
        }
    }

    pub fn header(&self, name: &str) -> Option<&'static str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| *v)
    }
}

impl From<crate::Result<u64>> for CounterResponse {
    fn from(res: crate::Result<u64>) -> Self {
        match res {
            Ok(count) => CounterResponse::success(count),
            Err(e) => CounterResponse::failure(&e),
        }
    }
}
