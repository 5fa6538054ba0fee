use serde::{Deserialize, Serialize};

/// Primary key of the single counter record.
pub const RECORD_ID: &str = "visitor-count";

/// Name of the key attribute holding [`RECORD_ID`].
pub const ID_FIELD: &str = "id";

/// Name of the numeric field the atomic add targets.
pub const COUNT_FIELD: &str = "count";

/// The sole persisted entity. Only one instance exists, keyed by [`RECORD_ID`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorCount {
    #[serde(default)]
    pub id: String,
    pub count: u64,
}

impl VisitorCount {
    pub fn new(count: u64) -> Self {
        Self {
            id: RECORD_ID.to_string(),
            count,
        }
    }
}
