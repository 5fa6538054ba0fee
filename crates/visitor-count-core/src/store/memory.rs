use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;

use super::{CounterStore, RecordAttributes};
use crate::error::StoreError;
use crate::record::ID_FIELD;

/// Process-local [`CounterStore`].
///
/// Each add holds the per-key entry lock for the whole read-modify-write, so
/// concurrent adds on the same record serialize.
#[derive(Default)]
pub struct MemoryStore {
    records: DashMap<String, RecordAttributes>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Store pre-populated with one record whose `field` holds `value`.
    pub fn seeded(id: &str, field: &str, value: u64) -> Self {
        let store = Self::new();
        let mut attrs = RecordAttributes::new();
        attrs.insert(ID_FIELD.into(), Value::from(id));
        attrs.insert(field.into(), Value::from(value));
        store.records.insert(id.to_string(), attrs);
        store
    }

    /// Current value of `field`, if the record exists and the field is numeric.
    pub fn get(&self, id: &str, field: &str) -> Option<u64> {
        self.records
            .get(id)
            .and_then(|r| r.get(field).and_then(Value::as_u64))
    }
}

#[async_trait]
impl CounterStore for MemoryStore {
    async fn atomic_add(
        &self,
        id: &str,
        field: &str,
        delta: u64,
    ) -> Result<RecordAttributes, StoreError> {
        let mut entry = self.records.entry(id.to_string()).or_insert_with(|| {
            let mut attrs = RecordAttributes::new();
            attrs.insert(ID_FIELD.into(), Value::from(id));
            attrs
        });

        let current = match entry.get(field) {
            None => 0,
            Some(v) => v.as_u64().ok_or_else(|| {
                StoreError::new(format!("field {field} is not a non-negative integer"))
            })?,
        };
        let next = current
            .checked_add(delta)
            .ok_or_else(|| StoreError::new(format!("field {field} would overflow")))?;

        entry.insert(field.to_string(), Value::from(next));
        Ok(entry.value().clone())
    }
}
