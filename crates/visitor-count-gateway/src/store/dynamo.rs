//! DynamoDB-backed [`CounterStore`].
//!
//! The increment is a single `UpdateItem` with an `ADD` update expression and
//! `ReturnValues = ALL_NEW`, which DynamoDB applies atomically and which
//! creates the item (from zero) when it does not exist yet.

use async_trait::async_trait;
use aws_sdk_dynamodb::{
    error::DisplayErrorContext,
    types::{AttributeValue, ReturnValue},
    Client,
};
use serde_json::Value;
use tracing::{debug, instrument};

use visitor_count_core::record::ID_FIELD;
use visitor_count_core::{CounterStore, RecordAttributes, StoreError};

#[derive(Clone, Debug)]
pub struct DynamoCounterStore {
    client: Client,
    table_name: String,
}

impl DynamoCounterStore {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl CounterStore for DynamoCounterStore {
    #[instrument(skip(self), fields(table = %self.table_name))]
    async fn atomic_add(
        &self,
        id: &str,
        field: &str,
        delta: u64,
    ) -> Result<RecordAttributes, StoreError> {
        let out = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key(ID_FIELD, AttributeValue::S(id.to_string()))
            .update_expression("ADD #count :inc")
            .expression_attribute_names("#count", field)
            .expression_attribute_values(":inc", AttributeValue::N(delta.to_string()))
            .return_values(ReturnValue::AllNew)
            .send()
            .await
            .map_err(|e| StoreError::new(DisplayErrorContext(&e).to_string()))?;

        let attrs: RecordAttributes = out
            .attributes()
            .map(|m| m.iter().map(|(k, v)| (k.clone(), to_json(v))).collect())
            .unwrap_or_default();
        debug!(?attrs, "UpdateItem returned");
        Ok(attrs)
    }
}

/// Translate an attribute without interpreting it. Types the counter record
/// never holds map to `null`.
fn to_json(av: &AttributeValue) -> Value {
    match av {
        AttributeValue::S(s) => Value::String(s.clone()),
        AttributeValue::N(n) => number(n),
        AttributeValue::Bool(b) => Value::Bool(*b),
        _ => Value::Null,
    }
}

/// DynamoDB numbers travel as strings.
fn number(n: &str) -> Value {
    n.parse::<u64>()
        .map(Value::from)
        .or_else(|_| n.parse::<i64>().map(Value::from))
        .or_else(|_| n.parse::<f64>().map(Value::from))
        .unwrap_or_else(|_| Value::String(n.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_become_json_numbers() {
        assert_eq!(to_json(&AttributeValue::N("42".into())), Value::from(42u64));
        assert_eq!(to_json(&AttributeValue::N("-3".into())), Value::from(-3i64));
        assert_eq!(to_json(&AttributeValue::N("1.5".into())), Value::from(1.5f64));
    }

    #[test]
    fn unparsable_number_is_kept_as_text() {
        assert_eq!(
            to_json(&AttributeValue::N("abc".into())),
            Value::String("abc".into())
        );
    }

    #[test]
    fn strings_and_other_types() {
        assert_eq!(
            to_json(&AttributeValue::S("visitor-count".into())),
            Value::from("visitor-count")
        );
        assert_eq!(to_json(&AttributeValue::Bool(true)), Value::Bool(true));
        assert_eq!(to_json(&AttributeValue::Null(true)), Value::Null);
        assert_eq!(
            to_json(&AttributeValue::Ss(vec!["a".into()])),
            Value::Null
        );
    }

    #[test]
    fn translated_record_decodes() {
        let attrs: RecordAttributes = [
            ("id", AttributeValue::S("visitor-count".into())),
            ("count", AttributeValue::N("42".into())),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), to_json(v)))
        .collect();

        let vc: visitor_count_core::VisitorCount =
            serde_json::from_value(Value::Object(attrs)).unwrap();
        assert_eq!(vc.count, 42);
        assert_eq!(vc.id, "visitor-count");
    }
}
