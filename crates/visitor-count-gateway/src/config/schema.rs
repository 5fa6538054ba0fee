pub const DEFAULT_TABLE_NAME: &str = "VisitorCount";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Table name or table ARN; passed to DynamoDB as given.
    pub table_name: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.into(),
        }
    }
}
