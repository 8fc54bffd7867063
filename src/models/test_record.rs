use serde::{Deserialize, Serialize};

/// Echo/parsing record for POST /postJSON. Wire names keep the capitalised
/// `Name`/`Number` keys clients already send; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TestRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Number")]
    pub number: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
}
