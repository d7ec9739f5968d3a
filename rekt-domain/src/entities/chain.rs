// Chain entity

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Chain {
    pub id: serde_json::Value,
    #[serde(default)]
    pub absolute_chain_id: Option<serde_json::Value>,
    #[serde(default)]
    pub abbr: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub chain_type: Option<String>,
}
