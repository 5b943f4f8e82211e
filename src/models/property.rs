use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertyPageScheme {
    #[serde(default)]
    pub keys: Vec<PropertyKeyScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertyKeyScheme {
    #[serde(rename = "self")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    pub key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityPropertyScheme {
    pub key: String,
    #[serde(default)]
    pub value: serde_json::Value,
}
