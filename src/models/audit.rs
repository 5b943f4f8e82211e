use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditRecordPageScheme {
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub records: Vec<AuditRecordScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditRecordScheme {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(rename = "remoteAddress")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_address: Option<String>,
    #[serde(rename = "authorKey")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_key: Option<String>,
    #[serde(rename = "authorAccountId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "eventSource")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "objectItem")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_item: Option<AuditRecordItemScheme>,
    #[serde(rename = "changedValues")]
    #[serde(default)]
    pub changed_values: Vec<AuditRecordChangedValueScheme>,
    #[serde(rename = "associatedItems")]
    #[serde(default)]
    pub associated_items: Vec<AuditRecordItemScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditRecordItemScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "typeName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(rename = "parentId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(rename = "parentName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditRecordChangedValueScheme {
    #[serde(rename = "fieldName")]
    pub field_name: String,
    #[serde(rename = "changedFrom")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changed_from: Option<String>,
    #[serde(rename = "changedTo")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changed_to: Option<String>,
}

/// Optional narrowing for the audit record listing.
#[derive(Debug, Clone, Default)]
pub struct AuditRecordGetOptions {
    /// Free text matched against summary, category, object and author.
    pub filter: String,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl AuditRecordGetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    pub fn from_date(mut self, from: NaiveDate) -> Self {
        self.from = Some(from);
        self
    }

    pub fn to_date(mut self, to: NaiveDate) -> Self {
        self.to = Some(to);
        self
    }
}
