use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{
    CommentBody, IssueTypeScheme, PriorityScheme, ProjectScheme, ResolutionScheme, StatusScheme,
    UserScheme,
};
use crate::datetime::parse_jira_datetime;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueScheme {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub key: String,
    #[serde(rename = "self")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<IssueFieldsScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changelog: Option<ChangelogScheme>,
    #[serde(rename = "renderedFields")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendered_fields: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transitions: Vec<TransitionScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueFieldsScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    // Plain text on version 2, an ADF document on version 3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<CommentBody>,
    #[serde(rename = "issuetype")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_type: Option<IssueTypeScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<PriorityScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<ResolutionScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<UserScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporter: Option<UserScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    #[serde(rename = "resolutiondate")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectScheme>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,

    // Custom fields are keyed by their `customfield_NNNNN` id.
    #[serde(flatten)]
    pub custom_fields: HashMap<String, serde_json::Value>,
}

impl IssueFieldsScheme {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created
            .as_deref()
            .and_then(|s| parse_jira_datetime(s).ok())
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated
            .as_deref()
            .and_then(|s| parse_jira_datetime(s).ok())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangelogScheme {
    #[serde(rename = "startAt")]
    #[serde(default)]
    pub start_at: u32,
    #[serde(rename = "maxResults")]
    #[serde(default)]
    pub max_results: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub histories: Vec<ChangelogHistoryScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangelogHistoryScheme {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<UserScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default)]
    pub items: Vec<ChangelogItemScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangelogItemScheme {
    pub field: String,
    #[serde(rename = "fieldtype")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(rename = "fromString")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(rename = "toString")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_string: Option<String>,
}

/// Body for creating or editing an issue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssuePayloadScheme {
    #[serde(default)]
    pub fields: serde_json::Map<String, serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update: Option<serde_json::Value>,
}

impl IssuePayloadScheme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn project_key(self, key: impl Into<String>) -> Self {
        self.field("project", serde_json::json!({ "key": key.into() }))
    }

    pub fn issue_type(self, name: impl Into<String>) -> Self {
        self.field("issuetype", serde_json::json!({ "name": name.into() }))
    }

    pub fn summary(self, summary: impl Into<String>) -> Self {
        self.field("summary", serde_json::Value::String(summary.into()))
    }

    pub fn description(self, description: impl Into<CommentBody>) -> Self {
        let value = serde_json::to_value(description.into()).unwrap_or_default();
        self.field("description", value)
    }

    pub fn assignee(self, account_id: impl Into<String>) -> Self {
        self.field("assignee", serde_json::json!({ "accountId": account_id.into() }))
    }

    pub fn labels(self, labels: Vec<String>) -> Self {
        self.field("labels", serde_json::json!(labels))
    }

    /// Sets any field, including custom ones, by id.
    pub fn field(mut self, id: impl Into<String>, value: serde_json::Value) -> Self {
        self.fields.insert(id.into(), value);
        self
    }

    pub fn update(mut self, update: serde_json::Value) -> Self {
        self.update = Some(update);
        self
    }
}

/// Reference returned by issue creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueResponseScheme {
    pub id: String,
    pub key: String,
    #[serde(rename = "self")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueTransitionsScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand: Option<String>,
    #[serde(default)]
    pub transitions: Vec<TransitionScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransitionScheme {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<StatusScheme>,
    #[serde(rename = "hasScreen")]
    #[serde(default)]
    pub has_screen: bool,
    #[serde(rename = "isGlobal")]
    #[serde(default)]
    pub is_global: bool,
    #[serde(rename = "isInitial")]
    #[serde(default)]
    pub is_initial: bool,
    #[serde(rename = "isConditional")]
    #[serde(default)]
    pub is_conditional: bool,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct TransitionPayloadScheme<'a> {
    pub transition: TransitionIdScheme<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<&'a serde_json::Map<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update: Option<&'a serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct TransitionIdScheme<'a> {
    pub id: &'a str,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueWatcherScheme {
    #[serde(rename = "self")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    #[serde(rename = "isWatching")]
    #[serde(default)]
    pub is_watching: bool,
    #[serde(rename = "watchCount")]
    #[serde(default)]
    pub watch_count: u32,
    #[serde(default)]
    pub watchers: Vec<UserScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueVoteScheme {
    #[serde(rename = "self")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    #[serde(default)]
    pub votes: u32,
    #[serde(rename = "hasVoted")]
    #[serde(default)]
    pub has_voted: bool,
    #[serde(default)]
    pub voters: Vec<UserScheme>,
}
