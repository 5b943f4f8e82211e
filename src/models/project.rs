use serde::{Deserialize, Serialize};

use super::{AvatarUrlsScheme, ProjectCategoryScheme, StatusScheme, UserScheme};
use crate::query::QueryParams;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectScheme {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "self")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "projectTypeKey")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type_key: Option<String>,
    #[serde(rename = "avatarUrls")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_urls: Option<AvatarUrlsScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead: Option<UserScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simplified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(rename = "isPrivate")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(rename = "projectCategory")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_category: Option<ProjectCategoryScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectSearchPageScheme {
    #[serde(rename = "self")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    #[serde(rename = "nextPage")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
    #[serde(rename = "maxResults")]
    #[serde(default)]
    pub max_results: u32,
    #[serde(rename = "startAt")]
    #[serde(default)]
    pub start_at: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(rename = "isLast")]
    #[serde(default)]
    pub is_last: bool,
    #[serde(default)]
    pub values: Vec<ProjectScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectRoleScheme {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "self")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Statuses available to one issue type of a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectStatusPageScheme {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "self")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    #[serde(default)]
    pub subtask: bool,
    #[serde(default)]
    pub statuses: Vec<StatusScheme>,
}

/// Body for creating or updating a project. Every member is optional on
/// update; create needs at least key, name, type and lead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectPayloadScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "leadAccountId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_account_id: Option<String>,
    #[serde(rename = "projectTypeKey")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type_key: Option<String>,
    #[serde(rename = "projectTemplateKey")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_template_key: Option<String>,
    #[serde(rename = "assigneeType")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_type: Option<String>,
    #[serde(rename = "categoryId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ProjectPayloadScheme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn lead_account_id(mut self, account_id: impl Into<String>) -> Self {
        self.lead_account_id = Some(account_id.into());
        self
    }

    pub fn project_type_key(mut self, type_key: impl Into<String>) -> Self {
        self.project_type_key = Some(type_key.into());
        self
    }

    pub fn project_template_key(mut self, template_key: impl Into<String>) -> Self {
        self.project_template_key = Some(template_key.into());
        self
    }

    pub fn assignee_type(mut self, assignee_type: impl Into<String>) -> Self {
        self.assignee_type = Some(assignee_type.into());
        self
    }

    pub fn category_id(mut self, category_id: u64) -> Self {
        self.category_id = Some(category_id);
        self
    }
}

/// Response of project creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectCreatedScheme {
    #[serde(rename = "self")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    pub id: u64,
    pub key: String,
}

#[derive(Debug, Clone, Default)]
pub struct ProjectSearchOptions {
    pub order_by: Option<String>,
    pub query: Option<String>,
    pub type_key: Option<String>,
    pub category_id: Option<u64>,
    pub action: Option<String>,
    pub expand: Vec<String>,
    pub status: Vec<String>,
    pub ids: Vec<u64>,
    pub keys: Vec<String>,
}

impl ProjectSearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn type_key(mut self, type_key: impl Into<String>) -> Self {
        self.type_key = Some(type_key.into());
        self
    }

    pub fn category_id(mut self, category_id: u64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn expand(mut self, expand: Vec<String>) -> Self {
        self.expand = expand;
        self
    }

    pub fn status(mut self, status: Vec<String>) -> Self {
        self.status = status;
        self
    }

    pub fn ids(mut self, ids: Vec<u64>) -> Self {
        self.ids = ids;
        self
    }

    pub fn keys(mut self, keys: Vec<String>) -> Self {
        self.keys = keys;
        self
    }

    pub(crate) fn apply(&self, params: &mut QueryParams) {
        params
            .add_opt("orderBy", self.order_by.as_deref())
            .add_opt("query", self.query.as_deref())
            .add_opt("typeKey", self.type_key.as_deref())
            .add_opt("categoryId", self.category_id)
            .add_opt("action", self.action.as_deref())
            .add_joined("expand", &self.expand)
            .add_repeated("status", &self.status)
            .add_repeated("id", &self.ids)
            .add_repeated("keys", &self.keys);
    }
}
