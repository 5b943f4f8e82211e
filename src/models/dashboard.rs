use serde::{Deserialize, Serialize};

use super::{SharePermissionScheme, UserScheme};
use crate::query::QueryParams;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardPageScheme {
    #[serde(rename = "startAt")]
    #[serde(default)]
    pub start_at: u32,
    #[serde(rename = "maxResults")]
    #[serde(default)]
    pub max_results: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default)]
    pub dashboards: Vec<DashboardScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardSearchPageScheme {
    #[serde(rename = "self")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
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
    pub values: Vec<DashboardScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardScheme {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "isFavourite")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favourite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<UserScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popularity: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<u64>,
    #[serde(rename = "self")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    #[serde(rename = "sharePermissions")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub share_permissions: Vec<SharePermissionScheme>,
    #[serde(rename = "editPermissions")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edit_permissions: Vec<SharePermissionScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardPayloadScheme {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    // Jira rejects the payload when either list is missing, so both are
    // always serialized.
    #[serde(rename = "sharePermissions")]
    #[serde(default)]
    pub share_permissions: Vec<SharePermissionScheme>,
    #[serde(rename = "editPermissions")]
    #[serde(default)]
    pub edit_permissions: Vec<SharePermissionScheme>,
}

impl DashboardPayloadScheme {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn share(mut self, permission: SharePermissionScheme) -> Self {
        self.share_permissions.push(permission);
        self
    }

    pub fn editable_by(mut self, permission: SharePermissionScheme) -> Self {
        self.edit_permissions.push(permission);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct DashboardSearchOptions {
    pub dashboard_name: Option<String>,
    pub account_id: Option<String>,
    pub group_permission_name: Option<String>,
    pub project_id: Option<u64>,
    pub order_by: Option<String>,
    pub expand: Vec<String>,
}

impl DashboardSearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dashboard_name(mut self, name: impl Into<String>) -> Self {
        self.dashboard_name = Some(name.into());
        self
    }

    pub fn account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    pub fn group_permission_name(mut self, group: impl Into<String>) -> Self {
        self.group_permission_name = Some(group.into());
        self
    }

    pub fn project_id(mut self, project_id: u64) -> Self {
        self.project_id = Some(project_id);
        self
    }

    pub fn order_by(mut self, order_by: impl Into<String>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }

    pub fn expand(mut self, expand: Vec<String>) -> Self {
        self.expand = expand;
        self
    }

    pub(crate) fn apply(&self, params: &mut QueryParams) {
        params
            .add_opt("dashboardName", self.dashboard_name.as_deref())
            .add_opt("accountId", self.account_id.as_deref())
            .add_opt("groupname", self.group_permission_name.as_deref())
            .add_opt("projectId", self.project_id)
            .add_opt("orderBy", self.order_by.as_deref())
            .add_joined("expand", &self.expand);
    }
}
