use serde::{Deserialize, Serialize};

use super::{GroupScheme, ProjectRoleScheme, ProjectScheme, UserScheme};
use crate::query::QueryParams;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterScheme {
    #[serde(rename = "self")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<UserScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jql: Option<String>,
    #[serde(rename = "viewUrl")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_url: Option<String>,
    #[serde(rename = "searchUrl")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favourite: Option<bool>,
    #[serde(rename = "favouritedCount")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favourited_count: Option<u32>,
    #[serde(rename = "sharePermissions")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub share_permissions: Vec<SharePermissionScheme>,
    #[serde(rename = "editPermissions")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edit_permissions: Vec<SharePermissionScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterPageScheme {
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
    pub values: Vec<FilterScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterPayloadScheme {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jql: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favourite: Option<bool>,
    #[serde(rename = "sharePermissions")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub share_permissions: Vec<SharePermissionScheme>,
    #[serde(rename = "editPermissions")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edit_permissions: Vec<SharePermissionScheme>,
}

impl FilterPayloadScheme {
    pub fn new(name: impl Into<String>, jql: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            jql: Some(jql.into()),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn favourite(mut self, favourite: bool) -> Self {
        self.favourite = Some(favourite);
        self
    }

    pub fn share(mut self, permission: SharePermissionScheme) -> Self {
        self.share_permissions.push(permission);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct FilterSearchOptions {
    pub name: Option<String>,
    pub account_id: Option<String>,
    pub group: Option<String>,
    pub project_id: Option<u64>,
    pub ids: Vec<u64>,
    pub order_by: Option<String>,
    pub expand: Vec<String>,
}

impl FilterSearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn project_id(mut self, project_id: u64) -> Self {
        self.project_id = Some(project_id);
        self
    }

    pub fn ids(mut self, ids: Vec<u64>) -> Self {
        self.ids = ids;
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
            .add_opt("filterName", self.name.as_deref())
            .add_opt("accountId", self.account_id.as_deref())
            .add_opt("groupname", self.group.as_deref())
            .add_opt("projectId", self.project_id)
            .add_repeated("id", &self.ids)
            .add_opt("orderBy", self.order_by.as_deref())
            .add_joined("expand", &self.expand);
    }
}

/// Who a filter or dashboard is shared with.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SharePermissionScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// `user`, `group`, `project`, `projectRole`, `global` or `authenticated`.
    #[serde(rename = "type")]
    pub permission_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<ProjectRoleScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<GroupScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserScheme>,
}

/// Body for adding a share permission to a filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PermissionFilterPayloadScheme {
    #[serde(rename = "type")]
    pub permission_type: String,
    #[serde(rename = "projectId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(rename = "groupname")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(rename = "projectRoleId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_role_id: Option<String>,
    #[serde(rename = "accountId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rights: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShareScopeScheme {
    pub scope: String,
}
