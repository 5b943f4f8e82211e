use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::query::QueryParams;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PermissionScheme {
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Wire shape of `GET permissions`: permissions keyed by their key.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct PermissionMapScheme {
    #[serde(default)]
    pub permissions: HashMap<String, PermissionScheme>,
}

impl PermissionMapScheme {
    /// Flattens the map into a list sorted by key.
    pub(crate) fn into_sorted(self) -> Vec<PermissionScheme> {
        let mut permissions: Vec<PermissionScheme> = self.permissions.into_values().collect();
        permissions.sort_by(|a, b| a.key.cmp(&b.key));
        permissions
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PermissionCheckPayload {
    #[serde(rename = "globalPermissions")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub global_permissions: Vec<String>,
    #[serde(rename = "accountId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(rename = "projectPermissions")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub project_permissions: Vec<BulkProjectPermissionsScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BulkProjectPermissionsScheme {
    #[serde(default)]
    pub issues: Vec<u64>,
    #[serde(default)]
    pub projects: Vec<u64>,
    #[serde(default)]
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PermissionGrantsScheme {
    #[serde(rename = "projectPermissions")]
    #[serde(default)]
    pub project_permissions: Vec<BulkProjectPermissionGrantsScheme>,
    #[serde(rename = "globalPermissions")]
    #[serde(default)]
    pub global_permissions: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BulkProjectPermissionGrantsScheme {
    pub permission: String,
    #[serde(default)]
    pub issues: Vec<u64>,
    #[serde(default)]
    pub projects: Vec<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PermittedProjectsScheme {
    #[serde(default)]
    pub projects: Vec<ProjectIdentifierScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectIdentifierScheme {
    pub id: u64,
    pub key: String,
}

#[derive(Debug, Clone, Default)]
pub struct MyPermissionsOptions {
    pub permissions: Vec<String>,
    pub project_key: Option<String>,
    pub project_id: Option<String>,
    pub issue_key: Option<String>,
    pub issue_id: Option<String>,
}

impl MyPermissionsOptions {
    pub fn new(permissions: Vec<String>) -> Self {
        Self {
            permissions,
            ..Self::default()
        }
    }

    pub fn project_key(mut self, key: impl Into<String>) -> Self {
        self.project_key = Some(key.into());
        self
    }

    pub fn project_id(mut self, id: impl Into<String>) -> Self {
        self.project_id = Some(id.into());
        self
    }

    pub fn issue_key(mut self, key: impl Into<String>) -> Self {
        self.issue_key = Some(key.into());
        self
    }

    pub fn issue_id(mut self, id: impl Into<String>) -> Self {
        self.issue_id = Some(id.into());
        self
    }

    pub(crate) fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .add_joined("permissions", &self.permissions)
            .add_opt("projectKey", self.project_key.as_deref())
            .add_opt("projectId", self.project_id.as_deref())
            .add_opt("issueKey", self.issue_key.as_deref())
            .add_opt("issueId", self.issue_id.as_deref());
        params
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MyPermissionsScheme {
    #[serde(default)]
    pub permissions: HashMap<String, MyPermissionScheme>,
}

impl MyPermissionsScheme {
    pub fn has(&self, key: &str) -> bool {
        self.permissions
            .get(key)
            .map(|p| p.have_permission)
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MyPermissionScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "havePermission")]
    #[serde(default)]
    pub have_permission: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_permission_map_into_sorted() {
        let json_data = json!({
            "permissions": {
                "BULK_CHANGE": {"key": "BULK_CHANGE", "name": "Bulk Change", "type": "GLOBAL", "description": "Ability to modify a collection of issues at once."},
                "ADD_COMMENTS": {"key": "ADD_COMMENTS", "name": "Add Comments", "type": "PROJECT", "description": "Ability to comment on issues."}
            }
        });

        let map: PermissionMapScheme = serde_json::from_value(json_data).unwrap();
        let permissions = map.into_sorted();

        assert_eq!(permissions.len(), 2);
        assert_eq!(permissions[0].key, "ADD_COMMENTS");
        assert_eq!(permissions[1].permission_type.as_deref(), Some("GLOBAL"));
    }

    #[test]
    fn test_my_permissions_has() {
        let json_data = json!({
            "permissions": {
                "EDIT_ISSUES": {"id": "12", "key": "EDIT_ISSUES", "name": "Edit Issues", "type": "PROJECT", "havePermission": true}
            }
        });

        let mine: MyPermissionsScheme = serde_json::from_value(json_data).unwrap();

        assert!(mine.has("EDIT_ISSUES"));
        assert!(!mine.has("DELETE_ISSUES"));
    }

    #[test]
    fn test_my_permissions_options_params() {
        let options = MyPermissionsOptions::new(vec![
            "BROWSE_PROJECTS".to_string(),
            "EDIT_ISSUES".to_string(),
        ])
        .project_key("KP");

        assert_eq!(
            options.to_params().encode(),
            "permissions=BROWSE_PROJECTS%2CEDIT_ISSUES&projectKey=KP"
        );
    }

    #[test]
    fn test_permission_check_payload_serialization() {
        let payload = PermissionCheckPayload {
            global_permissions: vec!["ADMINISTER".to_string()],
            account_id: Some("5b10a2844c20165700ede21g".to_string()),
            project_permissions: vec![BulkProjectPermissionsScheme {
                issues: vec![10010],
                projects: vec![10001],
                permissions: vec!["EDIT_ISSUES".to_string()],
            }],
        };

        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["globalPermissions"], json!(["ADMINISTER"]));
        assert_eq!(json["projectPermissions"][0]["projects"], json!([10001]));
    }
}
