use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PermissionSchemePageScheme {
    #[serde(rename = "permissionSchemes")]
    #[serde(default)]
    pub permission_schemes: Vec<PermissionSchemeScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PermissionSchemeScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand: Option<String>,
    #[serde(default)]
    pub id: u64,
    #[serde(rename = "self")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<PermissionGrantScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PermissionGrantScheme {
    #[serde(default)]
    pub id: u64,
    #[serde(rename = "self")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holder: Option<PermissionGrantHolderScheme>,
    #[serde(default)]
    pub permission: String,
}

/// Who receives a permission: `group`, `projectRole`, `user`, `anyone`, ...
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PermissionGrantHolderScheme {
    #[serde(rename = "type")]
    pub holder_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PermissionGrantPageScheme {
    #[serde(default)]
    pub permissions: Vec<PermissionGrantScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PermissionSchemePayloadScheme {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<PermissionGrantPayloadScheme>,
}

impl PermissionSchemePayloadScheme {
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

    pub fn grant(mut self, grant: PermissionGrantPayloadScheme) -> Self {
        self.permissions.push(grant);
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PermissionGrantPayloadScheme {
    pub holder: PermissionGrantHolderScheme,
    pub permission: String,
}

impl PermissionGrantPayloadScheme {
    pub fn new(
        holder_type: impl Into<String>,
        parameter: Option<String>,
        permission: impl Into<String>,
    ) -> Self {
        Self {
            holder: PermissionGrantHolderScheme {
                holder_type: holder_type.into(),
                parameter,
                ..PermissionGrantHolderScheme::default()
            },
            permission: permission.into(),
        }
    }
}
