use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserScheme {
    #[serde(rename = "accountId")]
    #[serde(default)]
    pub account_id: String,
    #[serde(rename = "displayName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "emailAddress")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(rename = "self")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    #[serde(rename = "avatarUrls")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_urls: Option<AvatarUrlsScheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(rename = "timeZone")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(rename = "accountType")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    // Only present when requested with `expand=groups`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<UserGroupsScheme>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarUrlsScheme {
    #[serde(rename = "48x48")]
    pub size_48: String,
    #[serde(rename = "24x24")]
    pub size_24: String,
    #[serde(rename = "16x16")]
    pub size_16: String,
    #[serde(rename = "32x32")]
    pub size_32: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserGroupsScheme {
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub items: Vec<GroupScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "groupId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(rename = "self")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
}
