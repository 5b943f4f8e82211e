use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationRoleScheme {
    pub key: String,
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "defaultGroups")]
    #[serde(default)]
    pub default_groups: Vec<String>,
    #[serde(rename = "selectedByDefault")]
    #[serde(default)]
    pub selected_by_default: bool,
    #[serde(default)]
    pub defined: bool,
    #[serde(rename = "numberOfSeats")]
    #[serde(default)]
    pub number_of_seats: i64,
    #[serde(rename = "remainingSeats")]
    #[serde(default)]
    pub remaining_seats: i64,
    #[serde(rename = "userCount")]
    #[serde(default)]
    pub user_count: i64,
    #[serde(rename = "userCountDescription")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_count_description: Option<String>,
    #[serde(rename = "hasUnlimitedSeats")]
    #[serde(default)]
    pub has_unlimited_seats: bool,
    #[serde(default)]
    pub platform: bool,
}
