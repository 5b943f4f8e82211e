use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerInfoScheme {
    #[serde(rename = "baseUrl")]
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub version: String,
    #[serde(rename = "versionNumbers")]
    #[serde(default)]
    pub version_numbers: Vec<u32>,
    #[serde(rename = "deploymentType")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_type: Option<String>,
    #[serde(rename = "buildNumber")]
    #[serde(default)]
    pub build_number: u64,
    #[serde(rename = "buildDate")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_date: Option<String>,
    #[serde(rename = "serverTime")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_time: Option<String>,
    #[serde(rename = "scmInfo")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scm_info: Option<String>,
    #[serde(rename = "serverTitle")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_title: Option<String>,
    #[serde(rename = "healthChecks")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub health_checks: Vec<HealthCheckScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthCheckScheme {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub passed: bool,
}
