use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::UserScheme;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkflowSchemePageScheme {
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
    pub values: Vec<WorkflowSchemeScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkflowSchemeScheme {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "defaultWorkflow")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_workflow: Option<String>,
    /// Issue type id to workflow name.
    #[serde(rename = "issueTypeMappings")]
    #[serde(default)]
    pub issue_type_mappings: HashMap<String, String>,
    #[serde(rename = "originalDefaultWorkflow")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_default_workflow: Option<String>,
    #[serde(rename = "originalIssueTypeMappings")]
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub original_issue_type_mappings: HashMap<String, String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(rename = "lastModifiedUser")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_user: Option<UserScheme>,
    #[serde(rename = "lastModified")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    #[serde(rename = "self")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    #[serde(rename = "updateDraftIfNeeded")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_draft_if_needed: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkflowSchemePayloadScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "defaultWorkflow")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_workflow: Option<String>,
    #[serde(rename = "issueTypeMappings")]
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub issue_type_mappings: HashMap<String, String>,
    #[serde(rename = "updateDraftIfNeeded")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_draft_if_needed: Option<bool>,
}

impl WorkflowSchemePayloadScheme {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn default_workflow(mut self, workflow: impl Into<String>) -> Self {
        self.default_workflow = Some(workflow.into());
        self
    }

    pub fn map_issue_type(
        mut self,
        issue_type_id: impl Into<String>,
        workflow: impl Into<String>,
    ) -> Self {
        self.issue_type_mappings
            .insert(issue_type_id.into(), workflow.into());
        self
    }

    pub fn update_draft_if_needed(mut self, update: bool) -> Self {
        self.update_draft_if_needed = Some(update);
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkflowSchemeAssociationPageScheme {
    #[serde(default)]
    pub values: Vec<WorkflowSchemeAssociationsScheme>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkflowSchemeAssociationsScheme {
    #[serde(rename = "projectIds")]
    #[serde(default)]
    pub project_ids: Vec<String>,
    #[serde(rename = "workflowScheme")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_scheme: Option<WorkflowSchemeScheme>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct WorkflowSchemeAssignScheme {
    #[serde(rename = "workflowSchemeId")]
    pub workflow_scheme_id: String,
    #[serde(rename = "projectId")]
    pub project_id: String,
}
