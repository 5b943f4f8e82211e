use std::sync::Arc;

use reqwest::Method;

use crate::connector::{Connector, ResponseScheme};
use crate::error::{Error, Result};
use crate::models::{
    WorkflowSchemeAssignScheme, WorkflowSchemeAssociationPageScheme, WorkflowSchemePageScheme,
    WorkflowSchemePayloadScheme, WorkflowSchemeScheme,
};
use crate::query::QueryParams;

use super::ServiceBase;

/// Workflow schemes and their project associations.
#[derive(Clone)]
pub struct WorkflowSchemeService {
    base: ServiceBase,
}

impl WorkflowSchemeService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            base: ServiceBase::new(connector, version)?,
        })
    }

    pub async fn gets(
        &self,
        start_at: u32,
        max_results: u32,
    ) -> Result<(WorkflowSchemePageScheme, ResponseScheme)> {
        let mut params = QueryParams::new();
        params.add("startAt", start_at).add("maxResults", max_results);

        let endpoint = self.base.endpoint("workflowscheme", &params);
        self.base.get(&endpoint).await
    }

    /// Fetches a scheme, or its draft when `return_draft` is set and a draft
    /// exists.
    pub async fn get(
        &self,
        scheme_id: u64,
        return_draft: bool,
    ) -> Result<(WorkflowSchemeScheme, ResponseScheme)> {
        let mut params = QueryParams::new();
        params.add("returnDraftIfExists", return_draft);

        let endpoint = self.scheme_endpoint(scheme_id, &params)?;
        self.base.get(&endpoint).await
    }

    pub async fn create(
        &self,
        payload: &WorkflowSchemePayloadScheme,
    ) -> Result<(WorkflowSchemeScheme, ResponseScheme)> {
        let endpoint = self.base.endpoint("workflowscheme", &QueryParams::new());
        self.base.send(Method::POST, &endpoint, payload).await
    }

    pub async fn update(
        &self,
        scheme_id: u64,
        payload: &WorkflowSchemePayloadScheme,
    ) -> Result<(WorkflowSchemeScheme, ResponseScheme)> {
        let endpoint = self.scheme_endpoint(scheme_id, &QueryParams::new())?;
        self.base.send(Method::PUT, &endpoint, payload).await
    }

    pub async fn delete(&self, scheme_id: u64) -> Result<ResponseScheme> {
        let endpoint = self.scheme_endpoint(scheme_id, &QueryParams::new())?;
        self.base.delete(&endpoint).await
    }

    /// Workflow schemes used by the given projects.
    pub async fn associations(
        &self,
        project_ids: &[u64],
    ) -> Result<(WorkflowSchemeAssociationPageScheme, ResponseScheme)> {
        if project_ids.is_empty() {
            return Err(Error::NoProjectIdOrKey);
        }

        let mut params = QueryParams::new();
        params.add_repeated("projectId", project_ids);

        let endpoint = self.base.endpoint("workflowscheme/project", &params);
        self.base.get(&endpoint).await
    }

    /// Assigns a scheme to a project that has no issues yet.
    pub async fn assign(&self, scheme_id: &str, project_id: &str) -> Result<ResponseScheme> {
        if scheme_id.is_empty() {
            return Err(Error::NoWorkflowSchemeId);
        }
        if project_id.is_empty() {
            return Err(Error::NoProjectIdOrKey);
        }

        let payload = WorkflowSchemeAssignScheme {
            workflow_scheme_id: scheme_id.to_string(),
            project_id: project_id.to_string(),
        };
        let endpoint = self
            .base
            .endpoint("workflowscheme/project", &QueryParams::new());
        self.base.send_only(Method::PUT, &endpoint, &payload).await
    }

    fn scheme_endpoint(&self, scheme_id: u64, params: &QueryParams) -> Result<String> {
        if scheme_id == 0 {
            return Err(Error::NoWorkflowSchemeId);
        }

        Ok(self
            .base
            .endpoint(&format!("workflowscheme/{}", scheme_id), params))
    }
}
