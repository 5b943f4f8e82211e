use std::sync::Arc;

use reqwest::Method;
use serde_json::json;

use crate::connector::{Connector, ResponseScheme};
use crate::error::{Error, Result};
use crate::models::{
    IssuePayloadScheme, IssueResponseScheme, IssueScheme, IssueTransitionsScheme,
    TransitionIdScheme, TransitionPayloadScheme,
};
use crate::query::QueryParams;

use super::{CommentService, PropertyService, ServiceBase, VoteService, WatcherService, WorklogService};

/// Issues and the resources nested beneath them.
#[derive(Clone)]
pub struct IssueService {
    base: ServiceBase,
    pub comment: CommentService,
    pub worklog: WorklogService,
    pub property: PropertyService,
    pub watcher: WatcherService,
    pub vote: VoteService,
}

impl IssueService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            comment: CommentService::new(connector.clone(), version)?,
            worklog: WorklogService::new(connector.clone(), version)?,
            property: PropertyService::new(connector.clone(), version)?,
            watcher: WatcherService::new(connector.clone(), version)?,
            vote: VoteService::new(connector.clone(), version)?,
            base: ServiceBase::new(connector, version)?,
        })
    }

    pub async fn get(
        &self,
        issue_key_or_id: &str,
        fields: &[String],
        expand: &[String],
    ) -> Result<(IssueScheme, ResponseScheme)> {
        let mut params = QueryParams::new();
        params.add_joined("fields", fields).add_joined("expand", expand);

        let endpoint = self.issue_endpoint(issue_key_or_id, "", &params)?;
        self.base.get(&endpoint).await
    }

    pub async fn create(
        &self,
        payload: &IssuePayloadScheme,
    ) -> Result<(IssueResponseScheme, ResponseScheme)> {
        let endpoint = self.base.endpoint("issue", &QueryParams::new());
        self.base.send(Method::POST, &endpoint, payload).await
    }

    /// Edits fields of an issue. Jira answers with no content.
    pub async fn update(
        &self,
        issue_key_or_id: &str,
        notify: bool,
        payload: &IssuePayloadScheme,
    ) -> Result<ResponseScheme> {
        let mut params = QueryParams::new();
        params.add("notifyUsers", notify);

        let endpoint = self.issue_endpoint(issue_key_or_id, "", &params)?;
        self.base.send_only(Method::PUT, &endpoint, payload).await
    }

    pub async fn delete(
        &self,
        issue_key_or_id: &str,
        delete_subtasks: bool,
    ) -> Result<ResponseScheme> {
        let mut params = QueryParams::new();
        params.add("deleteSubtasks", delete_subtasks);

        let endpoint = self.issue_endpoint(issue_key_or_id, "", &params)?;
        self.base.delete(&endpoint).await
    }

    pub async fn assign(&self, issue_key_or_id: &str, account_id: &str) -> Result<ResponseScheme> {
        if account_id.is_empty() {
            return Err(Error::NoAccountId);
        }

        let endpoint = self.issue_endpoint(issue_key_or_id, "/assignee", &QueryParams::new())?;
        self.base
            .send_only(Method::PUT, &endpoint, &json!({ "accountId": account_id }))
            .await
    }

    /// Transitions available to the caller from the issue's current status.
    pub async fn transitions(
        &self,
        issue_key_or_id: &str,
    ) -> Result<(IssueTransitionsScheme, ResponseScheme)> {
        let endpoint =
            self.issue_endpoint(issue_key_or_id, "/transitions", &QueryParams::new())?;
        self.base.get(&endpoint).await
    }

    /// Performs a transition, optionally setting fields on the transition
    /// screen through `payload`.
    pub async fn move_issue(
        &self,
        issue_key_or_id: &str,
        transition_id: &str,
        payload: Option<&IssuePayloadScheme>,
    ) -> Result<ResponseScheme> {
        if transition_id.is_empty() {
            return Err(Error::NoTransitionId);
        }

        let endpoint =
            self.issue_endpoint(issue_key_or_id, "/transitions", &QueryParams::new())?;
        let body = TransitionPayloadScheme {
            transition: TransitionIdScheme { id: transition_id },
            fields: payload.map(|p| &p.fields).filter(|f| !f.is_empty()),
            update: payload.and_then(|p| p.update.as_ref()),
        };
        self.base.send_only(Method::POST, &endpoint, &body).await
    }

    fn issue_endpoint(
        &self,
        issue_key_or_id: &str,
        suffix: &str,
        params: &QueryParams,
    ) -> Result<String> {
        if issue_key_or_id.is_empty() {
            return Err(Error::NoIssueKeyOrId);
        }

        Ok(self
            .base
            .endpoint(&format!("issue/{}{}", issue_key_or_id, suffix), params))
    }
}
