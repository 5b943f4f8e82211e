use std::sync::Arc;

use reqwest::Method;
use serde_json::json;

use crate::connector::{Connector, ResponseScheme};
use crate::error::{Error, Result};
use crate::models::{
    ChangedWorklogPageScheme, WorklogOptions, WorklogPageScheme, WorklogPayloadScheme,
    WorklogScheme,
};
use crate::query::QueryParams;

use super::ServiceBase;

/// Time tracking entries on issues.
#[derive(Clone)]
pub struct WorklogService {
    base: ServiceBase,
}

impl WorklogService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            base: ServiceBase::new(connector, version)?,
        })
    }

    /// Fetches worklogs by id, across issues.
    pub async fn gets(
        &self,
        worklog_ids: &[u64],
        expand: &[String],
    ) -> Result<(Vec<WorklogScheme>, ResponseScheme)> {
        if worklog_ids.is_empty() {
            return Err(Error::NoWorklogIds);
        }

        let mut params = QueryParams::new();
        params.add_joined("expand", expand);

        let endpoint = self.base.endpoint("worklog/list", &params);
        self.base
            .send(Method::POST, &endpoint, &json!({ "ids": worklog_ids }))
            .await
    }

    /// Worklogs of one issue. `started_after` is a Unix timestamp in
    /// milliseconds.
    pub async fn issue(
        &self,
        issue_key_or_id: &str,
        start_at: u32,
        max_results: u32,
        started_after: Option<i64>,
        expand: &[String],
    ) -> Result<(WorklogPageScheme, ResponseScheme)> {
        let mut params = QueryParams::new();
        params
            .add("startAt", start_at)
            .add("maxResults", max_results)
            .add_opt("startedAfter", started_after)
            .add_joined("expand", expand);

        let endpoint = self.worklog_endpoint(issue_key_or_id, None, &params)?;
        self.base.get(&endpoint).await
    }

    pub async fn get(
        &self,
        issue_key_or_id: &str,
        worklog_id: &str,
        expand: &[String],
    ) -> Result<(WorklogScheme, ResponseScheme)> {
        let mut params = QueryParams::new();
        params.add_joined("expand", expand);

        let endpoint = self.worklog_endpoint(issue_key_or_id, Some(worklog_id), &params)?;
        self.base.get(&endpoint).await
    }

    pub async fn add(
        &self,
        issue_key_or_id: &str,
        payload: &WorklogPayloadScheme,
        options: &WorklogOptions,
    ) -> Result<(WorklogScheme, ResponseScheme)> {
        let endpoint = self.worklog_endpoint(issue_key_or_id, None, &options.to_params())?;
        self.base.send(Method::POST, &endpoint, payload).await
    }

    pub async fn update(
        &self,
        issue_key_or_id: &str,
        worklog_id: &str,
        payload: &WorklogPayloadScheme,
        options: &WorklogOptions,
    ) -> Result<(WorklogScheme, ResponseScheme)> {
        let endpoint =
            self.worklog_endpoint(issue_key_or_id, Some(worklog_id), &options.to_params())?;
        self.base.send(Method::PUT, &endpoint, payload).await
    }

    pub async fn delete(
        &self,
        issue_key_or_id: &str,
        worklog_id: &str,
        options: &WorklogOptions,
    ) -> Result<ResponseScheme> {
        let endpoint =
            self.worklog_endpoint(issue_key_or_id, Some(worklog_id), &options.to_params())?;
        self.base.delete(&endpoint).await
    }

    /// Ids of worklogs deleted since `since` (Unix milliseconds).
    pub async fn deleted(&self, since: i64) -> Result<(ChangedWorklogPageScheme, ResponseScheme)> {
        let mut params = QueryParams::new();
        params.add("since", since);

        let endpoint = self.base.endpoint("worklog/deleted", &params);
        self.base.get(&endpoint).await
    }

    /// Ids of worklogs updated since `since` (Unix milliseconds).
    pub async fn updated(
        &self,
        since: i64,
        expand: &[String],
    ) -> Result<(ChangedWorklogPageScheme, ResponseScheme)> {
        let mut params = QueryParams::new();
        params.add("since", since).add_joined("expand", expand);

        let endpoint = self.base.endpoint("worklog/updated", &params);
        self.base.get(&endpoint).await
    }

    fn worklog_endpoint(
        &self,
        issue_key_or_id: &str,
        worklog_id: Option<&str>,
        params: &QueryParams,
    ) -> Result<String> {
        if issue_key_or_id.is_empty() {
            return Err(Error::NoIssueKeyOrId);
        }

        let path = match worklog_id {
            Some("") => return Err(Error::NoWorklogId),
            Some(id) => format!("issue/{}/worklog/{}", issue_key_or_id, id),
            None => format!("issue/{}/worklog", issue_key_or_id),
        };
        Ok(self.base.endpoint(&path, params))
    }
}
