use std::sync::Arc;

use reqwest::Method;

use crate::connector::{Connector, ResponseScheme};
use crate::error::{Error, Result};
use crate::models::IssueWatcherScheme;
use crate::query::QueryParams;

use super::ServiceBase;

#[derive(Clone)]
pub struct WatcherService {
    base: ServiceBase,
}

impl WatcherService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            base: ServiceBase::new(connector, version)?,
        })
    }

    pub async fn gets(&self, issue_key_or_id: &str) -> Result<(IssueWatcherScheme, ResponseScheme)> {
        let endpoint = self.watchers_endpoint(issue_key_or_id, &QueryParams::new())?;
        self.base.get(&endpoint).await
    }

    /// Adds the calling user as a watcher.
    pub async fn add(&self, issue_key_or_id: &str) -> Result<ResponseScheme> {
        let endpoint = self.watchers_endpoint(issue_key_or_id, &QueryParams::new())?;
        self.base.execute(Method::POST, &endpoint, None).await
    }

    pub async fn delete(&self, issue_key_or_id: &str, account_id: &str) -> Result<ResponseScheme> {
        if account_id.is_empty() {
            return Err(Error::NoWatcherAccountId);
        }

        let mut params = QueryParams::new();
        params.add("accountId", account_id);

        let endpoint = self.watchers_endpoint(issue_key_or_id, &params)?;
        self.base.delete(&endpoint).await
    }

    fn watchers_endpoint(&self, issue_key_or_id: &str, params: &QueryParams) -> Result<String> {
        if issue_key_or_id.is_empty() {
            return Err(Error::NoIssueKeyOrId);
        }

        Ok(self
            .base
            .endpoint(&format!("issue/{}/watchers", issue_key_or_id), params))
    }
}
