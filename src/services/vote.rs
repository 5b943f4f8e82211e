use std::sync::Arc;

use reqwest::Method;

use crate::connector::{Connector, ResponseScheme};
use crate::error::{Error, Result};
use crate::models::IssueVoteScheme;
use crate::query::QueryParams;

use super::ServiceBase;

/// Votes cast on an issue by the calling user.
#[derive(Clone)]
pub struct VoteService {
    base: ServiceBase,
}

impl VoteService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            base: ServiceBase::new(connector, version)?,
        })
    }

    pub async fn gets(&self, issue_key_or_id: &str) -> Result<(IssueVoteScheme, ResponseScheme)> {
        let endpoint = self.votes_endpoint(issue_key_or_id)?;
        self.base.get(&endpoint).await
    }

    pub async fn add(&self, issue_key_or_id: &str) -> Result<ResponseScheme> {
        let endpoint = self.votes_endpoint(issue_key_or_id)?;
        self.base.execute(Method::POST, &endpoint, None).await
    }

    pub async fn delete(&self, issue_key_or_id: &str) -> Result<ResponseScheme> {
        let endpoint = self.votes_endpoint(issue_key_or_id)?;
        self.base.delete(&endpoint).await
    }

    fn votes_endpoint(&self, issue_key_or_id: &str) -> Result<String> {
        if issue_key_or_id.is_empty() {
            return Err(Error::NoIssueKeyOrId);
        }

        Ok(self.base.endpoint(
            &format!("issue/{}/votes", issue_key_or_id),
            &QueryParams::new(),
        ))
    }
}
