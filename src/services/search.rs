use std::sync::Arc;

use reqwest::Method;

use crate::connector::{Connector, ResponseScheme};
use crate::error::{Error, Result};
use crate::models::{IssueSearchScheme, SearchParams, SearchPayloadScheme};
use crate::query::QueryParams;

use super::ServiceBase;

/// JQL issue search.
#[derive(Clone)]
pub struct SearchService {
    base: ServiceBase,
}

impl SearchService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            base: ServiceBase::new(connector, version)?,
        })
    }

    /// Searches with the JQL in the request body. Preferred for long queries.
    pub async fn post(
        &self,
        jql: &str,
        params: &SearchParams,
    ) -> Result<(IssueSearchScheme, ResponseScheme)> {
        if jql.is_empty() {
            return Err(Error::NoJql);
        }

        let payload = SearchPayloadScheme { jql, params };
        let endpoint = self.base.endpoint("search", &QueryParams::new());
        self.base.send(Method::POST, &endpoint, &payload).await
    }

    pub async fn get(
        &self,
        jql: &str,
        params: &SearchParams,
    ) -> Result<(IssueSearchScheme, ResponseScheme)> {
        if jql.is_empty() {
            return Err(Error::NoJql);
        }

        let endpoint = self.base.endpoint("search", &params.to_params(jql));
        self.base.get(&endpoint).await
    }
}
