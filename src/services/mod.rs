//! One service per Jira resource group.
//!
//! Every service follows the same shape: check the required identifiers,
//! build `rest/api/{version}/{path}` plus a sorted query string, then hand
//! the request to the shared [`Connector`].

pub mod application_role;
pub mod audit;
pub mod comment;
pub mod dashboard;
pub mod filter;
pub mod filter_share;
pub mod issue;
pub mod issue_property;
pub mod myself;
pub mod permission;
pub mod permission_grant;
pub mod permission_scheme;
pub mod priority;
pub mod project;
pub mod project_category;
pub mod resolution;
pub mod search;
pub mod server_info;
pub mod vote;
pub mod watcher;
pub mod workflow_scheme;
pub mod worklog;

pub use application_role::ApplicationRoleService;
pub use audit::AuditRecordService;
pub use comment::CommentService;
pub use dashboard::DashboardService;
pub use filter::FilterService;
pub use filter_share::FilterShareService;
pub use issue::IssueService;
pub use issue_property::PropertyService;
pub use myself::MySelfService;
pub use permission::PermissionService;
pub use permission_grant::PermissionGrantService;
pub use permission_scheme::PermissionSchemeService;
pub use priority::PriorityService;
pub use project::ProjectService;
pub use project_category::ProjectCategoryService;
pub use resolution::ResolutionService;
pub use search::SearchService;
pub use server_info::ServerInfoService;
pub use vote::VoteService;
pub use watcher::WatcherService;
pub use workflow_scheme::WorkflowSchemeService;
pub use worklog::WorklogService;

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::connector::{Connector, ResponseScheme};
use crate::error::{Error, Result};
use crate::query::QueryParams;

/// Connector handle plus API version shared by every service.
#[derive(Clone)]
pub(crate) struct ServiceBase {
    connector: Arc<dyn Connector>,
    version: String,
}

impl ServiceBase {
    pub(crate) fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        if version.is_empty() {
            return Err(Error::NoVersionProvided);
        }

        Ok(Self {
            connector,
            version: version.to_string(),
        })
    }

    pub(crate) fn version(&self) -> &str {
        &self.version
    }

    /// `rest/api/{version}/{path}` followed by the encoded query, if any.
    pub(crate) fn endpoint(&self, path: &str, params: &QueryParams) -> String {
        params.with_path(&format!("rest/api/{}/{}", self.version, path))
    }

    /// Sends a request without decoding the body.
    pub(crate) async fn execute(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<ResponseScheme> {
        let request = self.connector.new_request(method, endpoint, body)?;
        self.connector.call(request).await
    }

    /// Sends a request and decodes the JSON body into `T`.
    pub(crate) async fn fetch<T>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<(T, ResponseScheme)>
    where
        T: DeserializeOwned,
    {
        let response = self.execute(method, endpoint, body).await?;
        let value = response.json::<T>()?;
        Ok((value, response))
    }

    pub(crate) async fn get<T>(&self, endpoint: &str) -> Result<(T, ResponseScheme)>
    where
        T: DeserializeOwned,
    {
        self.fetch(Method::GET, endpoint, None).await
    }

    /// Serializes `payload` and sends it, decoding the response into `T`.
    pub(crate) async fn send<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        payload: &B,
    ) -> Result<(T, ResponseScheme)>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(payload)?;
        self.fetch(method, endpoint, Some(&body)).await
    }

    /// Serializes `payload` and sends it, ignoring any response body.
    pub(crate) async fn send_only<B>(
        &self,
        method: Method,
        endpoint: &str,
        payload: &B,
    ) -> Result<ResponseScheme>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(payload)?;
        self.execute(method, endpoint, Some(&body)).await
    }

    pub(crate) async fn delete(&self, endpoint: &str) -> Result<ResponseScheme> {
        self.execute(Method::DELETE, endpoint, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::mock::MockConnector;
    use serde_json::json;

    #[test]
    fn test_new_requires_version() {
        let mock = MockConnector::ok(json!({}));

        let result = ServiceBase::new(mock, "");

        assert!(matches!(result, Err(Error::NoVersionProvided)));
    }

    macro_rules! rejects_empty_version {
        ($connector:expr, $($service:ident),+ $(,)?) => {
            vec![$((
                stringify!($service),
                matches!($service::new($connector.clone(), ""), Err(Error::NoVersionProvided)),
            )),+]
        };
    }

    #[test]
    fn test_every_service_requires_version() {
        // Given
        let connector: Arc<dyn Connector> = MockConnector::ok(json!({}));

        // When
        let results = rejects_empty_version!(
            connector,
            ApplicationRoleService,
            AuditRecordService,
            CommentService,
            DashboardService,
            FilterService,
            FilterShareService,
            IssueService,
            PropertyService,
            MySelfService,
            PermissionService,
            PermissionGrantService,
            PermissionSchemeService,
            PriorityService,
            ProjectService,
            ProjectCategoryService,
            ResolutionService,
            SearchService,
            ServerInfoService,
            VoteService,
            WatcherService,
            WorkflowSchemeService,
            WorklogService,
        );

        // Then
        assert_eq!(results.len(), 22);
        for (service, rejected) in results {
            assert!(rejected, "{} accepted an empty version", service);
        }
    }

    #[test]
    fn test_endpoint_formatting() {
        let mock = MockConnector::ok(json!({}));
        let base = ServiceBase::new(mock, "3").unwrap();
        let mut params = QueryParams::new();
        params.add("maxResults", 50).add("startAt", 0);

        assert_eq!(base.version(), "3");
        assert_eq!(
            base.endpoint("workflowscheme", &params),
            "rest/api/3/workflowscheme?maxResults=50&startAt=0"
        );
        assert_eq!(
            base.endpoint("serverInfo", &QueryParams::new()),
            "rest/api/3/serverInfo"
        );
    }

    #[tokio::test]
    async fn test_fetch_decodes_body() {
        let mock = MockConnector::ok(json!({"id": "10000"}));
        let base = ServiceBase::new(mock.clone(), "2").unwrap();

        let (value, response): (serde_json::Value, _) =
            base.get("rest/api/2/filter/10000").await.unwrap();

        assert_eq!(value["id"], "10000");
        assert_eq!(response.code, 200);
        assert_eq!(mock.last().endpoint, "rest/api/2/filter/10000");
    }

    #[tokio::test]
    async fn test_fetch_propagates_connector_errors() {
        let mock = MockConnector::new(400, "bad".to_string());
        let base = ServiceBase::new(mock, "2").unwrap();

        let result: Result<(serde_json::Value, _)> = base.get("rest/api/2/filter/1").await;

        match result.unwrap_err() {
            Error::ApiError { status, .. } => assert_eq!(status, 400),
            other => panic!("Expected ApiError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_ignores_empty_body() {
        let mock = MockConnector::no_content();
        let base = ServiceBase::new(mock.clone(), "3").unwrap();

        let response = base.delete("rest/api/3/filter/1").await.unwrap();

        assert_eq!(response.code, 204);
        assert_eq!(mock.last().method, Method::DELETE);
    }
}
