use std::sync::Arc;

use reqwest::Method;

use crate::connector::{Connector, ResponseScheme};
use crate::error::{Error, Result};
use crate::models::{
    DashboardPageScheme, DashboardPayloadScheme, DashboardScheme, DashboardSearchOptions,
    DashboardSearchPageScheme,
};
use crate::query::QueryParams;

use super::ServiceBase;

#[derive(Clone)]
pub struct DashboardService {
    base: ServiceBase,
}

impl DashboardService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            base: ServiceBase::new(connector, version)?,
        })
    }

    /// Lists dashboards owned by or shared with the caller.
    ///
    /// `filter` narrows the list to `my` or `favourite` dashboards; an empty
    /// string returns everything.
    pub async fn gets(
        &self,
        start_at: u32,
        max_results: u32,
        filter: &str,
    ) -> Result<(DashboardPageScheme, ResponseScheme)> {
        let mut params = QueryParams::new();
        params
            .add("startAt", start_at)
            .add("maxResults", max_results)
            .add_non_empty("filter", filter);

        let endpoint = self.base.endpoint("dashboard", &params);
        self.base.get(&endpoint).await
    }

    pub async fn search(
        &self,
        options: &DashboardSearchOptions,
        start_at: u32,
        max_results: u32,
    ) -> Result<(DashboardSearchPageScheme, ResponseScheme)> {
        let mut params = QueryParams::new();
        params.add("startAt", start_at).add("maxResults", max_results);
        options.apply(&mut params);

        let endpoint = self.base.endpoint("dashboard/search", &params);
        self.base.get(&endpoint).await
    }

    pub async fn get(&self, dashboard_id: &str) -> Result<(DashboardScheme, ResponseScheme)> {
        let endpoint = self.dashboard_endpoint(dashboard_id, "")?;
        self.base.get(&endpoint).await
    }

    pub async fn create(
        &self,
        payload: &DashboardPayloadScheme,
    ) -> Result<(DashboardScheme, ResponseScheme)> {
        let endpoint = self.base.endpoint("dashboard", &QueryParams::new());
        self.base.send(Method::POST, &endpoint, payload).await
    }

    pub async fn update(
        &self,
        dashboard_id: &str,
        payload: &DashboardPayloadScheme,
    ) -> Result<(DashboardScheme, ResponseScheme)> {
        let endpoint = self.dashboard_endpoint(dashboard_id, "")?;
        self.base.send(Method::PUT, &endpoint, payload).await
    }

    /// Copies a dashboard; `payload` supplies the new name and permissions.
    pub async fn copy(
        &self,
        dashboard_id: &str,
        payload: &DashboardPayloadScheme,
    ) -> Result<(DashboardScheme, ResponseScheme)> {
        let endpoint = self.dashboard_endpoint(dashboard_id, "/copy")?;
        self.base.send(Method::POST, &endpoint, payload).await
    }

    pub async fn delete(&self, dashboard_id: &str) -> Result<ResponseScheme> {
        let endpoint = self.dashboard_endpoint(dashboard_id, "")?;
        self.base.delete(&endpoint).await
    }

    fn dashboard_endpoint(&self, dashboard_id: &str, suffix: &str) -> Result<String> {
        if dashboard_id.is_empty() {
            return Err(Error::NoDashboardId);
        }

        Ok(self.base.endpoint(
            &format!("dashboard/{}{}", dashboard_id, suffix),
            &QueryParams::new(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::mock::MockConnector;
    use crate::models::SharePermissionScheme;
    use serde_json::json;

    fn dashboard() -> serde_json::Value {
        json!({
            "id": "10000",
            "isFavourite": false,
            "name": "System Dashboard",
            "popularity": 1,
            "self": "https://example.atlassian.net/rest/api/3/dashboard/10000",
            "sharePermissions": [{"type": "global"}],
            "view": "https://example.atlassian.net/secure/Dashboard.jspa?selectPageId=10000"
        })
    }

    #[tokio::test]
    async fn test_gets() {
        // Given
        let mock = MockConnector::ok(json!({
            "startAt": 10,
            "maxResults": 10,
            "total": 143,
            "prev": "https://example.atlassian.net/rest/api/3/dashboard?startAt=0",
            "dashboards": [dashboard()]
        }));
        let service = DashboardService::new(mock.clone(), "3").unwrap();

        // When
        let (page, _) = service.gets(10, 10, "favourite").await.unwrap();

        // Then
        assert_eq!(
            mock.last().endpoint,
            "rest/api/3/dashboard?filter=favourite&maxResults=10&startAt=10"
        );
        assert_eq!(page.total, 143);
        assert_eq!(page.dashboards[0].share_permissions[0].permission_type, "global");
    }

    #[tokio::test]
    async fn test_search() {
        let mock = MockConnector::ok(json!({
            "isLast": true,
            "maxResults": 50,
            "startAt": 0,
            "total": 1,
            "values": [dashboard()]
        }));
        let service = DashboardService::new(mock.clone(), "2").unwrap();
        let options = DashboardSearchOptions::new()
            .dashboard_name("System")
            .order_by("name");

        let (page, _) = service.search(&options, 0, 50).await.unwrap();

        assert_eq!(
            mock.last().endpoint,
            "rest/api/2/dashboard/search?dashboardName=System&maxResults=50&orderBy=name&startAt=0"
        );
        assert!(page.is_last);
    }

    #[tokio::test]
    async fn test_create_sends_payload() {
        let mock = MockConnector::ok(dashboard());
        let service = DashboardService::new(mock.clone(), "3").unwrap();
        let payload = DashboardPayloadScheme::new("Team board").share(SharePermissionScheme {
            permission_type: "global".to_string(),
            ..Default::default()
        });

        let (created, _) = service.create(&payload).await.unwrap();

        let call = mock.last();
        assert_eq!(call.method, Method::POST);
        assert_eq!(call.endpoint, "rest/api/3/dashboard");
        assert_eq!(
            call.body.unwrap(),
            json!({
                "name": "Team board",
                "sharePermissions": [{"type": "global"}],
                "editPermissions": []
            })
        );
        assert_eq!(created.id, "10000");
    }

    #[tokio::test]
    async fn test_copy_and_update_endpoints() {
        let mock = MockConnector::ok(dashboard());
        let service = DashboardService::new(mock.clone(), "2").unwrap();
        let payload = DashboardPayloadScheme::new("Copy");

        service.copy("10000", &payload).await.unwrap();
        service.update("10000", &payload).await.unwrap();

        let calls = mock.calls();
        assert_eq!(calls[0].endpoint, "rest/api/2/dashboard/10000/copy");
        assert_eq!(calls[1].method, Method::PUT);
        assert_eq!(calls[1].endpoint, "rest/api/2/dashboard/10000");
    }

    #[tokio::test]
    async fn test_delete() {
        let mock = MockConnector::no_content();
        let service = DashboardService::new(mock.clone(), "3").unwrap();

        let response = service.delete("10000").await.unwrap();

        assert_eq!(response.code, 204);
        assert_eq!(mock.last().method, Method::DELETE);
    }

    #[tokio::test]
    async fn test_missing_dashboard_id() {
        let mock = MockConnector::ok(dashboard());
        let service = DashboardService::new(mock.clone(), "3").unwrap();
        let payload = DashboardPayloadScheme::new("Copy");

        assert!(matches!(service.get("").await, Err(Error::NoDashboardId)));
        assert!(matches!(
            service.copy("", &payload).await,
            Err(Error::NoDashboardId)
        ));
        assert!(matches!(service.delete("").await, Err(Error::NoDashboardId)));
        assert!(mock.calls().is_empty());
    }
}
