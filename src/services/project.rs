use std::sync::Arc;

use reqwest::Method;

use crate::connector::{Connector, ResponseScheme};
use crate::error::{Error, Result};
use crate::models::{
    ProjectCreatedScheme, ProjectPayloadScheme, ProjectScheme, ProjectSearchOptions,
    ProjectSearchPageScheme, ProjectStatusPageScheme,
};
use crate::query::QueryParams;

use super::{ProjectCategoryService, ServiceBase};

/// Projects and, through `category`, project categories.
#[derive(Clone)]
pub struct ProjectService {
    base: ServiceBase,
    pub category: ProjectCategoryService,
}

impl ProjectService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            category: ProjectCategoryService::new(connector.clone(), version)?,
            base: ServiceBase::new(connector, version)?,
        })
    }

    /// Paginated project search visible to the caller.
    pub async fn search(
        &self,
        options: &ProjectSearchOptions,
        start_at: u32,
        max_results: u32,
    ) -> Result<(ProjectSearchPageScheme, ResponseScheme)> {
        let mut params = QueryParams::new();
        params.add("startAt", start_at).add("maxResults", max_results);
        options.apply(&mut params);

        let endpoint = self.base.endpoint("project/search", &params);
        self.base.get(&endpoint).await
    }

    pub async fn get(
        &self,
        project_key_or_id: &str,
        expand: &[String],
    ) -> Result<(ProjectScheme, ResponseScheme)> {
        let mut params = QueryParams::new();
        params.add_joined("expand", expand);

        let endpoint = self.project_endpoint(project_key_or_id, "", &params)?;
        self.base.get(&endpoint).await
    }

    pub async fn create(
        &self,
        payload: &ProjectPayloadScheme,
    ) -> Result<(ProjectCreatedScheme, ResponseScheme)> {
        let endpoint = self.base.endpoint("project", &QueryParams::new());
        self.base.send(Method::POST, &endpoint, payload).await
    }

    pub async fn update(
        &self,
        project_key_or_id: &str,
        payload: &ProjectPayloadScheme,
    ) -> Result<(ProjectScheme, ResponseScheme)> {
        let endpoint = self.project_endpoint(project_key_or_id, "", &QueryParams::new())?;
        self.base.send(Method::PUT, &endpoint, payload).await
    }

    /// Deletes a project. With `enable_undo` it goes to the recycle bin
    /// instead of being removed for good.
    pub async fn delete(&self, project_key_or_id: &str, enable_undo: bool) -> Result<ResponseScheme> {
        let mut params = QueryParams::new();
        params.add("enableUndo", enable_undo);

        let endpoint = self.project_endpoint(project_key_or_id, "", &params)?;
        self.base.delete(&endpoint).await
    }

    pub async fn archive(&self, project_key_or_id: &str) -> Result<ResponseScheme> {
        let endpoint = self.project_endpoint(project_key_or_id, "/archive", &QueryParams::new())?;
        self.base.execute(Method::POST, &endpoint, None).await
    }

    /// Restores an archived or deleted project.
    pub async fn restore(
        &self,
        project_key_or_id: &str,
    ) -> Result<(ProjectScheme, ResponseScheme)> {
        let endpoint = self.project_endpoint(project_key_or_id, "/restore", &QueryParams::new())?;
        self.base.fetch(Method::POST, &endpoint, None).await
    }

    /// Valid statuses per issue type of the project.
    pub async fn statuses(
        &self,
        project_key_or_id: &str,
    ) -> Result<(Vec<ProjectStatusPageScheme>, ResponseScheme)> {
        let endpoint = self.project_endpoint(project_key_or_id, "/statuses", &QueryParams::new())?;
        self.base.get(&endpoint).await
    }

    fn project_endpoint(
        &self,
        project_key_or_id: &str,
        suffix: &str,
        params: &QueryParams,
    ) -> Result<String> {
        if project_key_or_id.is_empty() {
            return Err(Error::NoProjectIdOrKey);
        }

        Ok(self
            .base
            .endpoint(&format!("project/{}{}", project_key_or_id, suffix), params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::mock::MockConnector;
    use serde_json::json;

    fn project() -> serde_json::Value {
        json!({
            "self": "https://example.atlassian.net/rest/api/3/project/10000",
            "id": "10000",
            "key": "KP",
            "name": "Kanban Project",
            "projectTypeKey": "software",
            "simplified": false,
            "style": "classic",
            "isPrivate": false,
            "projectCategory": {"id": "10000", "name": "FIRST", "description": "First Project Category"}
        })
    }

    #[tokio::test]
    async fn test_search() {
        // Given
        let mock = MockConnector::ok(json!({
            "self": "https://example.atlassian.net/rest/api/3/project/search?startAt=0&maxResults=50",
            "maxResults": 50,
            "startAt": 0,
            "total": 1,
            "isLast": true,
            "values": [project()]
        }));
        let service = ProjectService::new(mock.clone(), "3").unwrap();
        let options = ProjectSearchOptions::new()
            .order_by("name")
            .status(vec!["live".to_string(), "archived".to_string()])
            .expand(vec!["lead".to_string(), "description".to_string()]);

        // When
        let (page, _) = service.search(&options, 0, 50).await.unwrap();

        // Then
        assert_eq!(
            mock.last().endpoint,
            "rest/api/3/project/search?expand=lead%2Cdescription&maxResults=50&orderBy=name&startAt=0&status=live&status=archived"
        );
        assert_eq!(page.values[0].key, "KP");
    }

    #[tokio::test]
    async fn test_get() {
        let mock = MockConnector::ok(project());
        let service = ProjectService::new(mock.clone(), "2").unwrap();

        let (project, _) = service.get("KP", &["issueTypes".to_string()]).await.unwrap();

        assert_eq!(mock.last().endpoint, "rest/api/2/project/KP?expand=issueTypes");
        assert_eq!(
            project.project_category.unwrap().name,
            "FIRST"
        );
    }

    #[tokio::test]
    async fn test_create() {
        let mock = MockConnector::ok(json!({
            "self": "https://example.atlassian.net/rest/api/3/project/10042",
            "id": 10042,
            "key": "EX"
        }));
        let service = ProjectService::new(mock.clone(), "3").unwrap();
        let payload = ProjectPayloadScheme::new()
            .key("EX")
            .name("Example")
            .project_type_key("business")
            .lead_account_id("5b10a0effa615349cb016cd8");

        let (created, _) = service.create(&payload).await.unwrap();

        let call = mock.last();
        assert_eq!(call.endpoint, "rest/api/3/project");
        assert_eq!(
            call.body.unwrap(),
            json!({
                "key": "EX",
                "name": "Example",
                "leadAccountId": "5b10a0effa615349cb016cd8",
                "projectTypeKey": "business"
            })
        );
        assert_eq!(created.id, 10042);
    }

    #[tokio::test]
    async fn test_delete_archive_restore() {
        let mock = MockConnector::ok(project());
        let service = ProjectService::new(mock.clone(), "3").unwrap();

        service.delete("KP", true).await.unwrap();
        service.archive("KP").await.unwrap();
        let (restored, _) = service.restore("KP").await.unwrap();

        let calls = mock.calls();
        assert_eq!(calls[0].method, Method::DELETE);
        assert_eq!(calls[0].endpoint, "rest/api/3/project/KP?enableUndo=true");
        assert_eq!(calls[1].endpoint, "rest/api/3/project/KP/archive");
        assert_eq!(calls[2].endpoint, "rest/api/3/project/KP/restore");
        assert_eq!(restored.key, "KP");
    }

    #[tokio::test]
    async fn test_statuses() {
        let mock = MockConnector::ok(json!([{
            "id": "3",
            "name": "Task",
            "subtask": false,
            "statuses": [{"id": "10000", "name": "In Progress", "description": "The issue is currently being worked on."}]
        }]));
        let service = ProjectService::new(mock.clone(), "2").unwrap();

        let (statuses, _) = service.statuses("KP").await.unwrap();

        assert_eq!(mock.last().endpoint, "rest/api/2/project/KP/statuses");
        assert_eq!(statuses[0].statuses[0].name, "In Progress");
    }

    #[tokio::test]
    async fn test_missing_project_key() {
        let mock = MockConnector::ok(project());
        let service = ProjectService::new(mock.clone(), "3").unwrap();

        assert!(matches!(
            service.get("", &[]).await,
            Err(Error::NoProjectIdOrKey)
        ));
        assert!(matches!(
            service.archive("").await,
            Err(Error::NoProjectIdOrKey)
        ));
        assert!(mock.calls().is_empty());
    }
}
