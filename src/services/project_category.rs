use std::sync::Arc;

use reqwest::Method;

use crate::connector::{Connector, ResponseScheme};
use crate::error::{Error, Result};
use crate::models::{ProjectCategoryPayloadScheme, ProjectCategoryScheme};
use crate::query::QueryParams;

use super::ServiceBase;

#[derive(Clone)]
pub struct ProjectCategoryService {
    base: ServiceBase,
}

impl ProjectCategoryService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            base: ServiceBase::new(connector, version)?,
        })
    }

    pub async fn gets(&self) -> Result<(Vec<ProjectCategoryScheme>, ResponseScheme)> {
        let endpoint = self.base.endpoint("projectCategory", &QueryParams::new());
        self.base.get(&endpoint).await
    }

    pub async fn get(&self, category_id: u64) -> Result<(ProjectCategoryScheme, ResponseScheme)> {
        let endpoint = self.category_endpoint(category_id)?;
        self.base.get(&endpoint).await
    }

    pub async fn create(
        &self,
        payload: &ProjectCategoryPayloadScheme,
    ) -> Result<(ProjectCategoryScheme, ResponseScheme)> {
        let endpoint = self.base.endpoint("projectCategory", &QueryParams::new());
        self.base.send(Method::POST, &endpoint, payload).await
    }

    pub async fn update(
        &self,
        category_id: u64,
        payload: &ProjectCategoryPayloadScheme,
    ) -> Result<(ProjectCategoryScheme, ResponseScheme)> {
        let endpoint = self.category_endpoint(category_id)?;
        self.base.send(Method::PUT, &endpoint, payload).await
    }

    pub async fn delete(&self, category_id: u64) -> Result<ResponseScheme> {
        let endpoint = self.category_endpoint(category_id)?;
        self.base.delete(&endpoint).await
    }

    fn category_endpoint(&self, category_id: u64) -> Result<String> {
        if category_id == 0 {
            return Err(Error::NoProjectCategoryId);
        }

        Ok(self.base.endpoint(
            &format!("projectCategory/{}", category_id),
            &QueryParams::new(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::mock::MockConnector;
    use serde_json::json;

    fn category() -> serde_json::Value {
        json!({
            "self": "https://example.atlassian.net/rest/api/3/projectCategory/10000",
            "id": "10000",
            "name": "FIRST",
            "description": "First Project Category"
        })
    }

    #[tokio::test]
    async fn test_gets() {
        let mock = MockConnector::ok(json!([category()]));
        let service = ProjectCategoryService::new(mock.clone(), "3").unwrap();

        let (categories, _) = service.gets().await.unwrap();

        assert_eq!(mock.last().endpoint, "rest/api/3/projectCategory");
        assert_eq!(categories[0].name, "FIRST");
    }

    #[tokio::test]
    async fn test_create_and_update() {
        let mock = MockConnector::ok(category());
        let service = ProjectCategoryService::new(mock.clone(), "2").unwrap();
        let payload = ProjectCategoryPayloadScheme::new("CREATED").description("Created Project Category");

        service.create(&payload).await.unwrap();
        service.update(10000, &payload).await.unwrap();

        let calls = mock.calls();
        assert_eq!(calls[0].endpoint, "rest/api/2/projectCategory");
        assert_eq!(
            calls[0].body.clone().unwrap(),
            json!({"name": "CREATED", "description": "Created Project Category"})
        );
        assert_eq!(calls[1].method, Method::PUT);
        assert_eq!(calls[1].endpoint, "rest/api/2/projectCategory/10000");
    }

    #[tokio::test]
    async fn test_missing_category_id() {
        let mock = MockConnector::no_content();
        let service = ProjectCategoryService::new(mock.clone(), "3").unwrap();

        assert!(matches!(
            service.get(0).await,
            Err(Error::NoProjectCategoryId)
        ));
        assert!(matches!(
            service.delete(0).await,
            Err(Error::NoProjectCategoryId)
        ));
        assert!(mock.calls().is_empty());

        service.delete(10000).await.unwrap();
        assert_eq!(mock.last().endpoint, "rest/api/3/projectCategory/10000");
    }
}
