use std::sync::Arc;

use reqwest::Method;
use serde_json::json;

use crate::connector::{Connector, ResponseScheme};
use crate::error::{Error, Result};
use crate::models::{
    MyPermissionsOptions, MyPermissionsScheme, PermissionCheckPayload, PermissionGrantsScheme,
    PermissionMapScheme, PermissionScheme, PermittedProjectsScheme,
};
use crate::query::QueryParams;

use super::ServiceBase;

#[derive(Clone)]
pub struct PermissionService {
    base: ServiceBase,
}

impl PermissionService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            base: ServiceBase::new(connector, version)?,
        })
    }

    /// Every permission known to the instance, sorted by key.
    pub async fn gets(&self) -> Result<(Vec<PermissionScheme>, ResponseScheme)> {
        let endpoint = self.base.endpoint("permissions", &QueryParams::new());
        let (map, response): (PermissionMapScheme, _) = self.base.get(&endpoint).await?;
        Ok((map.into_sorted(), response))
    }

    /// Checks global and project permissions for a user, or for the caller
    /// when no account id is set.
    pub async fn check(
        &self,
        payload: &PermissionCheckPayload,
    ) -> Result<(PermissionGrantsScheme, ResponseScheme)> {
        let endpoint = self.base.endpoint("permissions/check", &QueryParams::new());
        self.base.send(Method::POST, &endpoint, payload).await
    }

    /// Projects where the caller holds all of `permissions`.
    pub async fn projects(
        &self,
        permissions: &[String],
    ) -> Result<(PermittedProjectsScheme, ResponseScheme)> {
        if permissions.is_empty() {
            return Err(Error::NoPermissionKeys);
        }

        let endpoint = self.base.endpoint("permissions/project", &QueryParams::new());
        self.base
            .send(Method::POST, &endpoint, &json!({ "permissions": permissions }))
            .await
    }

    pub async fn my(
        &self,
        options: &MyPermissionsOptions,
    ) -> Result<(MyPermissionsScheme, ResponseScheme)> {
        if options.permissions.is_empty() {
            return Err(Error::NoPermissionKeys);
        }

        let endpoint = self.base.endpoint("mypermissions", &options.to_params());
        self.base.get(&endpoint).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::mock::MockConnector;
    use crate::models::BulkProjectPermissionsScheme;

    #[tokio::test]
    async fn test_gets_flattens_map() {
        // Given
        let mock = MockConnector::ok(json!({
            "permissions": {
                "BULK_CHANGE": {
                    "key": "BULK_CHANGE",
                    "name": "Bulk Change",
                    "type": "GLOBAL",
                    "description": "Ability to modify a collection of issues at once."
                },
                "ADMINISTER": {
                    "key": "ADMINISTER",
                    "name": "Administer Jira",
                    "type": "GLOBAL"
                }
            }
        }));
        let service = PermissionService::new(mock.clone(), "3").unwrap();

        // When
        let (permissions, _) = service.gets().await.unwrap();

        // Then
        assert_eq!(mock.last().endpoint, "rest/api/3/permissions");
        let keys: Vec<&str> = permissions.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["ADMINISTER", "BULK_CHANGE"]);
    }

    #[tokio::test]
    async fn test_check() {
        let mock = MockConnector::ok(json!({
            "projectPermissions": [{"permission": "EDIT_ISSUES", "issues": [10010], "projects": [10001]}],
            "globalPermissions": ["ADMINISTER"]
        }));
        let service = PermissionService::new(mock.clone(), "2").unwrap();
        let payload = PermissionCheckPayload {
            global_permissions: vec!["ADMINISTER".to_string()],
            account_id: Some("5b10a2844c20165700ede21g".to_string()),
            project_permissions: vec![BulkProjectPermissionsScheme {
                issues: vec![10010],
                projects: vec![10001],
                permissions: vec!["EDIT_ISSUES".to_string()],
            }],
        };

        let (grants, _) = service.check(&payload).await.unwrap();

        let call = mock.last();
        assert_eq!(call.endpoint, "rest/api/2/permissions/check");
        assert_eq!(call.body.unwrap()["accountId"], "5b10a2844c20165700ede21g");
        assert_eq!(grants.project_permissions[0].permission, "EDIT_ISSUES");
    }

    #[tokio::test]
    async fn test_projects() {
        let mock = MockConnector::ok(json!({"projects": [{"id": 10000, "key": "KP"}]}));
        let service = PermissionService::new(mock.clone(), "3").unwrap();

        let (permitted, _) = service
            .projects(&["EDIT_ISSUES".to_string()])
            .await
            .unwrap();

        let call = mock.last();
        assert_eq!(call.endpoint, "rest/api/3/permissions/project");
        assert_eq!(call.body.unwrap(), json!({"permissions": ["EDIT_ISSUES"]}));
        assert_eq!(permitted.projects[0].key, "KP");
    }

    #[tokio::test]
    async fn test_my() {
        let mock = MockConnector::ok(json!({
            "permissions": {
                "EDIT_ISSUES": {
                    "id": "12",
                    "key": "EDIT_ISSUES",
                    "name": "Edit Issues",
                    "type": "PROJECT",
                    "havePermission": true
                }
            }
        }));
        let service = PermissionService::new(mock.clone(), "2").unwrap();
        let options = MyPermissionsOptions::new(vec![
            "EDIT_ISSUES".to_string(),
            "BROWSE_PROJECTS".to_string(),
        ])
        .project_key("KP");

        let (mine, _) = service.my(&options).await.unwrap();

        assert_eq!(
            mock.last().endpoint,
            "rest/api/2/mypermissions?permissions=EDIT_ISSUES%2CBROWSE_PROJECTS&projectKey=KP"
        );
        assert!(mine.has("EDIT_ISSUES"));
        assert!(!mine.has("BROWSE_PROJECTS"));
    }

    #[tokio::test]
    async fn test_missing_permission_keys() {
        let mock = MockConnector::ok(json!({}));
        let service = PermissionService::new(mock.clone(), "3").unwrap();

        assert!(matches!(
            service.projects(&[]).await,
            Err(Error::NoPermissionKeys)
        ));
        assert!(matches!(
            service.my(&MyPermissionsOptions::new(vec![])).await,
            Err(Error::NoPermissionKeys)
        ));
        assert!(mock.calls().is_empty());
    }
}
