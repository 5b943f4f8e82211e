use std::sync::Arc;

use reqwest::Method;

use crate::connector::{Connector, ResponseScheme};
use crate::error::{Error, Result};
use crate::models::{PermissionFilterPayloadScheme, SharePermissionScheme, ShareScopeScheme};
use crate::query::QueryParams;

use super::ServiceBase;

/// Share permissions of saved filters and the default share scope.
#[derive(Clone)]
pub struct FilterShareService {
    base: ServiceBase,
}

impl FilterShareService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            base: ServiceBase::new(connector, version)?,
        })
    }

    pub async fn scope(&self) -> Result<(ShareScopeScheme, ResponseScheme)> {
        let endpoint = self
            .base
            .endpoint("filter/defaultShareScope", &QueryParams::new());
        self.base.get(&endpoint).await
    }

    /// Sets the default scope: `GLOBAL`, `AUTHENTICATED` or `PRIVATE`.
    pub async fn set_scope(&self, scope: &str) -> Result<ResponseScheme> {
        if scope.is_empty() {
            return Err(Error::NoShareScope);
        }

        let payload = ShareScopeScheme {
            scope: scope.to_string(),
        };
        let endpoint = self
            .base
            .endpoint("filter/defaultShareScope", &QueryParams::new());
        self.base.send_only(Method::PUT, &endpoint, &payload).await
    }

    pub async fn gets(
        &self,
        filter_id: u64,
    ) -> Result<(Vec<SharePermissionScheme>, ResponseScheme)> {
        let endpoint = self.permission_endpoint(filter_id, None)?;
        self.base.get(&endpoint).await
    }

    /// Adds a share permission and returns the filter's full permission list.
    pub async fn add(
        &self,
        filter_id: u64,
        payload: &PermissionFilterPayloadScheme,
    ) -> Result<(Vec<SharePermissionScheme>, ResponseScheme)> {
        let endpoint = self.permission_endpoint(filter_id, None)?;
        self.base.send(Method::POST, &endpoint, payload).await
    }

    pub async fn get(
        &self,
        filter_id: u64,
        permission_id: u64,
    ) -> Result<(SharePermissionScheme, ResponseScheme)> {
        let endpoint = self.permission_endpoint(filter_id, Some(permission_id))?;
        self.base.get(&endpoint).await
    }

    pub async fn delete(&self, filter_id: u64, permission_id: u64) -> Result<ResponseScheme> {
        let endpoint = self.permission_endpoint(filter_id, Some(permission_id))?;
        self.base.delete(&endpoint).await
    }

    fn permission_endpoint(&self, filter_id: u64, permission_id: Option<u64>) -> Result<String> {
        if filter_id == 0 {
            return Err(Error::NoFilterId);
        }

        let path = match permission_id {
            Some(0) => return Err(Error::NoPermissionId),
            Some(id) => format!("filter/{}/permission/{}", filter_id, id),
            None => format!("filter/{}/permission", filter_id),
        };
        Ok(self.base.endpoint(&path, &QueryParams::new()))
    }
}
