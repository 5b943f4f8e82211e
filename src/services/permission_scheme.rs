use std::sync::Arc;

use reqwest::Method;

use crate::connector::{Connector, ResponseScheme};
use crate::error::{Error, Result};
use crate::models::{
    PermissionSchemePageScheme, PermissionSchemePayloadScheme, PermissionSchemeScheme,
};
use crate::query::QueryParams;

use super::{PermissionGrantService, ServiceBase};

/// Permission schemes and, through `grant`, their individual grants.
#[derive(Clone)]
pub struct PermissionSchemeService {
    base: ServiceBase,
    pub grant: PermissionGrantService,
}

impl PermissionSchemeService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            grant: PermissionGrantService::new(connector.clone(), version)?,
            base: ServiceBase::new(connector, version)?,
        })
    }

    pub async fn gets(&self) -> Result<(PermissionSchemePageScheme, ResponseScheme)> {
        let endpoint = self.base.endpoint("permissionscheme", &QueryParams::new());
        self.base.get(&endpoint).await
    }

    pub async fn get(
        &self,
        scheme_id: u64,
        expand: &[String],
    ) -> Result<(PermissionSchemeScheme, ResponseScheme)> {
        let mut params = QueryParams::new();
        params.add_joined("expand", expand);

        let endpoint = self.scheme_endpoint(scheme_id, &params)?;
        self.base.get(&endpoint).await
    }

    pub async fn create(
        &self,
        payload: &PermissionSchemePayloadScheme,
    ) -> Result<(PermissionSchemeScheme, ResponseScheme)> {
        let endpoint = self.base.endpoint("permissionscheme", &QueryParams::new());
        self.base.send(Method::POST, &endpoint, payload).await
    }

    /// Replaces the scheme. Grants in `payload` overwrite all existing grants.
    pub async fn update(
        &self,
        scheme_id: u64,
        payload: &PermissionSchemePayloadScheme,
    ) -> Result<(PermissionSchemeScheme, ResponseScheme)> {
        let endpoint = self.scheme_endpoint(scheme_id, &QueryParams::new())?;
        self.base.send(Method::PUT, &endpoint, payload).await
    }

    pub async fn delete(&self, scheme_id: u64) -> Result<ResponseScheme> {
        let endpoint = self.scheme_endpoint(scheme_id, &QueryParams::new())?;
        self.base.delete(&endpoint).await
    }

    fn scheme_endpoint(&self, scheme_id: u64, params: &QueryParams) -> Result<String> {
        if scheme_id == 0 {
            return Err(Error::NoPermissionSchemeId);
        }

        Ok(self
            .base
            .endpoint(&format!("permissionscheme/{}", scheme_id), params))
    }
}
