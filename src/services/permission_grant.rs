use std::sync::Arc;

use reqwest::Method;

use crate::connector::{Connector, ResponseScheme};
use crate::error::{Error, Result};
use crate::models::{PermissionGrantPageScheme, PermissionGrantPayloadScheme, PermissionGrantScheme};
use crate::query::QueryParams;

use super::ServiceBase;

/// Grants inside a permission scheme.
#[derive(Clone)]
pub struct PermissionGrantService {
    base: ServiceBase,
}

impl PermissionGrantService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            base: ServiceBase::new(connector, version)?,
        })
    }

    pub async fn create(
        &self,
        scheme_id: u64,
        payload: &PermissionGrantPayloadScheme,
    ) -> Result<(PermissionGrantScheme, ResponseScheme)> {
        let endpoint = self.grant_endpoint(scheme_id, None, &QueryParams::new())?;
        self.base.send(Method::POST, &endpoint, payload).await
    }

    pub async fn gets(
        &self,
        scheme_id: u64,
        expand: &[String],
    ) -> Result<(PermissionGrantPageScheme, ResponseScheme)> {
        let mut params = QueryParams::new();
        params.add_joined("expand", expand);

        let endpoint = self.grant_endpoint(scheme_id, None, &params)?;
        self.base.get(&endpoint).await
    }

    pub async fn get(
        &self,
        scheme_id: u64,
        grant_id: u64,
        expand: &[String],
    ) -> Result<(PermissionGrantScheme, ResponseScheme)> {
        let mut params = QueryParams::new();
        params.add_joined("expand", expand);

        let endpoint = self.grant_endpoint(scheme_id, Some(grant_id), &params)?;
        self.base.get(&endpoint).await
    }

    pub async fn delete(&self, scheme_id: u64, grant_id: u64) -> Result<ResponseScheme> {
        let endpoint = self.grant_endpoint(scheme_id, Some(grant_id), &QueryParams::new())?;
        self.base.delete(&endpoint).await
    }

    fn grant_endpoint(
        &self,
        scheme_id: u64,
        grant_id: Option<u64>,
        params: &QueryParams,
    ) -> Result<String> {
        if scheme_id == 0 {
            return Err(Error::NoPermissionSchemeId);
        }

        let path = match grant_id {
            Some(0) => return Err(Error::NoPermissionGrantId),
            Some(id) => format!("permissionscheme/{}/permission/{}", scheme_id, id),
            None => format!("permissionscheme/{}/permission", scheme_id),
        };
        Ok(self.base.endpoint(&path, params))
    }
}
