use std::sync::Arc;

use crate::connector::{Connector, ResponseScheme};
use crate::error::{Error, Result};
use crate::models::ResolutionScheme;
use crate::query::QueryParams;

use super::ServiceBase;

#[derive(Clone)]
pub struct ResolutionService {
    base: ServiceBase,
}

impl ResolutionService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            base: ServiceBase::new(connector, version)?,
        })
    }

    pub async fn gets(&self) -> Result<(Vec<ResolutionScheme>, ResponseScheme)> {
        let endpoint = self.base.endpoint("resolution", &QueryParams::new());
        self.base.get(&endpoint).await
    }

    pub async fn get(&self, resolution_id: &str) -> Result<(ResolutionScheme, ResponseScheme)> {
        if resolution_id.is_empty() {
            return Err(Error::NoResolutionId);
        }

        let endpoint = self
            .base
            .endpoint(&format!("resolution/{}", resolution_id), &QueryParams::new());
        self.base.get(&endpoint).await
    }
}
