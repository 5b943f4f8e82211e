use std::sync::Arc;

use crate::connector::{Connector, ResponseScheme};
use crate::error::{Error, Result};
use crate::models::PriorityScheme;
use crate::query::QueryParams;

use super::ServiceBase;

#[derive(Clone)]
pub struct PriorityService {
    base: ServiceBase,
}

impl PriorityService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            base: ServiceBase::new(connector, version)?,
        })
    }

    pub async fn gets(&self) -> Result<(Vec<PriorityScheme>, ResponseScheme)> {
        let endpoint = self.base.endpoint("priority", &QueryParams::new());
        self.base.get(&endpoint).await
    }

    pub async fn get(&self, priority_id: &str) -> Result<(PriorityScheme, ResponseScheme)> {
        if priority_id.is_empty() {
            return Err(Error::NoPriorityId);
        }

        let endpoint = self
            .base
            .endpoint(&format!("priority/{}", priority_id), &QueryParams::new());
        self.base.get(&endpoint).await
    }
}
