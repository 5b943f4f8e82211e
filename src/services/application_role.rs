use std::sync::Arc;

use crate::connector::{Connector, ResponseScheme};
use crate::error::{Error, Result};
use crate::models::ApplicationRoleScheme;
use crate::query::QueryParams;

use super::ServiceBase;

#[derive(Clone)]
pub struct ApplicationRoleService {
    base: ServiceBase,
}

impl ApplicationRoleService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            base: ServiceBase::new(connector, version)?,
        })
    }

    pub async fn gets(&self) -> Result<(Vec<ApplicationRoleScheme>, ResponseScheme)> {
        let endpoint = self.base.endpoint("applicationrole", &QueryParams::new());
        self.base.get(&endpoint).await
    }

    /// Fetches one role such as `jira-software`.
    pub async fn get(&self, key: &str) -> Result<(ApplicationRoleScheme, ResponseScheme)> {
        if key.is_empty() {
            return Err(Error::NoApplicationRoleKey);
        }

        let endpoint = self
            .base
            .endpoint(&format!("applicationrole/{}", key), &QueryParams::new());
        self.base.get(&endpoint).await
    }
}
