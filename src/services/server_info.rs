use std::sync::Arc;

use crate::connector::{Connector, ResponseScheme};
use crate::error::Result;
use crate::models::ServerInfoScheme;
use crate::query::QueryParams;

use super::ServiceBase;

#[derive(Clone)]
pub struct ServerInfoService {
    base: ServiceBase,
}

impl ServerInfoService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            base: ServiceBase::new(connector, version)?,
        })
    }

    /// Version, build and deployment details of the instance.
    pub async fn get(&self) -> Result<(ServerInfoScheme, ResponseScheme)> {
        let endpoint = self.base.endpoint("serverInfo", &QueryParams::new());
        self.base.get(&endpoint).await
    }
}
