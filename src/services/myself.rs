use std::sync::Arc;

use crate::connector::{Connector, ResponseScheme};
use crate::error::Result;
use crate::models::UserScheme;
use crate::query::QueryParams;

use super::ServiceBase;

/// The user behind the configured credentials.
#[derive(Clone)]
pub struct MySelfService {
    base: ServiceBase,
}

impl MySelfService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            base: ServiceBase::new(connector, version)?,
        })
    }

    /// `expand` accepts `groups` and `applicationRoles`.
    pub async fn details(&self, expand: &[String]) -> Result<(UserScheme, ResponseScheme)> {
        let mut params = QueryParams::new();
        params.add_joined("expand", expand);

        let endpoint = self.base.endpoint("myself", &params);
        self.base.get(&endpoint).await
    }
}
