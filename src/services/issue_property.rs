use std::sync::Arc;

use reqwest::Method;

use crate::connector::{Connector, ResponseScheme};
use crate::error::{Error, Result};
use crate::models::{EntityPropertyScheme, PropertyPageScheme};
use crate::query::QueryParams;

use super::ServiceBase;

/// Arbitrary JSON stored against an issue under a key.
#[derive(Clone)]
pub struct PropertyService {
    base: ServiceBase,
}

impl PropertyService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            base: ServiceBase::new(connector, version)?,
        })
    }

    pub async fn gets(&self, issue_key_or_id: &str) -> Result<(PropertyPageScheme, ResponseScheme)> {
        let endpoint = self.property_endpoint(issue_key_or_id, None)?;
        self.base.get(&endpoint).await
    }

    pub async fn get(
        &self,
        issue_key_or_id: &str,
        property_key: &str,
    ) -> Result<(EntityPropertyScheme, ResponseScheme)> {
        let endpoint = self.property_endpoint(issue_key_or_id, Some(property_key))?;
        self.base.get(&endpoint).await
    }

    /// Creates or replaces the property value.
    pub async fn set(
        &self,
        issue_key_or_id: &str,
        property_key: &str,
        value: &serde_json::Value,
    ) -> Result<ResponseScheme> {
        let endpoint = self.property_endpoint(issue_key_or_id, Some(property_key))?;
        self.base.send_only(Method::PUT, &endpoint, value).await
    }

    pub async fn delete(&self, issue_key_or_id: &str, property_key: &str) -> Result<ResponseScheme> {
        let endpoint = self.property_endpoint(issue_key_or_id, Some(property_key))?;
        self.base.delete(&endpoint).await
    }

    fn property_endpoint(&self, issue_key_or_id: &str, property_key: Option<&str>) -> Result<String> {
        if issue_key_or_id.is_empty() {
            return Err(Error::NoIssueKeyOrId);
        }

        let path = match property_key {
            Some("") => return Err(Error::NoPropertyKey),
            Some(key) => format!("issue/{}/properties/{}", issue_key_or_id, key),
            None => format!("issue/{}/properties", issue_key_or_id),
        };
        Ok(self.base.endpoint(&path, &QueryParams::new()))
    }
}
