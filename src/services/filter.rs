use std::sync::Arc;

use reqwest::Method;

use crate::connector::{Connector, ResponseScheme};
use crate::error::{Error, Result};
use crate::models::{FilterPageScheme, FilterPayloadScheme, FilterScheme, FilterSearchOptions};
use crate::query::QueryParams;

use super::{FilterShareService, ServiceBase};

/// Saved JQL filters.
#[derive(Clone)]
pub struct FilterService {
    base: ServiceBase,
    pub share: FilterShareService,
}

impl FilterService {
    pub fn new(connector: Arc<dyn Connector>, version: &str) -> Result<Self> {
        Ok(Self {
            share: FilterShareService::new(connector.clone(), version)?,
            base: ServiceBase::new(connector, version)?,
        })
    }

    pub async fn create(
        &self,
        payload: &FilterPayloadScheme,
    ) -> Result<(FilterScheme, ResponseScheme)> {
        let endpoint = self.base.endpoint("filter", &QueryParams::new());
        self.base.send(Method::POST, &endpoint, payload).await
    }

    /// Filters the caller has marked as favourite.
    pub async fn favorite(&self) -> Result<(Vec<FilterScheme>, ResponseScheme)> {
        let endpoint = self.base.endpoint("filter/favourite", &QueryParams::new());
        self.base.get(&endpoint).await
    }

    /// Filters owned by the caller, optionally including favourites owned by
    /// others.
    pub async fn my(
        &self,
        favorites: bool,
        expand: &[String],
    ) -> Result<(Vec<FilterScheme>, ResponseScheme)> {
        let mut params = QueryParams::new();
        params
            .add("includeFavourites", favorites)
            .add_joined("expand", expand);

        let endpoint = self.base.endpoint("filter/my", &params);
        self.base.get(&endpoint).await
    }

    pub async fn search(
        &self,
        options: &FilterSearchOptions,
        start_at: u32,
        max_results: u32,
    ) -> Result<(FilterPageScheme, ResponseScheme)> {
        let mut params = QueryParams::new();
        params.add("startAt", start_at).add("maxResults", max_results);
        options.apply(&mut params);

        let endpoint = self.base.endpoint("filter/search", &params);
        self.base.get(&endpoint).await
    }

    pub async fn get(
        &self,
        filter_id: u64,
        expand: &[String],
    ) -> Result<(FilterScheme, ResponseScheme)> {
        if filter_id == 0 {
            return Err(Error::NoFilterId);
        }

        let mut params = QueryParams::new();
        params.add_joined("expand", expand);

        let endpoint = self.base.endpoint(&format!("filter/{}", filter_id), &params);
        self.base.get(&endpoint).await
    }

    pub async fn update(
        &self,
        filter_id: u64,
        payload: &FilterPayloadScheme,
    ) -> Result<(FilterScheme, ResponseScheme)> {
        if filter_id == 0 {
            return Err(Error::NoFilterId);
        }

        let endpoint = self
            .base
            .endpoint(&format!("filter/{}", filter_id), &QueryParams::new());
        self.base.send(Method::PUT, &endpoint, payload).await
    }

    pub async fn delete(&self, filter_id: u64) -> Result<ResponseScheme> {
        if filter_id == 0 {
            return Err(Error::NoFilterId);
        }

        let endpoint = self
            .base
            .endpoint(&format!("filter/{}", filter_id), &QueryParams::new());
        self.base.delete(&endpoint).await
    }
}
