use async_trait::async_trait;
use reqwest::{Method, Request};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{Error, Result};

/// Raw response envelope returned alongside every decoded result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseScheme {
    pub code: u16,
    pub endpoint: String,
    pub method: String,
    pub body: String,
}

impl ResponseScheme {
    /// Decodes the response body into `T`.
    pub fn json<T>(&self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        Ok(serde_json::from_str(&self.body)?)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }
}

/// Builds and executes HTTP requests on behalf of the resource services.
///
/// Services never talk to reqwest directly; they hand an endpoint such as
/// `rest/api/3/filter/10000?expand=sharedUsers` to `new_request` and pass the
/// result to `call`. Implementations decide how the site URL, authentication
/// and transport are configured.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Builds a request for `endpoint`, relative to the site URL.
    fn new_request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<Request>;

    /// Executes `request`. Any non-2xx status is returned as an error.
    async fn call(&self, request: Request) -> Result<ResponseScheme>;
}

/// Parses a site URL, making sure relative endpoints join beneath it.
pub(crate) fn site_url(base_url: &str) -> Result<Url> {
    let mut base = base_url.trim().to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    Url::parse(&base).map_err(|_| Error::InvalidConfiguration("Invalid base URL".to_string()))
}

pub(crate) fn build_request(
    http: &reqwest::Client,
    site: &Url,
    method: Method,
    endpoint: &str,
    body: Option<&serde_json::Value>,
) -> Result<Request> {
    let url = site.join(endpoint).map_err(|e| {
        Error::InvalidConfiguration(format!("Invalid endpoint {}: {}", endpoint, e))
    })?;

    let mut builder = http.request(method, url);
    if let Some(body) = body {
        builder = builder.json(body);
    }

    Ok(builder.build()?)
}

/// Maps a non-success HTTP status to the matching error variant.
pub(crate) fn status_error(status: u16, message: String) -> Error {
    match status {
        401 | 403 => Error::AuthenticationFailed(message),
        404 => Error::NotFound(message),
        429 => Error::RateLimitExceeded,
        _ => Error::ApiError { status, message },
    }
}
