use crate::connector::{Connector, ResponseScheme, build_request, site_url, status_error};
use crate::error::Result;
use async_trait::async_trait;
use base64::Engine;
use reqwest::{Client, Method, Request, header};
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

#[derive(Debug, Clone)]
pub enum Auth {
    Basic { username: String, api_token: String },
    Bearer { token: String },
}

#[derive(Debug, Clone)]
pub struct JiraConfig {
    pub base_url: String,
    pub auth: Auth,
}

impl JiraConfig {
    pub fn new(base_url: impl Into<String>, auth: Auth) -> Result<Self> {
        let base_url = base_url.into();

        Url::parse(&base_url).map_err(|_| {
            crate::error::Error::InvalidConfiguration("Invalid base URL".to_string())
        })?;

        Ok(Self { base_url, auth })
    }

    /// Reads `JIRA_URL`, `JIRA_USER` and `JIRA_API_TOKEN`, loading a `.env`
    /// file first when one exists. Variables already set take precedence.
    pub fn from_env() -> Result<Self> {
        use std::env;

        dotenv::dotenv().ok();

        let base_url = env::var("JIRA_URL").map_err(|_| {
            crate::error::Error::ConfigurationMissing(
                "JIRA_URL not found in environment".to_string(),
            )
        })?;

        let username = env::var("JIRA_USER").map_err(|_| {
            crate::error::Error::ConfigurationMissing(
                "JIRA_USER not found in environment".to_string(),
            )
        })?;

        let api_token = env::var("JIRA_API_TOKEN").map_err(|_| {
            crate::error::Error::ConfigurationMissing(
                "JIRA_API_TOKEN not found in environment".to_string(),
            )
        })?;

        let auth = Auth::Basic {
            username,
            api_token,
        };

        Self::new(base_url, auth)
    }
}

/// reqwest-backed [`Connector`] that talks to a Jira site.
#[derive(Debug, Clone)]
pub struct JiraClient {
    pub(crate) client: Client,
    pub(crate) config: Arc<JiraConfig>,
    site: Url,
}

impl JiraClient {
    pub fn new(config: JiraConfig) -> Result<Self> {
        let client = Client::builder()
            .default_headers(Self::default_headers(&config.auth)?)
            .user_agent(concat!("jira-sdk/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                crate::error::Error::Unexpected(format!("Failed to build HTTP client: {}", e))
            })?;

        Self::with_http_client(client, config)
    }

    /// Uses a caller-supplied reqwest client (proxies, timeouts, custom TLS).
    /// Authentication headers are added per request in that case.
    pub fn with_http_client(client: Client, config: JiraConfig) -> Result<Self> {
        let site = site_url(&config.base_url)?;

        Ok(Self {
            client,
            config: Arc::new(config),
            site,
        })
    }

    pub fn config(&self) -> &JiraConfig {
        &self.config
    }

    pub fn site(&self) -> &Url {
        &self.site
    }

    fn default_headers(auth: &Auth) -> Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(header::AUTHORIZATION, Self::authorization(auth)?);
        Ok(headers)
    }

    fn authorization(auth: &Auth) -> Result<header::HeaderValue> {
        let value = match auth {
            Auth::Basic {
                username,
                api_token,
            } => {
                let credentials = format!("{}:{}", username, api_token);
                let encoded =
                    base64::engine::general_purpose::STANDARD.encode(credentials.as_bytes());
                format!("Basic {}", encoded)
            }
            Auth::Bearer { token } => format!("Bearer {}", token),
        };

        header::HeaderValue::from_str(&value).map_err(|_| {
            crate::error::Error::InvalidConfiguration("Invalid auth header".to_string())
        })
    }
}

#[async_trait]
impl Connector for JiraClient {
    fn new_request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<Request> {
        let mut request = build_request(&self.client, &self.site, method, endpoint, body)?;

        let headers = request.headers_mut();
        if !headers.contains_key(header::AUTHORIZATION) {
            headers.insert(header::AUTHORIZATION, Self::authorization(&self.config.auth)?);
        }
        headers
            .entry(header::ACCEPT)
            .or_insert(header::HeaderValue::from_static("application/json"));

        Ok(request)
    }

    async fn call(&self, request: Request) -> Result<ResponseScheme> {
        let method = request.method().to_string();
        let endpoint = request.url().to_string();
        debug!(%method, %endpoint, "sending jira request");

        let response = self.client.execute(request).await?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!(status, %method, %endpoint, "jira request failed");
            return Err(status_error(status, message));
        }

        let body = response.text().await?;
        debug!(status, %endpoint, bytes = body.len(), "jira request succeeded");

        Ok(ResponseScheme {
            code: status,
            endpoint,
            method,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic_config(base_url: String) -> JiraConfig {
        JiraConfig {
            base_url,
            auth: Auth::Basic {
                username: "test@example.com".to_string(),
                api_token: "test_token".to_string(),
            },
        }
    }

    #[test]
    fn test_jira_config_new_with_valid_url() {
        // Given: a valid URL and basic credentials
        let base_url = "https://example.atlassian.net";
        let auth = Auth::Basic {
            username: "test@example.com".to_string(),
            api_token: "test_token".to_string(),
        };

        // When
        let result = JiraConfig::new(base_url, auth.clone());

        // Then
        assert!(result.is_ok());
        let config = result.unwrap();
        assert_eq!(config.base_url, base_url);
        match config.auth {
            Auth::Basic {
                username,
                api_token,
            } => {
                assert_eq!(username, "test@example.com");
                assert_eq!(api_token, "test_token");
            }
            _ => panic!("Expected Basic auth"),
        }
    }

    #[test]
    fn test_jira_config_new_with_bearer_auth() {
        let base_url = "https://example.atlassian.net";
        let auth = Auth::Bearer {
            token: "bearer_token_123".to_string(),
        };

        let result = JiraConfig::new(base_url, auth);

        assert!(result.is_ok());
        match result.unwrap().auth {
            Auth::Bearer { token } => assert_eq!(token, "bearer_token_123"),
            _ => panic!("Expected Bearer auth"),
        }
    }

    #[test]
    fn test_jira_config_new_with_invalid_url() {
        // Given: an invalid URL
        let base_url = "not a valid url";
        let auth = Auth::Basic {
            username: "test@example.com".to_string(),
            api_token: "test_token".to_string(),
        };

        // When
        let result = JiraConfig::new(base_url, auth);

        // Then
        match result.unwrap_err() {
            crate::error::Error::InvalidConfiguration(msg) => {
                assert_eq!(msg, "Invalid base URL");
            }
            _ => panic!("Expected InvalidConfiguration error"),
        }
    }

    // Environment mutations are kept in a single test so they cannot race
    // with each other across the test harness threads.
    #[test]
    fn test_jira_config_from_env() {
        unsafe {
            std::env::set_var("JIRA_URL", "https://test.atlassian.net");
            std::env::set_var("JIRA_USER", "test@example.com");
            std::env::set_var("JIRA_API_TOKEN", "test_api_token");
        }

        let config = JiraConfig::from_env().unwrap();
        assert_eq!(config.base_url, "https://test.atlassian.net");
        match config.auth {
            Auth::Basic {
                username,
                api_token,
            } => {
                assert_eq!(username, "test@example.com");
                assert_eq!(api_token, "test_api_token");
            }
            _ => panic!("Expected Basic auth"),
        }

        unsafe {
            std::env::remove_var("JIRA_API_TOKEN");
        }

        match JiraConfig::from_env().unwrap_err() {
            crate::error::Error::ConfigurationMissing(msg) => {
                assert!(msg.contains("JIRA_API_TOKEN"));
            }
            _ => panic!("Expected ConfigurationMissing error"),
        }

        unsafe {
            std::env::remove_var("JIRA_URL");
            std::env::remove_var("JIRA_USER");
        }

        match JiraConfig::from_env().unwrap_err() {
            crate::error::Error::ConfigurationMissing(msg) => {
                assert!(msg.contains("JIRA_URL"));
            }
            _ => panic!("Expected ConfigurationMissing error"),
        }
    }

    #[test]
    fn test_jira_client_new() {
        let config = basic_config("https://example.atlassian.net".to_string());

        let client = JiraClient::new(config).unwrap();

        assert_eq!(client.config().base_url, "https://example.atlassian.net");
        assert_eq!(client.site().as_str(), "https://example.atlassian.net/");
    }

    #[test]
    fn test_new_request_joins_endpoint_onto_site() {
        let config = basic_config("https://example.atlassian.net/jira".to_string());
        let client = JiraClient::new(config).unwrap();

        let request = client
            .new_request(Method::GET, "rest/api/3/filter/10000?expand=jql", None)
            .unwrap();

        assert_eq!(
            request.url().as_str(),
            "https://example.atlassian.net/jira/rest/api/3/filter/10000?expand=jql"
        );
    }

    #[test]
    fn test_new_request_with_custom_http_client_sets_auth() {
        let config = JiraConfig {
            base_url: "https://example.atlassian.net".to_string(),
            auth: Auth::Bearer {
                token: "bearer_token_123".to_string(),
            },
        };
        let client = JiraClient::with_http_client(Client::new(), config).unwrap();

        let request = client
            .new_request(Method::GET, "rest/api/3/myself", None)
            .unwrap();

        assert_eq!(
            request.headers().get(header::AUTHORIZATION).unwrap(),
            "Bearer bearer_token_123"
        );
    }

    #[tokio::test]
    async fn test_call_success() {
        use serde_json::json;
        use wiremock::matchers::{header, method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        // Given
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/api/3/project/TEST"))
            .and(header(
                "Authorization",
                "Basic dGVzdEBleGFtcGxlLmNvbTp0ZXN0X3Rva2Vu",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "10000",
                "name": "Test Project"
            })))
            .mount(&mock_server)
            .await;

        let client = JiraClient::new(basic_config(mock_server.uri())).unwrap();

        // When
        let request = client
            .new_request(Method::GET, "rest/api/3/project/TEST", None)
            .unwrap();
        let response = client.call(request).await.unwrap();

        // Then
        assert_eq!(response.code, 200);
        assert_eq!(response.method, "GET");
        assert!(response.endpoint.ends_with("/rest/api/3/project/TEST"));
        let data: serde_json::Value = response.json().unwrap();
        assert_eq!(data["id"], "10000");
        assert_eq!(data["name"], "Test Project");
    }

    #[tokio::test]
    async fn test_call_maps_not_found() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/api/3/project/TEST"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Project not found"))
            .mount(&mock_server)
            .await;

        let client = JiraClient::new(basic_config(mock_server.uri())).unwrap();

        let request = client
            .new_request(Method::GET, "rest/api/3/project/TEST", None)
            .unwrap();
        let result = client.call(request).await;

        match result.unwrap_err() {
            crate::error::Error::NotFound(message) => {
                assert_eq!(message, "Project not found");
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_call_maps_server_error() {
        use wiremock::matchers::method;
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal error"))
            .mount(&mock_server)
            .await;

        let client = JiraClient::new(basic_config(mock_server.uri())).unwrap();

        let request = client
            .new_request(Method::DELETE, "rest/api/3/filter/1", None)
            .unwrap();
        let result = client.call(request).await;

        match result.unwrap_err() {
            crate::error::Error::ApiError { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Internal error");
            }
            other => panic!("Expected ApiError, got {:?}", other),
        }
    }
}
