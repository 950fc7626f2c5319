use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::DomainError;
use crate::infrastructure::observability::record_upstream_request;

/// Query parameters in the order they are sent
pub type QueryParams = [(&'static str, String)];

/// Trait for HTTP client operations (for mocking)
#[async_trait]
pub trait HttpClientTrait: Send + Sync + std::fmt::Debug {
    /// GETs `url` with the given query string and decodes the JSON body.
    ///
    /// A non-success status yields an upstream error carrying that status.
    async fn get_json(&self, url: &str, query: &QueryParams)
    -> Result<serde_json::Value, DomainError>;
}

#[async_trait]
impl<T: HttpClientTrait + ?Sized> HttpClientTrait for Arc<T> {
    async fn get_json(
        &self,
        url: &str,
        query: &QueryParams,
    ) -> Result<serde_json::Value, DomainError> {
        (**self).get_json(url, query).await
    }
}

const MAX_ERROR_BODY_LOG: usize = 500;

/// Real HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub fn with_settings(timeout: Duration, user_agent: &str) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                DomainError::configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn get_json(
        &self,
        url: &str,
        query: &QueryParams,
    ) -> Result<serde_json::Value, DomainError> {
        let start = Instant::now();
        let host = host_label(url);

        let response = self.client.get(url).query(query).send().await.map_err(|e| {
            record_upstream_request(&host, "error", start.elapsed());
            DomainError::upstream("http", format!("Request failed: {}", e))
        })?;

        let status = response.status();
        record_upstream_request(&host, status.as_str(), start.elapsed());

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            debug!(
                url = %url,
                status = %status,
                body = %truncate_for_log(&error_body, MAX_ERROR_BODY_LOG),
                "Upstream returned error status"
            );

            return Err(DomainError::upstream_status(
                "http",
                status.as_u16(),
                format!("HTTP {}", status),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| DomainError::upstream("http", format!("Failed to parse response: {}", e)))
    }
}

fn host_label(url: &str) -> String {
    reqwest::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| "unknown".to_string())
}

/// Truncate long strings for logging
fn truncate_for_log(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }

    let mut end = max_len;
    while !s.is_char_boundary(end) {
        end -= 1;
    }

    format!("{}...[truncated {} bytes]", &s[..end], s.len() - end)
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Mutex, RwLock};

    /// Canned responses keyed by `url?k=v&...` in parameter order
    #[derive(Debug, Default)]
    pub struct MockHttpClient {
        responses: RwLock<HashMap<String, serde_json::Value>>,
        statuses: RwLock<HashMap<String, u16>>,
        errors: RwLock<HashMap<String, String>>,
        calls: Mutex<Vec<String>>,
    }

    impl MockHttpClient {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn request_key(url: &str, query: &QueryParams) -> String {
            if query.is_empty() {
                return url.to_string();
            }

            let pairs: Vec<String> = query.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
            format!("{}?{}", url, pairs.join("&"))
        }

        pub fn with_response(self, key: impl Into<String>, response: serde_json::Value) -> Self {
            self.responses.write().unwrap().insert(key.into(), response);
            self
        }

        pub fn with_status(self, key: impl Into<String>, status: u16) -> Self {
            self.statuses.write().unwrap().insert(key.into(), status);
            self
        }

        pub fn with_error(self, key: impl Into<String>, error: impl Into<String>) -> Self {
            self.errors.write().unwrap().insert(key.into(), error.into());
            self
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpClientTrait for MockHttpClient {
        async fn get_json(
            &self,
            url: &str,
            query: &QueryParams,
        ) -> Result<serde_json::Value, DomainError> {
            let key = Self::request_key(url, query);
            self.calls.lock().unwrap().push(key.clone());

            if let Some(error) = self.errors.read().unwrap().get(&key) {
                return Err(DomainError::upstream("mock", error));
            }

            if let Some(status) = self.statuses.read().unwrap().get(&key) {
                return Err(DomainError::upstream_status(
                    "mock",
                    *status,
                    format!("HTTP {}", status),
                ));
            }

            self.responses
                .read()
                .unwrap()
                .get(&key)
                .cloned()
                .ok_or_else(|| DomainError::upstream("mock", format!("No mock response for {}", key)))
        }
    }
}
