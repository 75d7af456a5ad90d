//! HTTP client for the survey store.
//!
//! Every call is a fresh round trip: there is no cache and no automatic
//! retry; retries are always user-initiated. The list call carries its own
//! cancellation deadline so a stalled server cannot hold the caller past
//! ten seconds.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{header, StatusCode};
use serde::Deserialize;
use url::Url;

use crate::error::ApiError;
use crate::types::{ListOutcome, SurveyPayload, SurveyRecord};

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Deadline for list requests
pub const LIST_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the survey client
#[derive(Debug, Clone)]
pub struct SurveyConfig {
    pub base_url: String,
    pub list_timeout: Duration,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            list_timeout: LIST_TIMEOUT,
        }
    }
}

/// Survey store API client
#[derive(Clone)]
pub struct SurveyClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    config: SurveyConfig,
    http: reqwest::Client,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

impl SurveyClient {
    /// Create a new client against the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_config(SurveyConfig {
            base_url: base_url.into(),
            ..Default::default()
        })
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: SurveyConfig) -> Self {
        Url::parse(&config.base_url).expect("Invalid base URL");

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            inner: Arc::new(ClientInner { config, http }),
        }
    }

    /// List all surveys.
    ///
    /// Bounded by [`SurveyConfig::list_timeout`]. A server error (5xx)
    /// degrades to an empty outcome instead of failing; an empty array is
    /// a valid, non-degraded result.
    pub async fn list(&self) -> Result<ListOutcome, ApiError> {
        let url = self.endpoint("/api/surveys/");
        tracing::debug!("GET {url}");

        let send = self.inner.http.get(&url).send();
        let response = match tokio::time::timeout(self.inner.config.list_timeout, send).await {
            Ok(Ok(response)) => response,
            Ok(Err(err)) => return Err(ApiError::from_transport(err)),
            Err(_) => return Err(ApiError::Timeout),
        };

        let status = response.status();
        if status.is_server_error() {
            tracing::warn!("survey list degraded: HTTP {}", status.as_u16());
            return Ok(ListOutcome {
                surveys: Vec::new(),
                degraded: true,
            });
        }
        if !status.is_success() {
            return Err(ApiError::Client {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(ApiError::from_transport)?;
        let surveys = serde_json::from_slice(&body)?;
        Ok(ListOutcome {
            surveys,
            degraded: false,
        })
    }

    /// Fetch a single survey by id.
    pub async fn get(&self, id: i64) -> Result<SurveyRecord, ApiError> {
        let url = self.endpoint(&format!("/api/surveys/{id}"));
        tracing::debug!("GET {url}");

        let response = self
            .inner
            .http
            .get(&url)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }
        if !status.is_success() {
            return Err(ApiError::Fetch {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(ApiError::from_transport)?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Create a new survey from a validated payload.
    pub async fn create(&self, payload: &SurveyPayload) -> Result<SurveyRecord, ApiError> {
        let url = self.endpoint("/api/surveys/");
        tracing::debug!("POST {url}");

        let response = self
            .inner
            .http
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        Self::read_written(response, "Failed to submit survey").await
    }

    /// Replace an existing survey with a validated payload.
    pub async fn update(&self, id: i64, payload: &SurveyPayload) -> Result<SurveyRecord, ApiError> {
        let url = self.endpoint(&format!("/api/surveys/{id}"));
        tracing::debug!("PUT {url}");

        let response = self
            .inner
            .http
            .put(&url)
            .json(payload)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        Self::read_written(response, "Failed to update survey").await
    }

    /// Delete a survey by id.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/api/surveys/{id}"));
        tracing::debug!("DELETE {url}");

        let response = self
            .inner
            .http
            .delete(&url)
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Delete {
                status: status.as_u16(),
            });
        }
        Ok(())
    }

    /// Read a create/update response: the stored record on success, the
    /// server's `detail` message on rejection.
    async fn read_written(
        response: reqwest::Response,
        fallback: &str,
    ) -> Result<SurveyRecord, ApiError> {
        let status = response.status();
        let body = response.bytes().await.map_err(ApiError::from_transport)?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .map(|err| err.detail)
                .unwrap_or_else(|_| fallback.to_string());
            return Err(ApiError::Submit { message });
        }

        Ok(serde_json::from_slice(&body)?)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.inner.config.base_url, path)
    }
}
