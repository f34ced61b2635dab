//! `reqwest` implementation of [`LifecycleApi`]

use crate::api::{DataEnvelope, Endpoint, LifecycleApi, API_PREFIX};
use crate::config::ClientConfig;
use crate::error::{ConfigError, FetchError, NOT_ENABLED_MESSAGE};
use async_trait::async_trait;
use roadmap_model::{AppStreamLifecycleRecord, SystemLifecycleRecord, UpcomingChange};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Instant;

/// Gateway timeout, reported by the backend when a query runs too long
pub const STATUS_GATEWAY_TIMEOUT: u16 = 504;

/// HTTP client for the Digital Roadmap API
#[derive(Debug, Clone)]
pub struct HttpLifecycleApi {
    client: reqwest::Client,
    base: String,
}

impl HttpLifecycleApi {
    /// Build a client for `config`
    ///
    /// # Errors
    /// Returns `ConfigError` if the base URL or timeout is unusable or the
    /// TLS backend cannot be initialized.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(Self::with_client(client, &config.base_url))
    }

    /// Use an existing `reqwest` client
    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL of `endpoint`
    #[must_use]
    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}{API_PREFIX}{}", self.base, endpoint.path())
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<Vec<T>, FetchError> {
        let started = Instant::now();
        let response = self
            .client
            .get(self.endpoint_url(endpoint))
            .send()
            .await
            .map_err(map_transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport)?;
        if !status.is_success() {
            let err = classify_response(status.as_u16(), &String::from_utf8_lossy(&body));
            tracing::warn!(%endpoint, status = status.as_u16(), error = %err, "request failed");
            return Err(err);
        }

        let envelope: DataEnvelope<T> =
            serde_json::from_slice(&body).map_err(|e| FetchError::decode(endpoint.to_string(), e))?;
        tracing::debug!(
            %endpoint,
            records = envelope.data.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "fetched"
        );
        Ok(envelope.data)
    }
}

#[async_trait]
impl LifecycleApi for HttpLifecycleApi {
    async fn systems(&self) -> Result<Vec<SystemLifecycleRecord>, FetchError> {
        self.get(Endpoint::Systems).await
    }

    async fn relevant_systems(&self) -> Result<Vec<SystemLifecycleRecord>, FetchError> {
        self.get(Endpoint::RelevantSystems).await
    }

    async fn app_streams(&self) -> Result<Vec<AppStreamLifecycleRecord>, FetchError> {
        self.get(Endpoint::AppStreams).await
    }

    async fn relevant_app_streams(&self) -> Result<Vec<AppStreamLifecycleRecord>, FetchError> {
        self.get(Endpoint::RelevantAppStreams).await
    }

    async fn upcoming_changes(&self) -> Result<Vec<UpcomingChange>, FetchError> {
        self.get(Endpoint::UpcomingChanges).await
    }
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
}

/// Map a non-success response to a [`FetchError`]
///
/// The message comes from the body's `detail` or `message` field, falling
/// back to the raw body and then to the status code.
#[must_use]
pub fn classify_response(status: u16, body: &str) -> FetchError {
    if status == STATUS_GATEWAY_TIMEOUT {
        return FetchError::Timeout;
    }

    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed
        .detail
        .map(|detail| match detail {
            serde_json::Value::String(text) => text,
            other => other.to_string(),
        })
        .or(parsed.message)
        .unwrap_or_else(|| {
            let raw = body.trim();
            if raw.is_empty() {
                format!("HTTP {status}")
            } else {
                raw.to_string()
            }
        });

    if message.trim() == NOT_ENABLED_MESSAGE {
        FetchError::NotEnabled
    } else {
        FetchError::status(status, message)
    }
}

fn map_transport(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::transport(err)
    }
}
