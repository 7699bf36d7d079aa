//! HTTP client for the Mexal Passepartout REST API.
//!
//! Handles credential encoding, the managerial-coordinates header with
//! per-request fiscal-year override, timeout management, and the
//! request/response lifecycle.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, error};

use mexal_core::config::ServerConfig;
use mexal_core::error::{MexalError, MexalResult};

use crate::response::Envelope;

/// HTTP client for the Mexal web API.
///
/// Wraps reqwest::Client with Passepartout authentication and the
/// managerial-coordinates header. The client holds no mutable state and is
/// cheap to clone and share.
#[derive(Clone)]
pub struct MexalClient {
    inner: Client,
    /// Base URL for the API, without trailing slash.
    base_url: String,
    /// Precomputed `Authorization` header value.
    authorization: String,
    /// Company identifier (the `Azienda` coordinate).
    company: String,
    /// Company fiscal year (the `Anno` coordinate).
    company_year: String,
}

impl MexalClient {
    /// Create a new MexalClient from server configuration.
    pub fn new(config: &ServerConfig) -> MexalResult<Self> {
        let inner = Client::builder()
            .timeout(Duration::from_millis(config.api_timeout_ms))
            .build()
            .map_err(|e| MexalError::Http(format!("failed to build HTTP client: {e}")))?;

        let credentials = BASE64.encode(format!("{}:{}", config.username, config.password));
        let authorization = format!("Passepartout {credentials} Dominio={}", config.domain);

        Ok(Self {
            inner,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            authorization,
            company: config.company.clone(),
            company_year: config.company_year.clone(),
        })
    }

    /// Get the base URL the client was built with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Render the `Coordinate-Gestionale` header value.
    ///
    /// A fresh value is built for every request, so a fiscal-year override
    /// never touches the coordinates other requests see.
    fn coordinates(&self, year: Option<&str>) -> String {
        let year = year.unwrap_or(&self.company_year);
        format!("Azienda={} Anno={}", self.company, year)
    }

    /// Execute a GET against an API path, optionally overriding the
    /// coordinates year for this request only.
    async fn get(&self, path: &str, year: Option<&str>) -> MexalResult<Response> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", path);

        self.inner
            .get(&url)
            .header("Authorization", &self.authorization)
            .header("Content-Type", "application/json")
            .header("Coordinate-Gestionale", self.coordinates(year))
            .send()
            .await
            .map_err(classify_error)
    }

    /// GET a path and decode the standard `dati` list envelope.
    pub(crate) async fn get_envelope(
        &self,
        path: &str,
        year: Option<&str>,
    ) -> MexalResult<Envelope> {
        let response = check_status(self.get(path, year).await?).await?;
        response
            .json::<Envelope>()
            .await
            .map_err(|e| MexalError::Decode(format!("failed to decode envelope: {e}")))
    }

    /// GET a path and decode a bare JSON object (single-resource lookups).
    pub(crate) async fn get_object(&self, path: &str) -> MexalResult<serde_json::Value> {
        let response = check_status(self.get(path, None).await?).await?;
        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| MexalError::Decode(format!("failed to decode response: {e}")))
    }
}

/// Check the HTTP status, converting non-200 into an error carrying the
/// status code and body text.
async fn check_status(response: Response) -> MexalResult<Response> {
    let status = response.status();
    if status != StatusCode::OK {
        let body = response.text().await.unwrap_or_default();
        return Err(MexalError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}

/// Classify a reqwest error into a MexalError variant.
fn classify_error(e: reqwest::Error) -> MexalError {
    if e.is_timeout() {
        MexalError::Timeout(e.to_string())
    } else if e.is_connect() {
        MexalError::Http(format!("connection failed: {e}"))
    } else {
        MexalError::Http(e.to_string())
    }
}

/// Append a query parameter to an endpoint path, using `?` for the first
/// parameter and `&` thereafter.
pub(crate) fn append_param(endpoint: &mut String, key: &str, value: &str) {
    let sep = if endpoint.contains('?') { '&' } else { '?' };
    endpoint.push(sep);
    endpoint.push_str(key);
    endpoint.push('=');
    endpoint.push_str(value);
}

/// Build the `fields=` value from an ordered property list (comma-joined,
/// no escaping).
pub(crate) fn join_fields(properties: &[String]) -> String {
    properties.join(",")
}

/// Flatten an internal result into the caller-facing absence value,
/// emitting exactly one error event on failure.
pub(crate) fn ok_or_log<T>(context: &str, result: MexalResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            error!("{context}: {e}");
            None
        }
    }
}
