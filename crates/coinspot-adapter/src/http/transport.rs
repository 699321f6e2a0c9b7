/*
[INPUT]:  Signed request (relative path, auth headers, JSON body)
[OUTPUT]: Raw status, reason phrase and body, or a RequestError for 4xx/5xx
[POS]:    HTTP layer - wire boundary, swappable for simulated transports
[UPDATE]: When changing connection options or status classification
*/

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};

use crate::http::{CoinspotError, Result};

/// A POST about to go on the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    /// Path relative to the base URL, e.g. `my/buy`
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl TransportRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// What came back, for any status the transport does not treat as an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub reason: String,
    pub body: String,
}

/// Sends signed POST requests.
///
/// Implementations return `CoinspotError::Request` for 4xx/5xx responses and
/// connection failures, keeping the response body when there is one.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    async fn post(&self, request: TransportRequest) -> Result<TransportResponse>;
}

/// reqwest-backed transport bound to one base URL
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: Client,
    base_url: Url,
}

impl ReqwestTransport {
    pub fn new(base_url: Url, timeout: Duration, connect_timeout: Duration) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post(&self, request: TransportRequest) -> Result<TransportResponse> {
        let url = self.base_url.join(&request.path)?;

        let mut builder = self
            .http_client
            .post(url)
            .header(CONTENT_TYPE, "application/json");
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder
            .body(request.body)
            .send()
            .await
            .map_err(|e| CoinspotError::Request {
                status: e.status().map(|s| s.as_u16()),
                body: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| CoinspotError::Request {
            status: Some(status.as_u16()),
            body: e.to_string(),
        })?;

        if status.is_client_error() || status.is_server_error() {
            return Err(CoinspotError::request_error(status, body));
        }

        // hyper only keeps canonical reason phrases
        let reason = status.canonical_reason().unwrap_or_default().to_string();

        Ok(TransportResponse {
            status: status.as_u16(),
            reason,
            body,
        })
    }
}
