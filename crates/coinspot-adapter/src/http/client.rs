/*
[INPUT]:  Client configuration (base URL, API key/secret, timeouts, payload mode)
[OUTPUT]: Signed POST requests and decoded JSON responses
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use reqwest::header::HeaderValue;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, warn};

use crate::auth::{HmacSigner, NonceClock, SystemClock};
use crate::http::signature::{KEY_HEADER, RequestSigner, SIGN_HEADER};
use crate::http::transport::{ReqwestTransport, Transport, TransportRequest, TransportResponse};
use crate::http::{CoinspotError, Result};
use crate::types::{PayloadMode, RequestParams};

/// Base URL of the CoinSpot private API
pub const DEFAULT_BASE_URL: &str = "https://www.coinspot.com.au/api/";

/// Reason phrase that marks a successful response
const OK_REASON: &str = "OK";

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(10)
}

fn deserialize_secs<'de, D>(deserializer: D) -> std::result::Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_secs)
}

/// HTTP client configuration
///
/// Deserializes from `{"url": ..., "key": ..., "secret": ...}`; timeouts are
/// given in seconds.
#[derive(Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(rename = "url")]
    pub base_url: String,
    #[serde(rename = "key")]
    pub api_key: String,
    #[serde(rename = "secret")]
    pub api_secret: String,
    #[serde(default = "default_timeout", deserialize_with = "deserialize_secs")]
    pub timeout: Duration,
    #[serde(default = "default_connect_timeout", deserialize_with = "deserialize_secs")]
    pub connect_timeout: Duration,
    #[serde(default)]
    pub payload_mode: PayloadMode,
}

impl ClientConfig {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            timeout: default_timeout(),
            connect_timeout: default_connect_timeout(),
            payload_mode: PayloadMode::default(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    pub fn with_payload_mode(mut self, payload_mode: PayloadMode) -> Self {
        self.payload_mode = payload_mode;
        self
    }

    /// Check required fields and return the base URL with a trailing slash,
    /// so relative endpoint paths resolve beneath it
    pub fn validated_base_url(&self) -> Result<Url> {
        for (name, value) in [
            ("url", &self.base_url),
            ("key", &self.api_key),
            ("secret", &self.api_secret),
        ] {
            if value.trim().is_empty() {
                return Err(CoinspotError::Config(format!("`{name}` must not be empty")));
            }
        }

        // sent verbatim as the `key` header on every call
        if HeaderValue::from_str(&self.api_key).is_err() {
            return Err(CoinspotError::Config(
                "`key` contains characters not allowed in an HTTP header".to_string(),
            ));
        }

        let mut base = self.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let url = Url::parse(&base).map_err(|e| {
            CoinspotError::Config(format!("invalid `url` {}: {e}", self.base_url))
        })?;
        if url.cannot_be_a_base() {
            return Err(CoinspotError::Config(format!(
                "`url` cannot be used as a base URL: {}",
                self.base_url
            )));
        }
        Ok(url)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("api_secret", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("payload_mode", &self.payload_mode)
            .finish()
    }
}

/// Main HTTP client for the CoinSpot API
#[derive(Clone)]
pub struct CoinspotClient {
    base_url: Url,
    api_key: String,
    signer: RequestSigner,
    payload_mode: PayloadMode,
    transport: Arc<dyn Transport>,
    clock: Arc<dyn NonceClock>,
}

impl CoinspotClient {
    /// Create a client that talks to `config.base_url` over reqwest
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = config.validated_base_url()?;
        let transport =
            ReqwestTransport::new(base_url.clone(), config.timeout, config.connect_timeout)?;
        Self::assemble(config, base_url, Arc::new(transport))
    }

    /// Create a client over a caller-supplied transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        let base_url = config.validated_base_url()?;
        Self::assemble(config, base_url, transport)
    }

    /// Replace the nonce source
    pub fn with_clock(mut self, clock: Arc<dyn NonceClock>) -> Self {
        self.clock = clock;
        self
    }

    fn assemble(config: ClientConfig, base_url: Url, transport: Arc<dyn Transport>) -> Result<Self> {
        let signer = RequestSigner::new(HmacSigner::new(&config.api_secret)?);
        Ok(Self {
            base_url,
            api_key: config.api_key,
            signer,
            payload_mode: config.payload_mode,
            transport,
            clock: Arc::new(SystemClock),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn payload_mode(&self) -> PayloadMode {
        self.payload_mode
    }

    /// Sign `params` and POST them to `path`.
    ///
    /// Adds the nonce, signs the JSON text, and decodes the body when the
    /// response reason phrase is "OK". Endpoint methods are thin wrappers
    /// around this; it is public for endpoints not wrapped here.
    pub async fn request(&self, path: &str, mut params: RequestParams) -> Result<Value> {
        let nonce = self.clock.now();
        params.set_nonce(nonce);

        let signed = self.signer.sign_params(&params)?;
        let body = match self.payload_mode {
            PayloadMode::Full => signed.payload,
            PayloadMode::NonceOnly => serde_json::json!({ "nonce": nonce }).to_string(),
        };

        debug!(path, nonce, "posting signed request");
        let request = TransportRequest {
            path: path.to_string(),
            headers: vec![
                (KEY_HEADER.to_string(), self.api_key.clone()),
                (SIGN_HEADER.to_string(), signed.signature),
            ],
            body,
        };

        let response = self.transport.post(request).await.inspect_err(|err| {
            warn!(path, status = ?err.status(), "request failed");
        })?;

        decode_response(path, response)
    }
}

fn decode_response(path: &str, response: TransportResponse) -> Result<Value> {
    if response.reason != OK_REASON {
        warn!(path, status = response.status, reason = %response.reason, "non-OK response");
        return Err(CoinspotError::NonOkResponse {
            status: response.status,
            reason: response.reason,
        });
    }

    if response.body.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(&response.body)
        .map_err(|e| CoinspotError::InvalidResponse(format!("{path}: {e}")))
}

/// Reject empty values for parameters the endpoint requires
pub(crate) fn require(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CoinspotError::MissingParameter(name.to_string()));
    }
    Ok(())
}

impl fmt::Debug for CoinspotClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoinspotClient")
            .field("base_url", &self.base_url.as_str())
            .field("payload_mode", &self.payload_mode)
            .field("transport", &self.transport)
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}
