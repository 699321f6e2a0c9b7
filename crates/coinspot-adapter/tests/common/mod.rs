/*
[INPUT]:  Test configuration and canned transport outcomes
[OUTPUT]: Shared test utilities, fixtures, and simulated transports
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for coinspot-adapter tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use coinspot_adapter::{
    ClientConfig, CoinspotClient, CoinspotError, FixedClock, Result, Transport, TransportRequest,
    TransportResponse,
};

pub const TEST_KEY: &str = "test-key";
pub const TEST_SECRET: &str = "test-secret";
pub const TEST_NONCE: u64 = 1_700_000_000;

/// Outcome a [`ScriptedTransport`] replays for every request
#[derive(Debug, Clone)]
pub enum Scripted {
    Respond(TransportResponse),
    Fail { status: Option<u16>, body: String },
}

/// Simulated transport: records each request and replays one canned outcome
#[derive(Debug)]
pub struct ScriptedTransport {
    outcome: Scripted,
    requests: Mutex<Vec<TransportRequest>>,
}

impl ScriptedTransport {
    pub fn respond(status: u16, reason: &str, body: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Scripted::Respond(TransportResponse {
                status,
                reason: reason.to_string(),
                body: body.to_string(),
            }),
            requests: Mutex::new(Vec::new()),
        })
    }

    #[allow(dead_code)]
    pub fn fail(status: Option<u16>, body: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Scripted::Fail {
                status,
                body: body.to_string(),
            },
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    #[allow(dead_code)]
    pub fn last_request(&self) -> TransportRequest {
        self.requests()
            .pop()
            .expect("transport received no request")
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn post(&self, request: TransportRequest) -> Result<TransportResponse> {
        self.requests.lock().unwrap().push(request);
        match &self.outcome {
            Scripted::Respond(response) => Ok(response.clone()),
            Scripted::Fail { status, body } => Err(CoinspotError::Request {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}

pub fn test_config() -> ClientConfig {
    ClientConfig::new("https://www.coinspot.com.au/api/", TEST_KEY, TEST_SECRET)
}

/// Client over `transport` with nonce pinned to [`TEST_NONCE`]
pub fn scripted_client(transport: Arc<ScriptedTransport>) -> CoinspotClient {
    scripted_client_with(test_config(), transport)
}

pub fn scripted_client_with(
    config: ClientConfig,
    transport: Arc<ScriptedTransport>,
) -> CoinspotClient {
    CoinspotClient::with_transport(config, transport)
        .expect("client init")
        .with_clock(Arc::new(FixedClock::new(TEST_NONCE)))
}
