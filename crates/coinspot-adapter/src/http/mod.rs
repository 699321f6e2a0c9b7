/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod public;
pub mod signature;
pub mod trade;
pub mod transport;
pub mod user;

pub use error::{CoinspotError, Result};
pub use signature::{RequestSigner, SignedPayload};
pub use transport::{ReqwestTransport, Transport, TransportRequest, TransportResponse};

pub use client::{ClientConfig, CoinspotClient, DEFAULT_BASE_URL};
