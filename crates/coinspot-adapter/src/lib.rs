/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public CoinSpot adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{
    FixedClock,
    HmacSigner,
    NonceClock,
    SystemClock,
};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    CoinspotClient,
    CoinspotError,
    DEFAULT_BASE_URL,
    RequestSigner,
    Result,
    Transport,
    TransportRequest,
    TransportResponse,
};

// Re-export all types
pub use types::*;
