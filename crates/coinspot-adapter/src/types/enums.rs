/*
[INPUT]:  Client configuration choices
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When new request body layouts are supported
*/

use serde::{Deserialize, Serialize};

/// What goes into the POST body of a signed request.
///
/// The signature always covers every parameter plus the nonce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadMode {
    /// Body is the exact signed JSON text
    #[default]
    Full,
    /// Body is `{"nonce": n}` only, matching older CoinSpot client libraries
    NonceOnly,
}
