/*
[INPUT]:  API secret and time source
[OUTPUT]: HMAC signatures and request nonces
[POS]:    Auth layer - handles CoinSpot API authentication
[UPDATE]: When auth flow or signature methods change
*/

pub mod clock;
pub mod signer;

pub use clock::{FixedClock, NonceClock, SystemClock};
pub use signer::HmacSigner;
