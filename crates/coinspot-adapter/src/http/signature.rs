/*
[INPUT]:  Request parameters (nonce already set) and HMAC signer
[OUTPUT]: Signed JSON payload plus the `sign` header value
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or header format
*/

use crate::auth::HmacSigner;
use crate::http::Result;
use crate::types::RequestParams;

/// Header carrying the API key
pub const KEY_HEADER: &str = "key";
/// Header carrying the hex HMAC-SHA512 of the payload
pub const SIGN_HEADER: &str = "sign";

/// JSON text that was signed, and its signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedPayload {
    pub payload: String,
    pub signature: String,
}

/// Signs request parameters for authenticated endpoints
#[derive(Debug, Clone)]
pub struct RequestSigner {
    signer: HmacSigner,
}

impl RequestSigner {
    /// Create a new request signer with the given HMAC signer
    pub fn new(signer: HmacSigner) -> Self {
        Self { signer }
    }

    /// Serialize params to compact JSON and sign that exact text
    pub fn sign_params(&self, params: &RequestParams) -> Result<SignedPayload> {
        let payload = params.to_json()?;
        let signature = self.signer.sign(payload.as_bytes());
        Ok(SignedPayload { payload, signature })
    }
}
