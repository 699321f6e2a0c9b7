/*
[INPUT]:  Payload bytes and the API secret
[OUTPUT]: Hex-encoded HMAC-SHA512 signatures
[POS]:    Auth layer - cryptographic signing for request authentication
[UPDATE]: When changing signing algorithm or signature encoding
*/

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha512;

use crate::http::{CoinspotError, Result};

type HmacSha512 = Hmac<Sha512>;

/// HMAC-SHA512 signer keyed by the API secret
#[derive(Clone)]
pub struct HmacSigner {
    mac: HmacSha512,
}

impl HmacSigner {
    /// Create signer from the API secret
    pub fn new(secret: &str) -> Result<Self> {
        let mac = HmacSha512::new_from_slice(secret.as_bytes())
            .map_err(|e| CoinspotError::Config(format!("Unusable API secret: {e}")))?;
        Ok(Self { mac })
    }

    /// Sign a payload and return the lowercase hex digest
    pub fn sign(&self, payload: &[u8]) -> String {
        let mut mac = self.mac.clone();
        mac.update(payload);
        hex::encode(mac.finalize().into_bytes())
    }

    /// Verify a hex digest against a payload
    pub fn verify(&self, payload: &[u8], signature: &str) -> bool {
        let Ok(expected) = hex::decode(signature) else {
            return false;
        };
        let mut mac = self.mac.clone();
        mac.update(payload);
        mac.verify_slice(&expected).is_ok()
    }
}

impl fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacSigner").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 4231, test case 2
    const RFC4231_TC2: &str = "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea2505549758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737";

    #[test]
    fn test_known_vector() {
        let signer = HmacSigner::new("Jefe").unwrap();
        let signature = signer.sign(b"what do ya want for nothing?");
        assert_eq!(signature, RFC4231_TC2);
        assert_eq!(signature.len(), 128);
    }

    #[test]
    fn test_sign_and_verify() {
        let signer = HmacSigner::new("secret").unwrap();
        let payload = br#"{"nonce":1}"#;
        let signature = signer.sign(payload);
        assert!(signer.verify(payload, &signature));
        assert!(!signer.verify(br#"{"nonce":2}"#, &signature));
        assert!(!signer.verify(payload, "not-hex"));
    }

    #[test]
    fn test_debug_hides_secret() {
        let signer = HmacSigner::new("super-secret").unwrap();
        assert!(!format!("{signer:?}").contains("super-secret"));
    }
}
