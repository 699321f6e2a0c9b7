/*
[INPUT]:  Fixed secrets, payloads, and nonce sources
[OUTPUT]: Test results for request signing
[POS]:    Integration tests - authentication
[UPDATE]: When the signing scheme or nonce source changes
*/

mod common;

use common::{ScriptedTransport, TEST_SECRET, scripted_client};
use coinspot_adapter::{HmacSigner, NonceClock, RequestParams, RequestSigner, SystemClock};
use tokio_test::assert_ok;

#[test]
fn test_request_signer_matches_raw_hmac() {
    let signer = assert_ok!(HmacSigner::new(TEST_SECRET));
    let request_signer = RequestSigner::new(signer.clone());

    let mut params = RequestParams::new().with("cointype", "BTC");
    params.set_nonce(1);
    let signed = assert_ok!(request_signer.sign_params(&params));

    assert_eq!(signed.payload, r#"{"cointype":"BTC","nonce":1}"#);
    assert!(signer.verify(signed.payload.as_bytes(), &signed.signature));
    assert!(signed.signature.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[test]
fn test_system_clock_moves_forward() {
    let first = SystemClock.now();
    let second = SystemClock.now();
    assert!(second >= first);
}

#[tokio::test]
async fn test_same_nonce_gives_same_signature() {
    let transport = ScriptedTransport::respond(200, "OK", "{}");
    let client = scripted_client(transport.clone());

    assert_ok!(client.my_balances().await);
    assert_ok!(client.my_balances().await);

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].header("sign"), requests[1].header("sign"));
    assert_eq!(requests[0].body, requests[1].body);
}
