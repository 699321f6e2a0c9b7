/*
[INPUT]:  Endpoint arguments (cointype, amount, rate, id) and nonce
[OUTPUT]: Ordered request parameters serialized as the signed JSON payload
[POS]:    Data layer - request payload construction
[UPDATE]: When endpoints gain new parameters or payload ordering changes
*/

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// Key of the nonce field added to every signed request
pub const NONCE_KEY: &str = "nonce";

/// Request parameters in insertion order.
///
/// The exchange verifies the signature against the exact JSON text, so the
/// order in which fields were added is the order in which they serialize.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestParams {
    entries: Vec<(String, Value)>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Insert a value; an existing key keeps its position and gets the new value
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    pub fn set_nonce(&mut self, nonce: u64) {
        self.set(NONCE_KEY, nonce);
    }

    pub fn nonce(&self) -> Option<u64> {
        self.get(NONCE_KEY).and_then(Value::as_u64)
    }

    /// Keys in serialization order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compact JSON text used both for signing and as the request body
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Serialize for RequestParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
