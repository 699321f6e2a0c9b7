/*
[INPUT]:  Caller-supplied coin amounts and AUD rates
[OUTPUT]: Decimal values checked against the exchange's precision limits
[POS]:    Data layer - validated numeric fields for order endpoints
[UPDATE]: When the exchange changes its precision limits
*/

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::{CoinspotError, Result};

/// Max decimal places accepted for a coin amount
pub const AMOUNT_MAX_DECIMALS: u32 = 8;
/// Max decimal places accepted for an AUD rate
pub const RATE_MAX_DECIMALS: u32 = 6;

/// Coin quantity, at most 8 decimal places
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Amount(Decimal);

/// Price in AUD, at most 6 decimal places
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rate(Decimal);

/// Returns the value unchanged when it fits, otherwise with trailing zeros stripped
fn fit_precision(value: Decimal, max_decimals: u32) -> std::result::Result<Decimal, String> {
    if value <= Decimal::ZERO {
        return Err(format!("{value} must be greater than zero"));
    }
    if value.scale() <= max_decimals {
        return Ok(value);
    }
    let normalized = value.normalize();
    if normalized.scale() <= max_decimals {
        Ok(normalized)
    } else {
        Err(format!("{value} has more than {max_decimals} decimal places"))
    }
}

impl Amount {
    pub fn new(value: Decimal) -> Result<Self> {
        fit_precision(value, AMOUNT_MAX_DECIMALS)
            .map(Self)
            .map_err(CoinspotError::InvalidAmount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl Rate {
    pub fn new(value: Decimal) -> Result<Self> {
        fit_precision(value, RATE_MAX_DECIMALS)
            .map(Self)
            .map_err(CoinspotError::InvalidRate)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl FromStr for Amount {
    type Err = CoinspotError;

    fn from_str(s: &str) -> Result<Self> {
        let value = Decimal::from_str(s.trim())
            .map_err(|e| CoinspotError::InvalidAmount(format!("{s}: {e}")))?;
        Self::new(value)
    }
}

impl FromStr for Rate {
    type Err = CoinspotError;

    fn from_str(s: &str) -> Result<Self> {
        let value = Decimal::from_str(s.trim())
            .map_err(|e| CoinspotError::InvalidRate(format!("{s}: {e}")))?;
        Self::new(value)
    }
}

impl TryFrom<String> for Amount {
    type Error = CoinspotError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl TryFrom<String> for Rate {
    type Error = CoinspotError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Amount> for String {
    fn from(amount: Amount) -> Self {
        amount.to_string()
    }
}

impl From<Rate> for String {
    fn from(rate: Rate) -> Self {
        rate.to_string()
    }
}

// Sent as JSON strings so no precision is lost in transit.
impl From<Amount> for Value {
    fn from(amount: Amount) -> Self {
        Value::String(amount.to_string())
    }
}

impl From<Rate> for Value {
    fn from(rate: Rate) -> Self {
        Value::String(rate.to_string())
    }
}
