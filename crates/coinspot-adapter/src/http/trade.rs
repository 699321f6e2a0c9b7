/*
[INPUT]:  Coin short name, validated amount/rate, order id
[OUTPUT]: Order placement and cancellation confirmations
[POS]:    HTTP layer - trading endpoints
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use serde_json::Value;

use crate::http::client::require;
use crate::http::{CoinspotClient, Result};
use crate::types::{Amount, Rate, RequestParams};

impl CoinspotClient {
    /// Instant buy at the current market quote
    ///
    /// POST quote/buy {cointype, amount}
    pub async fn quick_buy(&self, cointype: &str, amount: Amount) -> Result<Value> {
        require("cointype", cointype)?;
        let params = RequestParams::new()
            .with("cointype", cointype)
            .with("amount", amount);
        self.request("quote/buy", params).await
    }

    /// Instant sell at the current market quote
    ///
    /// POST quote/sell {cointype, amount}
    pub async fn quick_sell(&self, cointype: &str, amount: Amount) -> Result<Value> {
        require("cointype", cointype)?;
        let params = RequestParams::new()
            .with("cointype", cointype)
            .with("amount", amount);
        self.request("quote/sell", params).await
    }

    /// Place an on-market buy order
    ///
    /// POST my/buy {cointype, amount, rate}
    pub async fn place_buy_order(
        &self,
        cointype: &str,
        amount: Amount,
        rate: Rate,
    ) -> Result<Value> {
        require("cointype", cointype)?;
        self.request("my/buy", order_params(cointype, amount, rate)).await
    }

    /// Place an on-market sell order
    ///
    /// POST my/sell {cointype, amount, rate}
    pub async fn place_sell_order(
        &self,
        cointype: &str,
        amount: Amount,
        rate: Rate,
    ) -> Result<Value> {
        require("cointype", cointype)?;
        self.request("my/sell", order_params(cointype, amount, rate)).await
    }

    /// Cancel an on-market buy order
    ///
    /// POST my/buy/cancel {id}
    pub async fn cancel_buy_order(&self, id: &str) -> Result<Value> {
        require("id", id)?;
        let params = RequestParams::new().with("id", id);
        self.request("my/buy/cancel", params).await
    }

    /// Cancel an on-market sell order
    ///
    /// POST my/sell/cancel {id}
    pub async fn cancel_sell_order(&self, id: &str) -> Result<Value> {
        require("id", id)?;
        let params = RequestParams::new().with("id", id);
        self.request("my/sell/cancel", params).await
    }
}

fn order_params(cointype: &str, amount: Amount, rate: Rate) -> RequestParams {
    RequestParams::new()
        .with("cointype", cointype)
        .with("amount", amount)
        .with("rate", rate)
}
