/*
[INPUT]:  Optional coin short name
[OUTPUT]: Account data (balances, own open orders, deposit address)
[POS]:    HTTP layer - account endpoints
[UPDATE]: When adding new account endpoints or changing parameters
*/

use serde_json::Value;

use crate::http::client::require;
use crate::http::{CoinspotClient, Result};
use crate::types::RequestParams;

impl CoinspotClient {
    /// Generate a receive address for the wallet of a coin
    ///
    /// POST my/coin/deposit {cointype}
    pub async fn deposit_address(&self, cointype: &str) -> Result<Value> {
        require("cointype", cointype)?;
        let params = RequestParams::new().with("cointype", cointype);
        self.request("my/coin/deposit", params).await
    }

    /// Wallet balances for each coin
    ///
    /// POST my/balances
    pub async fn my_balances(&self) -> Result<Value> {
        self.request("my/balances", RequestParams::new()).await
    }

    /// Own open orders, at most 100 per coin type
    ///
    /// POST my/orders
    pub async fn my_open_orders(&self) -> Result<Value> {
        self.request("my/orders", RequestParams::new()).await
    }
}
