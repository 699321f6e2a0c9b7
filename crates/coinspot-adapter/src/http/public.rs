/*
[INPUT]:  Coin short name
[OUTPUT]: Exchange-wide open orders and recent completed orders
[POS]:    HTTP layer - market endpoints (signed like every CoinSpot call)
[UPDATE]: When adding new market endpoints or changing parameters
*/

use serde_json::Value;

use crate::http::client::require;
use crate::http::{CoinspotClient, Result};
use crate::types::RequestParams;

impl CoinspotClient {
    /// List the open orders on the exchange for a coin
    ///
    /// POST orders {cointype}
    pub async fn list_open_orders(&self, cointype: &str) -> Result<Value> {
        require("cointype", cointype)?;
        let params = RequestParams::new().with("cointype", cointype);
        self.request("orders", params).await
    }

    /// List the last 1000 completed orders on the exchange for a coin
    ///
    /// POST orders/history {cointype}
    pub async fn order_history(&self, cointype: &str) -> Result<Value> {
        require("cointype", cointype)?;
        let params = RequestParams::new().with("cointype", cointype);
        self.request("orders/history", params).await
    }
}
