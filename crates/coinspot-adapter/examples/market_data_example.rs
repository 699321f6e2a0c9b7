/*
[INPUT]:  Coin short name (first CLI argument, default BTC) and API credentials
[OUTPUT]: Exchange open orders and recent completed orders
[POS]:    Examples - market data retrieval
[UPDATE]: When market endpoints change
*/

use coinspot_adapter::*;

#[tokio::main]
async fn main() {
    println!("=== CoinSpot Market Data Example ===\n");

    let cointype = std::env::args().nth(1).unwrap_or_else(|| "BTC".to_string());
    let key = std::env::var("COINSPOT_KEY").unwrap_or_default();
    let secret = std::env::var("COINSPOT_SECRET").unwrap_or_default();

    let client = match CoinspotClient::new(ClientConfig::new(DEFAULT_BASE_URL, key, secret)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    match client.list_open_orders(&cointype).await {
        Ok(orders) => println!("Open {cointype} orders: {orders}"),
        Err(e) => eprintln!("Open orders failed: {e}"),
    }

    match client.order_history(&cointype).await {
        Ok(history) => println!("\nCompleted {cointype} orders: {history}"),
        Err(e) => eprintln!("Order history failed: {e}"),
    }
}
