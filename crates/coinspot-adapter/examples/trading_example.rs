/*
[INPUT]:  API key/secret from COINSPOT_KEY / COINSPOT_SECRET
[OUTPUT]: Balances, open orders, and an optional buy order
[POS]:    Examples - trading operations
[UPDATE]: When trading API changes
*/

use coinspot_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: account and trading calls against the live API
///
/// Set COINSPOT_PLACE_ORDER=1 to actually place a (tiny, far-from-market) buy.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("coinspot_adapter=debug")),
        )
        .init();

    println!("=== CoinSpot Trading Example ===\n");

    let (Ok(key), Ok(secret)) = (std::env::var("COINSPOT_KEY"), std::env::var("COINSPOT_SECRET"))
    else {
        eprintln!("Set COINSPOT_KEY and COINSPOT_SECRET to run this example");
        return;
    };

    let client = match CoinspotClient::new(ClientConfig::new(DEFAULT_BASE_URL, key, secret)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created");

    match client.my_balances().await {
        Ok(balances) => println!("\nBalances: {balances}"),
        Err(e) => eprintln!("\nBalances failed: {e}"),
    }

    match client.my_open_orders().await {
        Ok(orders) => println!("\nOpen orders: {orders}"),
        Err(e) => eprintln!("\nOpen orders failed: {e}"),
    }

    if std::env::var("COINSPOT_PLACE_ORDER").as_deref() != Ok("1") {
        println!("\n✓ Trading example complete (no order placed)");
        return;
    }

    let (amount, rate) = match ("0.0001".parse::<Amount>(), "1000".parse::<Rate>()) {
        (Ok(amount), Ok(rate)) => (amount, rate),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("Invalid order values: {e}");
            return;
        }
    };

    match client.place_buy_order("BTC", amount, rate).await {
        Ok(response) => println!("\nBuy order placed: {response}"),
        Err(CoinspotError::NonOkResponse { status, reason }) => {
            eprintln!("\nExchange answered {status} {reason}")
        }
        Err(e) => eprintln!("\nBuy order failed: {e}"),
    }

    println!("\n✓ Trading example complete");
}
