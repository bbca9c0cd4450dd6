//! `btce-market-rs`
//!
//! Fetch ticker summaries and order-book depth from the BTC-e public API (v3).
//!
//! ## Quickstart
//!
//! ```no_run
//! use btce_market_rs::{BtcE, MarketDataTrait};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), btce_market_rs::MarketDataError> {
//! let client = BtcE::new();
//!
//! let ticker = client.fetch_ticker("btc_usd").await?;
//! println!("last={} bid={} ask={}", ticker.last_trade, ticker.bid, ticker.ask);
//!
//! let book = client.fetch_order_book("btc_usd").await?;
//! for ask in &book.asks {
//!     println!("ask {} @ {}", ask.quantity, ask.price);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom host and transport
//!
//! ```no_run
//! use std::time::Duration;
//! use btce_market_rs::{BtcE, ClientConfig, MissingSymbolPolicy};
//!
//! # fn main() -> Result<(), btce_market_rs::MarketDataError> {
//! let http = reqwest::Client::builder()
//!     .timeout(Duration::from_secs(2))
//!     .build()?;
//! let config = ClientConfig::new()
//!     .with_host("http://127.0.0.1:8080")
//!     .with_missing_symbol(MissingSymbolPolicy::ZeroValue);
//! let client = BtcE::with_client(config, http)?;
//! # let _ = client;
//! # Ok(())
//! # }
//! ```

pub mod btce;
pub mod common;

pub use btce::BtcE;

pub use common::{
    ClientConfig, ExchangeTrait, MarketDataError, MarketDataTrait, MissingSymbolPolicy, Order,
    OrderBook, Ticker, find_mid_price, parse_f64,
};
