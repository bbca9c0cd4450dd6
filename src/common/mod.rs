pub mod client;
pub mod config;
pub mod errors;
pub mod exchange;
pub mod market;
pub mod utils;

// Re-export
pub use client::create_http_client;
pub use config::{ClientConfig, MissingSymbolPolicy};
pub use errors::MarketDataError;
pub use exchange::{ExchangeTrait, MarketDataTrait};
pub use market::{Order, OrderBook, Ticker};
pub use utils::{deserialize_flexible_f64, find_mid_price, parse_f64, validate_symbol};
