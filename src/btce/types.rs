use std::collections::HashMap;

use crate::common::{Order, Ticker, deserialize_flexible_f64};
use serde::Deserialize;

/// `GET ticker/{pair}` returns `{"btc_usd": {...}}`, one entry per requested pair.
pub type BtceTickerResponse = HashMap<String, BtceTicker>;

/// `GET depth/{pair}?limit=N` returns `{"btc_usd": {"asks": [...], "bids": [...]}}`.
pub type BtceDepthResponse = HashMap<String, BtceDepth>;

/// Only the fields we map; `high`, `low`, `avg`, `vol`, `vol_cur` and `updated` are ignored.
#[derive(Debug, Deserialize)]
pub struct BtceTicker {
    #[serde(deserialize_with = "deserialize_flexible_f64")]
    pub last: f64,
    #[serde(deserialize_with = "deserialize_flexible_f64")]
    pub buy: f64,
    #[serde(deserialize_with = "deserialize_flexible_f64")]
    pub sell: f64,
}

#[derive(Debug, Deserialize)]
pub struct BtceDepth {
    #[serde(default)]
    pub asks: Vec<BtceLevel>,
    #[serde(default)]
    pub bids: Vec<BtceLevel>,
}

/// Positional `[price, quantity]` pair.
#[derive(Debug, Deserialize)]
pub struct BtceLevel(
    #[serde(deserialize_with = "deserialize_flexible_f64")] pub f64,
    #[serde(deserialize_with = "deserialize_flexible_f64")] pub f64,
);

/// Error envelope: `{"success": 0, "error": "Invalid pair name: xyz_abc"}`
#[derive(Debug, Deserialize)]
pub struct BtceErrorResponse {
    pub success: i64,
    #[serde(default)]
    pub error: Option<String>,
}

/// `GET info`
#[derive(Debug, Deserialize)]
pub struct BtceInfoResponse {
    pub server_time: i64,
    #[serde(default)]
    pub pairs: HashMap<String, serde_json::Value>,
}

impl From<BtceTicker> for Ticker {
    fn from(raw: BtceTicker) -> Self {
        Ticker {
            last_trade: raw.last,
            bid: raw.buy,
            ask: raw.sell,
        }
    }
}

impl From<BtceLevel> for Order {
    fn from(BtceLevel(price, quantity): BtceLevel) -> Self {
        Order { price, quantity }
    }
}

/// Keeps the exchange's level order.
pub fn build_orders(levels: Vec<BtceLevel>) -> Vec<Order> {
    levels.into_iter().map(Order::from).collect()
}
