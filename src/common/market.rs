use crate::common::find_mid_price;
use serde::{Deserialize, Serialize};

/// Last trade, best bid and best ask for a trading pair at fetch time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Ticker {
    pub last_trade: f64,
    pub bid: f64,
    pub ask: f64,
}

impl Ticker {
    pub fn mid_price(&self) -> f64 {
        find_mid_price(self.bid, self.ask)
    }
}

/// A single resting order or an aggregated price level.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Order {
    pub price: f64,
    pub quantity: f64,
}

/// Ask and bid levels in the order the exchange returned them (best price first).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderBook {
    pub asks: Vec<Order>,
    pub bids: Vec<Order>,
}

impl OrderBook {
    pub fn best_ask(&self) -> Option<&Order> {
        self.asks.first()
    }

    pub fn best_bid(&self) -> Option<&Order> {
        self.bids.first()
    }

    /// `None` unless both sides have at least one level.
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(find_mid_price(bid.price, ask.price)),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.asks.is_empty() && self.bids.is_empty()
    }
}
