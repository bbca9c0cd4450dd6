// src/common/utils.rs
use crate::common::MarketDataError;
use serde::{Deserialize, Deserializer};

// Parse a string to a f64, return a MarketDataError if the parsing fails
pub fn parse_f64(value: &str, field_name: &str) -> Result<f64, MarketDataError> {
    value.trim().parse::<f64>().map_err(|_| {
        MarketDataError::Decode(serde::de::Error::custom(format!(
            "invalid {} format: {:?}",
            field_name, value
        )))
    })
}

// Find mid price between bid and ask price
pub fn find_mid_price(bid_price: f64, ask_price: f64) -> f64 {
    (bid_price + ask_price) / 2.0
}

/// Trading-pair symbols go into the URL path verbatim, so only `[A-Za-z0-9_]` is accepted.
pub fn validate_symbol(symbol: &str) -> Result<(), MarketDataError> {
    if symbol.is_empty() {
        return Err(MarketDataError::InvalidSymbol(
            "Symbol cannot be empty".to_string(),
        ));
    }
    if !symbol
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(MarketDataError::InvalidSymbol(format!(
            "Symbol contains unsupported characters: {}",
            symbol
        )));
    }
    Ok(())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    String(String),
}

/// Accepts `234.1` as well as `"234.1"`.
pub fn deserialize_flexible_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => {
            parse_f64(&s, "numeric string").map_err(serde::de::Error::custom)
        }
    }
}
