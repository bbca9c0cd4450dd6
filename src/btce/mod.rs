mod types;

use crate::btce::types::{
    BtceDepthResponse, BtceErrorResponse, BtceInfoResponse, BtceTickerResponse, build_orders,
};
use crate::common::{
    ClientConfig, ExchangeTrait, MarketDataError, MarketDataTrait, MissingSymbolPolicy, OrderBook,
    Ticker, create_http_client, validate_symbol,
};
use async_trait::async_trait;
use serde::Deserialize;

/// Client for the BTC-e public API (v3).
///
/// Holds only immutable configuration and a `reqwest::Client`, so a single
/// instance can serve concurrent calls from many tasks.
pub struct BtcE {
    config: ClientConfig,
    api_base: String,
    client: reqwest::Client,
}

impl BtcE {
    /// Client for the default host with a 5 second timeout.
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialized, like `reqwest::Client::new`.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default()).expect("Failed to create HTTP client")
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, MarketDataError> {
        config.validate()?;
        let client = create_http_client(&config)?;
        Ok(Self::build(config, client))
    }

    /// Use a caller-supplied transport, e.g. one pointed at a mock endpoint.
    ///
    /// `config.timeout` is not applied here; the supplied client's own timeout wins.
    pub fn with_client(
        config: ClientConfig,
        client: reqwest::Client,
    ) -> Result<Self, MarketDataError> {
        config.validate()?;
        Ok(Self::build(config, client))
    }

    fn build(config: ClientConfig, client: reqwest::Client) -> Self {
        Self {
            api_base: config.api_base(),
            config,
            client,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GET the endpoint as raw JSON and surface `{"success":0,"error":...}` as [`MarketDataError::Api`].
    async fn get_checked(&self, endpoint: &str) -> Result<serde_json::Value, MarketDataError> {
        let response: serde_json::Value = self.get(endpoint).await?;

        if response.get("success").is_some() {
            if let Ok(envelope) = BtceErrorResponse::deserialize(&response) {
                if envelope.success == 0 {
                    let msg = envelope
                        .error
                        .unwrap_or_else(|| "unknown error".to_string());
                    tracing::warn!(endpoint, error = %msg, "BTC-e API error");
                    return Err(MarketDataError::Api(format!("BTC-e API error: {}", msg)));
                }
            }
        }

        Ok(response)
    }

    fn on_missing_symbol<T: Default>(&self, symbol: &str) -> Result<T, MarketDataError> {
        match self.config.missing_symbol {
            MissingSymbolPolicy::Error => Err(MarketDataError::NotFound(symbol.to_string())),
            MissingSymbolPolicy::ZeroValue => {
                tracing::warn!(symbol, "symbol missing from response, returning default");
                Ok(T::default())
            }
        }
    }
}

impl Default for BtcE {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExchangeTrait for BtcE {
    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn client(&self) -> &reqwest::Client {
        &self.client
    }

    fn exchange_name(&self) -> &str {
        "BTC-e"
    }

    async fn health_check(&self) -> Result<(), MarketDataError> {
        let response = self.get_checked("info").await?;
        let info: BtceInfoResponse = serde_json::from_value(response)?;

        tracing::debug!(
            server_time = info.server_time,
            pairs = info.pairs.len(),
            "BTC-e info"
        );

        if info.server_time <= 0 {
            return Err(MarketDataError::Api(format!(
                "BTC-e API error: invalid server_time {}",
                info.server_time
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl MarketDataTrait for BtcE {
    async fn fetch_ticker(&self, symbol: &str) -> Result<Ticker, MarketDataError> {
        validate_symbol(symbol)?;

        let endpoint = format!("ticker/{}", symbol);
        let response = self.get_checked(&endpoint).await?;
        let mut tickers: BtceTickerResponse = serde_json::from_value(response)?;

        match tickers.remove(symbol) {
            Some(raw) => {
                let ticker = Ticker::from(raw);
                tracing::debug!(
                    symbol,
                    last = ticker.last_trade,
                    bid = ticker.bid,
                    ask = ticker.ask,
                    "ticker"
                );
                Ok(ticker)
            }
            None => self.on_missing_symbol(symbol),
        }
    }

    async fn fetch_order_book(&self, symbol: &str) -> Result<OrderBook, MarketDataError> {
        validate_symbol(symbol)?;

        let endpoint = format!("depth/{}?limit={}", symbol, self.config.depth_limit);
        let response = self.get_checked(&endpoint).await?;
        let mut books: BtceDepthResponse = serde_json::from_value(response)?;

        match books.remove(symbol) {
            Some(depth) => {
                let book = OrderBook {
                    asks: build_orders(depth.asks),
                    bids: build_orders(depth.bids),
                };
                tracing::debug!(
                    symbol,
                    asks = book.asks.len(),
                    bids = book.bids.len(),
                    "order book"
                );
                Ok(book)
            }
            None => self.on_missing_symbol(symbol),
        }
    }
}
