use crate::common::{MarketDataError, OrderBook, Ticker};
use async_trait::async_trait;

// Common exchange trait definition
#[async_trait]
pub trait ExchangeTrait: Send + Sync {
    // Exchange specific methods
    fn api_base(&self) -> &str;
    fn client(&self) -> &reqwest::Client;
    fn exchange_name(&self) -> &str;

    // Default implementations

    /// GET `{api_base}/{endpoint}` and decode the JSON body.
    ///
    /// The body is read to the end before decoding, so the connection goes back
    /// to the pool (or is dropped) on every path out of this function.
    async fn get<T: for<'de> serde::Deserialize<'de>>(
        &self,
        endpoint: &str,
    ) -> Result<T, MarketDataError> {
        let url = format!("{}/{}", self.api_base(), endpoint);
        tracing::debug!(exchange = self.exchange_name(), %url, "GET");

        let response = self.client().get(&url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&body).into_owned();
            tracing::warn!(
                exchange = self.exchange_name(),
                %url,
                %status,
                "non-success response"
            );
            return Err(MarketDataError::HttpStatus { status, body });
        }

        Ok(serde_json::from_slice(&body)?)
    }

    // Trait methods
    async fn health_check(&self) -> Result<(), MarketDataError>;
}

/// Public market-data reads for a single trading pair.
#[async_trait]
pub trait MarketDataTrait: ExchangeTrait {
    async fn fetch_ticker(&self, symbol: &str) -> Result<Ticker, MarketDataError>;

    async fn fetch_order_book(&self, symbol: &str) -> Result<OrderBook, MarketDataError>;
}
