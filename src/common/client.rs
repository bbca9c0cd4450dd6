use crate::common::{ClientConfig, MarketDataError};

pub fn create_http_client(config: &ClientConfig) -> Result<reqwest::Client, MarketDataError> {
    Ok(reqwest::Client::builder()
        .timeout(config.timeout)
        .user_agent(config.user_agent.as_str())
        .build()?)
}
