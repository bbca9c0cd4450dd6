use std::time::Duration;

use crate::common::MarketDataError;

pub const DEFAULT_HOST: &str = "https://btc-e.com";
pub const DEFAULT_API_PREFIX: &str = "/api/3";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
/// Price levels requested per side from the depth endpoint.
pub const DEFAULT_DEPTH_LIMIT: u32 = 5;

/// What to return when the response envelope has no entry for the requested symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingSymbolPolicy {
    /// Fail with [`MarketDataError::NotFound`].
    #[default]
    Error,
    /// Return a zero-valued ticker or an empty order book.
    ZeroValue,
}

/// Client configuration. Fixed once the client is constructed.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub host: String,
    pub api_prefix: String,
    pub timeout: Duration,
    pub depth_limit: u32,
    pub missing_symbol: MissingSymbolPolicy,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            timeout: DEFAULT_TIMEOUT,
            depth_limit: DEFAULT_DEPTH_LIMIT,
            missing_symbol: MissingSymbolPolicy::default(),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the host, e.g. `http://127.0.0.1:8080`. A trailing `/` is dropped.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_prefix = prefix.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_depth_limit(mut self, limit: u32) -> Self {
        self.depth_limit = limit;
        self
    }

    pub fn with_missing_symbol(mut self, policy: MissingSymbolPolicy) -> Self {
        self.missing_symbol = policy;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// `{host}{prefix}`, the base every resource path is appended to.
    pub fn api_base(&self) -> String {
        format!("{}{}", self.host, self.api_prefix)
    }

    pub fn validate(&self) -> Result<(), MarketDataError> {
        if self.host.is_empty() {
            return Err(MarketDataError::Config("host cannot be empty".to_string()));
        }
        if !(self.host.starts_with("http://") || self.host.starts_with("https://")) {
            return Err(MarketDataError::Config(format!(
                "host must start with http:// or https://, got {}",
                self.host
            )));
        }
        if !self.api_prefix.starts_with('/') {
            return Err(MarketDataError::Config(format!(
                "api prefix must start with '/', got {}",
                self.api_prefix
            )));
        }
        if self.timeout.is_zero() {
            return Err(MarketDataError::Config("timeout must be non-zero".to_string()));
        }
        if self.depth_limit == 0 {
            return Err(MarketDataError::Config(
                "depth limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
