#[derive(thiserror::Error, Debug)]
pub enum MarketDataError {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP status {status}: {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Parse error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("Symbol not found in response: {0}")]
    NotFound(String),

    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl MarketDataError {
    /// Network-level failures, including timeouts and non-2xx replies.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::HttpStatus { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}
