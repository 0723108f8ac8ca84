use std::env;

/// Default Binance REST endpoint.
pub const DEFAULT_BINANCE_BASE_URL: &str = "https://api.binance.com";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Base URL of the Binance REST API (overridable for testing against a mirror).
    pub binance_base_url: String,
    /// Timeout for a single candle fetch, in seconds.
    pub fetch_timeout_secs: u64,
    /// Number of candles requested per prediction.
    pub candle_limit: u32,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            binance_base_url: env::var("BINANCE_BASE_URL")
                .ok()
                .filter(|url| !url.is_empty())
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BINANCE_BASE_URL.to_string()),
            fetch_timeout_secs: env::var("FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v| *v > 0)
                .unwrap_or(10),
            candle_limit: env::var("CANDLE_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v| *v > 0)
                .unwrap_or(200),
        }
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            binance_base_url: DEFAULT_BINANCE_BASE_URL.to_string(),
            fetch_timeout_secs: 10,
            candle_limit: 200,
        }
    }
}
