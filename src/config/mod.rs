//! Environment-based configuration.

use crate::models::Timeframe;
use std::str::FromStr;

/// Exchanges offered in the selector, as served by the backend.
pub const SUPPORTED_EXCHANGES: [&str; 8] = [
    "Binance", "Bitget", "Bybit", "MEXC", "KuCoin", "OKX", "Gate.io", "Huobi",
];

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

/// Deployment environment name, used to pick the log format.
pub fn get_environment() -> String {
    std::env::var("DASHBOARD_ENV").unwrap_or_else(|_| "development".to_string())
}

/// Runtime configuration, loaded from the environment with sane defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the chart-data backend.
    pub api_base_url: String,
    pub default_exchange: String,
    pub default_symbol: String,
    pub default_timeframe: Timeframe,
}

impl Config {
    /// Read configuration from the environment, loading `.env` first if
    /// present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let default_timeframe = std::env::var("CHART_DEFAULT_TIMEFRAME")
            .ok()
            .and_then(|s| Timeframe::from_str(&s).ok())
            .unwrap_or(Timeframe::H4);
        Self {
            api_base_url: std::env::var("CHART_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            default_exchange: std::env::var("CHART_DEFAULT_EXCHANGE")
                .unwrap_or_else(|_| "Binance".to_string()),
            default_symbol: std::env::var("CHART_DEFAULT_SYMBOL")
                .unwrap_or_else(|_| "BTC/USDT".to_string()),
            default_timeframe,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            default_exchange: "Binance".to_string(),
            default_symbol: "BTC/USDT".to_string(),
            default_timeframe: Timeframe::H4,
        }
    }
}
