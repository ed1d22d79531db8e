//! Wire model of the backend's chart-data response.
//!
//! The backend serves everything already computed; this client only decodes.
//! Optional sections may be omitted or sent as empty arrays; both decode to
//! empty here, and unknown keys are ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One OHLC candle, timestamped in unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Candle {
    /// Candle timestamp as a UTC datetime, if in range.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.time, 0)
    }
}

/// A single value point for the volume and oscillator series.
///
/// The backend colors each volume bar by candle direction; the oscillator
/// series carries no color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub time: i64,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakDirection {
    Bullish,
    Bearish,
}

impl Default for BreakDirection {
    // Older backend variants omit the field; lean bullish rather than drop
    // the whole payload.
    fn default() -> Self {
        BreakDirection::Bullish
    }
}

/// A structural break (BOS/CHoCH) annotation.
///
/// Each break maps to exactly one two-point overlay line from
/// `(start_time, price)` to `(end_time, price)` plus one marker at
/// `start_time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakEvent {
    #[serde(rename = "startTime")]
    pub start_time: i64,
    #[serde(rename = "endTime")]
    pub end_time: i64,
    pub price: f64,
    #[serde(default)]
    pub direction: BreakDirection,
    #[serde(rename = "type")]
    pub kind: String,
    pub color: String,
}

/// A Fibonacci retracement level. Maps to one horizontal price line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiboLevel {
    pub ratio: f64,
    pub price: f64,
    pub color: String,
}

/// Last-price line spec, colored by the closing candle's direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentPrice {
    pub price: f64,
    pub color: String,
}

/// Decoded `/api/chart-data` response.
///
/// Immutable once received; consumed by one render cycle and dropped.
/// `oscillator` and `fibonacci_levels` accept the original backend's `rsi`
/// and `fibos` spellings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartPayload {
    #[serde(default)]
    pub ohlc: Vec<Candle>,
    #[serde(default)]
    pub volume: Vec<SeriesPoint>,
    #[serde(default, alias = "rsi")]
    pub oscillator: Vec<SeriesPoint>,
    #[serde(default)]
    pub breaks: Vec<BreakEvent>,
    #[serde(default, rename = "fibonacciLevels", alias = "fibos")]
    pub fibonacci_levels: Vec<FiboLevel>,
    #[serde(default, rename = "currentPrice", skip_serializing_if = "Option::is_none")]
    pub current_price: Option<CurrentPrice>,
}

impl ChartPayload {
    /// The canonical "no data" terminal state: nothing to draw at all.
    pub fn is_empty(&self) -> bool {
        self.ohlc.is_empty()
    }
}
