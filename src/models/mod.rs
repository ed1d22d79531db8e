//! Shared data models spanning the dashboard layers.

pub mod chart;
pub mod selection;

pub use chart::{
    BreakDirection, BreakEvent, Candle, ChartPayload, CurrentPrice, FiboLevel, SeriesPoint,
};
pub use selection::{Selection, Timeframe};
