//! Selection tuple and timeframe enum shared across the dashboard layers.

use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Chart timeframe offered by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Timeframe {
    /// 1 hour
    H1,
    /// 4 hours
    H4,
    /// 1 day
    D1,
    /// 3 days
    D3,
    /// 1 week
    W1,
}

impl Timeframe {
    /// All timeframes, in selector order.
    pub const ALL: [Timeframe; 5] = [
        Timeframe::H1,
        Timeframe::H4,
        Timeframe::D1,
        Timeframe::D3,
        Timeframe::W1,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Timeframe::H1 => "1h",
            Timeframe::H4 => "4h",
            Timeframe::D1 => "1d",
            Timeframe::D3 => "3d",
            Timeframe::W1 => "1w",
        }
    }
}

impl Display for Timeframe {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1h" => Ok(Timeframe::H1),
            "4h" => Ok(Timeframe::H4),
            "1d" => Ok(Timeframe::D1),
            "3d" => Ok(Timeframe::D3),
            "1w" => Ok(Timeframe::W1),
            _ => Err(format!("Invalid timeframe: {s}")),
        }
    }
}

impl TryFrom<String> for Timeframe {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Timeframe::from_str(&s)
    }
}

impl From<Timeframe> for String {
    fn from(timeframe: Timeframe) -> Self {
        timeframe.to_string()
    }
}

/// The user's current (exchange, symbol, timeframe) choice.
///
/// Only the `SelectionController` mutates this; fetch and render code read it.
/// A freshly constructed selection has every field unset and is "not ready".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub exchange: String,
    pub symbol: String,
    pub timeframe: Option<Timeframe>,
}

impl Selection {
    pub fn new(exchange: impl Into<String>, symbol: impl Into<String>, timeframe: Timeframe) -> Self {
        Self {
            exchange: exchange.into(),
            symbol: symbol.into(),
            timeframe: Some(timeframe),
        }
    }

    /// A fetch may only be issued when all three fields are set.
    pub fn is_complete(&self) -> bool {
        !self.exchange.is_empty() && !self.symbol.is_empty() && self.timeframe.is_some()
    }
}

impl Display for Selection {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let tf = self.timeframe.map(Timeframe::as_str).unwrap_or("-");
        write!(f, "{}/{}/{}", self.exchange, self.symbol, tf)
    }
}
