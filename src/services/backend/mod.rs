//! Backend HTTP contract: token lists and precomputed chart data.

pub mod client;

pub use client::HttpBackendClient;

use crate::models::{ChartPayload, Selection};
use async_trait::async_trait;
use thiserror::Error;

/// Failure of a single backend fetch. Never retried automatically; the
/// caller decides whether and what to report.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection-level failure: refused, reset, DNS, timeout.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    /// The backend answered with a non-success status.
    #[error("backend returned HTTP {status}")]
    Backend { status: reqwest::StatusCode },
    /// The body was not the JSON shape we expect.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

/// Data source for the dashboard.
///
/// `HttpBackendClient` is the production implementation; tests substitute
/// their own.
#[async_trait]
pub trait ChartDataProvider: Send + Sync {
    /// Symbols tradable on `exchange`.
    async fn tokens(&self, exchange: &str) -> Result<Vec<String>, FetchError>;

    /// Full chart payload for a complete selection.
    async fn chart_data(&self, selection: &Selection) -> Result<ChartPayload, FetchError>;
}
