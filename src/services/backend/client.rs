//! reqwest implementation of the backend contract.

use super::{ChartDataProvider, FetchError};
use crate::models::{ChartPayload, Selection};
use async_trait::async_trait;
use tracing::debug;
use url::Url;

/// HTTP client for the dashboard backend.
///
/// Holds a base URL so tests can point it at a mock server via
/// [`HttpBackendClient::with_client`].
#[derive(Debug, Clone)]
pub struct HttpBackendClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpBackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| FetchError::MalformedPayload(format!("invalid base url: {e}")))?;
        url.set_path(path);
        Ok(url)
    }

    /// GET `path` with `params`, check the status, decode the body as `T`.
    ///
    /// The body is read as text first so a decode failure can be reported as
    /// `MalformedPayload` rather than folded into the transport error.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let url = self.endpoint(path)?;
        let resp = self.http.get(url).query(params).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Backend { status });
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| FetchError::MalformedPayload(e.to_string()))
    }
}

#[async_trait]
impl ChartDataProvider for HttpBackendClient {
    async fn tokens(&self, exchange: &str) -> Result<Vec<String>, FetchError> {
        debug!(exchange, "loading token list");
        self.get_json("/api/tokens", &[("exchange", exchange)])
            .await
    }

    async fn chart_data(&self, selection: &Selection) -> Result<ChartPayload, FetchError> {
        // The orchestrator never hands us an incomplete selection; an unset
        // timeframe here would be its bug, not the backend's.
        let timeframe = selection
            .timeframe
            .map(|tf| tf.as_str())
            .unwrap_or_default();
        debug!(selection = %selection, "loading chart data");
        self.get_json(
            "/api/chart-data",
            &[
                ("exchange", selection.exchange.as_str()),
                ("symbol", selection.symbol.as_str()),
                ("timeframe", timeframe),
            ],
        )
        .await
    }
}
