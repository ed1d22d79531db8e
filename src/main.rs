//! Dashboard CLI: one selection/fetch/render cycle against the configured
//! backend, drawn on the headless logging surface.

use marketscope::config::Config;
use marketscope::core::{Dashboard, LogSurface, RenderOutcome};
use marketscope::logging::init_logging;
use marketscope::services::HttpBackendClient;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    init_logging();

    let config = Config::from_env();
    info!(backend = %config.api_base_url, "starting dashboard");

    let provider = Arc::new(HttpBackendClient::new(config.api_base_url.clone()));
    let dashboard = Dashboard::new(provider, LogSurface::new());

    dashboard.select_exchange(&config.default_exchange).await;
    match dashboard.tokens().await {
        Ok(tokens) => info!(count = tokens.len(), "token list loaded"),
        Err(err) => error!(%err, "token list unavailable"),
    }
    dashboard.select_timeframe(config.default_timeframe).await;

    match dashboard.select_symbol(&config.default_symbol).await {
        RenderOutcome::Rendered(stats) => {
            info!(
                overlays = stats.overlays,
                markers = stats.markers,
                "initial chart drawn"
            );
        }
        RenderOutcome::Failed(cause) => error!(cause = %cause, "initial chart failed"),
        outcome => info!(?outcome, "nothing rendered"),
    }
}
