//! UI-facing glue: one selection/fetch/render cycle, no implicit globals.

use crate::core::fetch::FetchOrchestrator;
use crate::core::overlay::OverlayRegistry;
use crate::core::render::{RenderMapper, RenderStats, RenderSurface};
use crate::core::selection::SelectionController;
use crate::models::{Selection, Timeframe};
use crate::services::backend::{ChartDataProvider, FetchError};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Result of one refresh cycle, delivered to the render listener for the
/// user-visible cases.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    /// The payload was mapped onto the surface.
    Rendered(RenderStats),
    /// The fetch failed; the previously rendered chart is untouched.
    Failed(String),
    /// Selection incomplete; no fetch was issued. Silent.
    NotReady,
    /// Identical re-selection; nothing to do. Silent.
    Unchanged,
    /// A newer selection superseded this cycle. Silent.
    Superseded,
}

type RenderListener = Box<dyn Fn(&RenderOutcome) + Send + Sync>;

struct RenderState<S> {
    surface: S,
    registry: OverlayRegistry,
}

/// Owns every piece of chart state and drives the
/// selection → fetch → teardown → rebuild cycle.
///
/// All methods take `&self`; overlapping refreshes are resolved by the fetch
/// sequence numbers, with the check repeated once the surface lock is held.
pub struct Dashboard<S: RenderSurface> {
    provider: Arc<dyn ChartDataProvider>,
    selection: Mutex<SelectionController>,
    fetcher: FetchOrchestrator,
    render: Mutex<RenderState<S>>,
    listener: Mutex<Option<RenderListener>>,
}

impl<S: RenderSurface> Dashboard<S> {
    pub fn new(provider: Arc<dyn ChartDataProvider>, surface: S) -> Self {
        Self {
            fetcher: FetchOrchestrator::new(provider.clone()),
            provider,
            selection: Mutex::new(SelectionController::new()),
            render: Mutex::new(RenderState {
                surface,
                registry: OverlayRegistry::new(),
            }),
            listener: Mutex::new(None),
        }
    }

    pub async fn selection(&self) -> Selection {
        self.selection.lock().await.current().clone()
    }

    /// Install the render-outcome callback. Only `Rendered` and `Failed`
    /// are delivered; the silent outcomes never reach the UI.
    pub async fn on_render(&self, listener: impl Fn(&RenderOutcome) + Send + Sync + 'static) {
        *self.listener.lock().await = Some(Box::new(listener));
    }

    pub async fn select_exchange(&self, name: &str) -> RenderOutcome {
        if !self.selection.lock().await.set_exchange(name) {
            return RenderOutcome::Unchanged;
        }
        self.refresh().await
    }

    pub async fn select_symbol(&self, name: &str) -> RenderOutcome {
        if !self.selection.lock().await.set_symbol(name) {
            return RenderOutcome::Unchanged;
        }
        self.refresh().await
    }

    pub async fn select_timeframe(&self, timeframe: Timeframe) -> RenderOutcome {
        if !self.selection.lock().await.set_timeframe(timeframe) {
            return RenderOutcome::Unchanged;
        }
        self.refresh().await
    }

    /// Token list for the currently selected exchange; empty when no
    /// exchange is chosen yet.
    pub async fn tokens(&self) -> Result<Vec<String>, FetchError> {
        let exchange = self.selection.lock().await.current().exchange.clone();
        if exchange.is_empty() {
            return Ok(Vec::new());
        }
        self.provider.tokens(&exchange).await
    }

    /// Fetch for the current selection and redraw.
    ///
    /// Stale results never reach the surface: the orchestrator drops them at
    /// resolution, and the sequence is re-checked after the surface lock is
    /// acquired in case a newer selection landed while waiting.
    pub async fn refresh(&self) -> RenderOutcome {
        let selection = self.selection().await;
        let Some(request) = self.fetcher.begin(&selection) else {
            return RenderOutcome::NotReady;
        };
        let sequence = request.sequence;

        let outcome = match self.fetcher.run(request).await {
            None => RenderOutcome::Superseded,
            Some(Err(err)) => {
                warn!(selection = %selection, %err, "chart fetch failed");
                RenderOutcome::Failed(err.to_string())
            }
            Some(Ok(payload)) => {
                let mut state = self.render.lock().await;
                if !self.fetcher.is_current(sequence) {
                    RenderOutcome::Superseded
                } else {
                    let state = &mut *state;
                    let stats =
                        RenderMapper::render(&mut state.surface, &mut state.registry, &payload);
                    info!(
                        selection = %selection,
                        candles = payload.ohlc.len(),
                        overlays = stats.overlays,
                        markers = stats.markers,
                        "chart rendered"
                    );
                    RenderOutcome::Rendered(stats)
                }
            }
        };

        self.emit(&outcome).await;
        outcome
    }

    async fn emit(&self, outcome: &RenderOutcome) {
        if !matches!(
            outcome,
            RenderOutcome::Rendered(_) | RenderOutcome::Failed(_)
        ) {
            return;
        }
        if let Some(listener) = self.listener.lock().await.as_ref() {
            listener(outcome);
        }
    }
}
