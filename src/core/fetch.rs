//! Sequenced, supersede-on-new-request chart-data fetching.

use crate::models::{ChartPayload, Selection};
use crate::services::backend::{ChartDataProvider, FetchError};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

/// One fetch attempt, keyed to the selection it was issued for.
///
/// The sequence number is the sole staleness mechanism: it is assigned at
/// creation and compared against the orchestrator's counter at resolution.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub selection: Selection,
    pub sequence: u64,
}

/// Issues backend fetches and guarantees that only the result of the most
/// recently issued request ever reaches the caller.
///
/// Superseded fetches are not canceled at the transport level; they run to
/// completion and are dropped at the result boundary. That is enough, since
/// a read carries no side effects.
pub struct FetchOrchestrator {
    provider: Arc<dyn ChartDataProvider>,
    latest: AtomicU64,
}

impl FetchOrchestrator {
    pub fn new(provider: Arc<dyn ChartDataProvider>) -> Self {
        Self {
            provider,
            latest: AtomicU64::new(0),
        }
    }

    /// Create a sequenced request for `selection`, superseding any request
    /// issued earlier. Returns `None`, silently, if the selection is
    /// incomplete.
    pub fn begin(&self, selection: &Selection) -> Option<FetchRequest> {
        if !selection.is_complete() {
            trace!(selection = %selection, "selection incomplete; fetch not issued");
            return None;
        }
        let sequence = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        Some(FetchRequest {
            selection: selection.clone(),
            sequence,
        })
    }

    /// Whether `sequence` still identifies the most recently issued request.
    pub fn is_current(&self, sequence: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == sequence
    }

    /// Execute `request`. On completion, success or failure alike, the
    /// result is discarded (`None`) if a newer request was issued in the
    /// meantime. No retries.
    pub async fn run(&self, request: FetchRequest) -> Option<Result<ChartPayload, FetchError>> {
        let FetchRequest {
            selection,
            sequence,
        } = request;
        let result = self.provider.chart_data(&selection).await;
        if !self.is_current(sequence) {
            debug!(
                sequence,
                selection = %selection,
                "discarding superseded fetch result"
            );
            return None;
        }
        Some(result)
    }

    /// Convenience: [`Self::begin`] + [`Self::run`]. `None` means either an
    /// incomplete selection (nothing issued) or a superseded result.
    pub async fn request(
        &self,
        selection: &Selection,
    ) -> Option<Result<ChartPayload, FetchError>> {
        let request = self.begin(selection)?;
        self.run(request).await
    }
}
