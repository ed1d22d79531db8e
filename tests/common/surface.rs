//! Recording render surface shared by unit and integration tests.

use marketscope::core::{
    Marker, OverlayHandle, OverlayLineSpec, PaneKind, PriceLineSpec, RenderSurface, SeriesKind,
    SurfaceError,
};
use marketscope::models::{Candle, SeriesPoint};
use std::sync::{Arc, Mutex};

/// Everything the surface has been told, inspectable after the fact.
///
/// Each test target reads its own subset of the recorded calls.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct SurfaceState {
    next_handle: u64,
    /// Handles currently attached to the surface.
    pub live: Vec<OverlayHandle>,
    pub removed: Vec<OverlayHandle>,
    pub candles: Vec<Candle>,
    pub volume: Vec<SeriesPoint>,
    pub oscillator: Vec<SeriesPoint>,
    pub markers: Vec<Marker>,
    /// Size of every set_markers call, in order.
    pub marker_calls: Vec<usize>,
    pub pane_calls: Vec<(PaneKind, bool)>,
    pub overlay_lines: Vec<(OverlayHandle, OverlayLineSpec)>,
    pub price_lines: Vec<(OverlayHandle, PriceLineSpec)>,
    /// Coarse operation log for ordering assertions.
    pub ops: Vec<String>,
    pub fit_calls: usize,
    /// Number of upcoming create_overlay_line calls to reject.
    pub fail_overlay_lines: usize,
}

impl SurfaceState {
    pub fn oscillator_visible(&self) -> Option<bool> {
        self.pane_calls
            .iter()
            .rev()
            .find(|(pane, _)| *pane == PaneKind::Oscillator)
            .map(|(_, visible)| *visible)
    }
}

/// `RenderSurface` double that records every call into shared state, so the
/// test can keep inspecting it after the dashboard takes ownership.
#[derive(Clone, Default)]
pub struct RecordingSurface {
    pub state: Arc<Mutex<SurfaceState>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn state(&self) -> Arc<Mutex<SurfaceState>> {
        self.state.clone()
    }
}

impl RenderSurface for RecordingSurface {
    fn create_overlay_line(&mut self, spec: OverlayLineSpec) -> Result<OverlayHandle, SurfaceError> {
        let mut state = self.state.lock().expect("surface state");
        if state.fail_overlay_lines > 0 {
            state.fail_overlay_lines -= 1;
            return Err(SurfaceError("injected failure".to_string()));
        }
        state.next_handle += 1;
        let handle = OverlayHandle(state.next_handle);
        state.live.push(handle);
        state.overlay_lines.push((handle, spec));
        state.ops.push("create_overlay_line".to_string());
        Ok(handle)
    }

    fn create_price_line(&mut self, spec: PriceLineSpec) -> Result<OverlayHandle, SurfaceError> {
        let mut state = self.state.lock().expect("surface state");
        state.next_handle += 1;
        let handle = OverlayHandle(state.next_handle);
        state.live.push(handle);
        state.price_lines.push((handle, spec));
        state.ops.push("create_price_line".to_string());
        Ok(handle)
    }

    fn remove_overlay(&mut self, handle: OverlayHandle) {
        let mut state = self.state.lock().expect("surface state");
        state.live.retain(|h| *h != handle);
        state.removed.push(handle);
        state.ops.push("remove_overlay".to_string());
    }

    fn set_candles(&mut self, candles: &[Candle]) {
        let mut state = self.state.lock().expect("surface state");
        state.candles = candles.to_vec();
        state.ops.push("set_candles".to_string());
    }

    fn set_series(&mut self, kind: SeriesKind, points: &[SeriesPoint]) {
        let mut state = self.state.lock().expect("surface state");
        match kind {
            SeriesKind::Volume => state.volume = points.to_vec(),
            SeriesKind::Oscillator => state.oscillator = points.to_vec(),
        }
        state.ops.push(format!("set_series:{kind:?}"));
    }

    fn set_markers(&mut self, markers: &[Marker]) {
        let mut state = self.state.lock().expect("surface state");
        state.markers = markers.to_vec();
        state.marker_calls.push(markers.len());
        state.ops.push("set_markers".to_string());
    }

    fn set_pane_visible(&mut self, pane: PaneKind, visible: bool) {
        let mut state = self.state.lock().expect("surface state");
        state.pane_calls.push((pane, visible));
        state.ops.push(format!("set_pane_visible:{pane:?}"));
    }

    fn fit_visible_range(&mut self) {
        let mut state = self.state.lock().expect("surface state");
        state.fit_calls += 1;
        state.ops.push("fit_visible_range".to_string());
    }
}
