//! Render surface abstraction and the payload-to-surface mapping.

use crate::core::overlay::{OverlayHandle, OverlayRegistry};
use crate::models::{BreakDirection, Candle, ChartPayload, SeriesPoint};
use thiserror::Error;
use tracing::{debug, error, warn};

/// Decimal places shown on the current-price axis label.
pub const PRICE_LABEL_DECIMALS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Volume,
    Oscillator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneKind {
    Price,
    Volume,
    Oscillator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dotted,
}

/// A two-point auxiliary line series, horizontal at `price`.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLineSpec {
    pub start_time: i64,
    pub end_time: i64,
    pub price: f64,
    pub color: String,
}

/// A horizontal price line on the primary pane.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceLineSpec {
    pub price: f64,
    pub color: String,
    pub style: LineStyle,
    /// Axis label text; `None` hides the label.
    pub label: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerPosition {
    AboveBar,
    BelowBar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerShape {
    ArrowUp,
    ArrowDown,
}

/// A point marker attached to the primary series.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub time: i64,
    pub position: MarkerPosition,
    pub shape: MarkerShape,
    pub color: String,
    pub text: String,
}

/// The surface refused to create a single overlay. Scoped to that overlay
/// only; the rest of the cycle proceeds.
#[derive(Debug, Error)]
#[error("overlay creation failed: {0}")]
pub struct SurfaceError(pub String);

/// Stable interface over the charting library's primitive operations.
///
/// One instance owns the single chart surface; only the render mapper
/// mutates it.
pub trait RenderSurface: Send {
    fn create_overlay_line(&mut self, spec: OverlayLineSpec) -> Result<OverlayHandle, SurfaceError>;
    fn create_price_line(&mut self, spec: PriceLineSpec) -> Result<OverlayHandle, SurfaceError>;
    fn remove_overlay(&mut self, handle: OverlayHandle);
    fn set_candles(&mut self, candles: &[Candle]);
    fn set_series(&mut self, kind: SeriesKind, points: &[SeriesPoint]);
    /// Replace the primary series' marker set in full.
    fn set_markers(&mut self, markers: &[Marker]);
    fn set_pane_visible(&mut self, pane: PaneKind, visible: bool);
    fn fit_visible_range(&mut self);
}

/// What one render cycle put on the surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub overlays: usize,
    pub markers: usize,
}

/// Maps a chart payload onto the surface, tearing down the previous cycle
/// first.
pub struct RenderMapper;

impl RenderMapper {
    /// Execute one full render cycle. Step order is a correctness
    /// requirement: teardown strictly precedes rebuild, and pane visibility
    /// is set explicitly every cycle so no stale state survives.
    pub fn render(
        surface: &mut dyn RenderSurface,
        registry: &mut OverlayRegistry,
        payload: &ChartPayload,
    ) -> RenderStats {
        // 1. Teardown: remove every handle of the prior cycle, reset markers.
        for handle in registry.clear() {
            surface.remove_overlay(handle);
        }
        surface.set_markers(&[]);

        // 2. Empty OHLC is the canonical no-data terminal state, not an error.
        if payload.ohlc.is_empty() {
            debug!("empty payload; clearing primary series");
            surface.set_candles(&[]);
            surface.set_series(SeriesKind::Volume, &[]);
            surface.set_series(SeriesKind::Oscillator, &[]);
            registry.commit();
            return RenderStats::default();
        }

        // 3. Primary data.
        surface.set_candles(&payload.ohlc);
        surface.set_series(SeriesKind::Volume, &payload.volume);

        // 4. Oscillator pane: visibility follows data presence, every cycle.
        if payload.oscillator.is_empty() {
            surface.set_pane_visible(PaneKind::Oscillator, false);
            surface.set_series(SeriesKind::Oscillator, &[]);
        } else {
            surface.set_pane_visible(PaneKind::Oscillator, true);
            surface.set_series(SeriesKind::Oscillator, &payload.oscillator);
        }

        // 5. Structural breaks: one line + one marker each; the marker set is
        // applied in a single call after the loop.
        let mut markers = Vec::with_capacity(payload.breaks.len());
        for event in &payload.breaks {
            let spec = OverlayLineSpec {
                start_time: event.start_time,
                end_time: event.end_time,
                price: event.price,
                color: event.color.clone(),
            };
            match surface.create_overlay_line(spec) {
                Ok(handle) => Self::track(registry, handle),
                Err(err) => {
                    warn!(kind = %event.kind, %err, "skipping break overlay");
                    continue;
                }
            }
            let (position, shape) = match event.direction {
                BreakDirection::Bullish => (MarkerPosition::BelowBar, MarkerShape::ArrowUp),
                BreakDirection::Bearish => (MarkerPosition::AboveBar, MarkerShape::ArrowDown),
            };
            markers.push(Marker {
                time: event.start_time,
                position,
                shape,
                color: event.color.clone(),
                text: event.kind.clone(),
            });
        }
        surface.set_markers(&markers);

        // 6. Fibonacci levels.
        for level in &payload.fibonacci_levels {
            let spec = PriceLineSpec {
                price: level.price,
                color: level.color.clone(),
                style: LineStyle::Dotted,
                label: Some(level.ratio.to_string()),
            };
            match surface.create_price_line(spec) {
                Ok(handle) => Self::track(registry, handle),
                Err(err) => warn!(ratio = level.ratio, %err, "skipping fibonacci level"),
            }
        }

        // 7. Current-price line.
        if let Some(current) = &payload.current_price {
            let spec = PriceLineSpec {
                price: current.price,
                color: current.color.clone(),
                style: LineStyle::Dotted,
                label: Some(format!("{:.1$}", current.price, PRICE_LABEL_DECIMALS)),
            };
            match surface.create_price_line(spec) {
                Ok(handle) => Self::track(registry, handle),
                Err(err) => warn!(%err, "skipping current-price line"),
            }
        }

        // 8. Fit the visible range to the new data; the cycle is complete.
        surface.fit_visible_range();
        registry.commit();

        RenderStats {
            overlays: registry.len(),
            markers: markers.len(),
        }
    }

    fn track(registry: &mut OverlayRegistry, handle: OverlayHandle) {
        // Unreachable after the clear in step 1; kept as a hard signal for
        // render-path bugs.
        if let Err(err) = registry.register(handle) {
            error!(%err, ?handle, "overlay registry contract violated");
        }
    }
}

/// Headless surface that logs every primitive call.
///
/// Stands in for a real charting adapter in the CLI binary; handle ids are
/// assigned from a local counter.
#[derive(Debug, Default)]
pub struct LogSurface {
    next_handle: u64,
}

impl LogSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn next(&mut self) -> OverlayHandle {
        self.next_handle += 1;
        OverlayHandle(self.next_handle)
    }
}

impl RenderSurface for LogSurface {
    fn create_overlay_line(&mut self, spec: OverlayLineSpec) -> Result<OverlayHandle, SurfaceError> {
        let handle = self.next();
        debug!(?handle, ?spec, "create overlay line");
        Ok(handle)
    }

    fn create_price_line(&mut self, spec: PriceLineSpec) -> Result<OverlayHandle, SurfaceError> {
        let handle = self.next();
        debug!(?handle, ?spec, "create price line");
        Ok(handle)
    }

    fn remove_overlay(&mut self, handle: OverlayHandle) {
        debug!(?handle, "remove overlay");
    }

    fn set_candles(&mut self, candles: &[Candle]) {
        debug!(count = candles.len(), "set candle data");
    }

    fn set_series(&mut self, kind: SeriesKind, points: &[SeriesPoint]) {
        debug!(?kind, count = points.len(), "set series data");
    }

    fn set_markers(&mut self, markers: &[Marker]) {
        debug!(count = markers.len(), "set markers");
    }

    fn set_pane_visible(&mut self, pane: PaneKind, visible: bool) {
        debug!(?pane, visible, "set pane visibility");
    }

    fn fit_visible_range(&mut self) {
        debug!("fit visible range");
    }
}
