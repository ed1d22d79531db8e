//! Core application primitives (selection, fetch, overlay, render)

pub mod dashboard;
pub mod fetch;
pub mod overlay;
pub mod render;
pub mod selection;

pub use dashboard::{Dashboard, RenderOutcome};
pub use fetch::{FetchOrchestrator, FetchRequest};
pub use overlay::{OverlayContractError, OverlayHandle, OverlayRegistry};
pub use render::{
    LineStyle, LogSurface, Marker, MarkerPosition, MarkerShape, OverlayLineSpec, PaneKind,
    PriceLineSpec, RenderMapper, RenderStats, RenderSurface, SeriesKind, SurfaceError,
    PRICE_LABEL_DECIMALS,
};
pub use selection::SelectionController;
