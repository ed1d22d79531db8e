//! Ownership of every transient visual handle created in a render cycle.

use thiserror::Error;

/// Opaque reference to a visual object created on the render surface:
/// an auxiliary line series, a price line, or the marker-set token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayHandle(pub u64);

/// `register` was called while the previous cycle's handles were still live.
///
/// This is a programming-contract violation in the render path, not a
/// runtime or user error: teardown must fully precede rebuild.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("overlay registered before the prior cycle was cleared")]
pub struct OverlayContractError;

/// Tracks the overlay handles of the current render cycle so they can be
/// torn down atomically at the start of the next one.
///
/// Cycle protocol: [`clear`](Self::clear) drains the prior cycle's handles
/// and opens a rebuild window; [`register`](Self::register) is only legal
/// inside that window; [`commit`](Self::commit) closes it. After any
/// completed cycle the registry holds exactly the handles created during
/// that cycle.
#[derive(Debug, Default)]
pub struct OverlayRegistry {
    handles: Vec<OverlayHandle>,
    rebuilding: bool,
}

impl OverlayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain all live handles and open a rebuild window. The caller must
    /// remove every returned handle from the surface before creating new
    /// ones.
    pub fn clear(&mut self) -> Vec<OverlayHandle> {
        self.rebuilding = true;
        std::mem::take(&mut self.handles)
    }

    /// Record a handle created during the current rebuild window.
    pub fn register(&mut self, handle: OverlayHandle) -> Result<(), OverlayContractError> {
        if !self.rebuilding {
            return Err(OverlayContractError);
        }
        self.handles.push(handle);
        Ok(())
    }

    /// Close the rebuild window. Further registration requires a new
    /// [`clear`](Self::clear).
    pub fn commit(&mut self) {
        self.rebuilding = false;
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn handles(&self) -> &[OverlayHandle] {
        &self.handles
    }
}
