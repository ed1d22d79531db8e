//! Single source of truth for the user's selection.

use crate::models::{Selection, Timeframe};

type Listener = Box<dyn Fn(&Selection) + Send + Sync>;

/// Owns the current (exchange, symbol, timeframe) tuple.
///
/// Setters notify registered listeners only when the value actually changed;
/// re-selecting the same value is a no-op. The controller never issues a
/// fetch itself; it only publishes changes.
#[derive(Default)]
pub struct SelectionController {
    current: Selection,
    listeners: Vec<Listener>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current selection. Empty fields mean "not ready"; callers must
    /// check [`Selection::is_complete`] before acting on it.
    pub fn current(&self) -> &Selection {
        &self.current
    }

    pub fn on_change(&mut self, listener: impl Fn(&Selection) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Set the exchange. Tokens are exchange-scoped, so this clears the
    /// symbol. Returns whether anything changed.
    pub fn set_exchange(&mut self, name: &str) -> bool {
        if self.current.exchange == name {
            return false;
        }
        self.current.exchange = name.to_string();
        self.current.symbol.clear();
        self.notify();
        true
    }

    pub fn set_symbol(&mut self, name: &str) -> bool {
        if self.current.symbol == name {
            return false;
        }
        self.current.symbol = name.to_string();
        self.notify();
        true
    }

    pub fn set_timeframe(&mut self, timeframe: Timeframe) -> bool {
        if self.current.timeframe == Some(timeframe) {
            return false;
        }
        self.current.timeframe = Some(timeframe);
        self.notify();
        true
    }

    fn notify(&self) {
        for listener in &self.listeners {
            listener(&self.current);
        }
    }
}
