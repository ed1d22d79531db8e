//! marketscope: client-side state machine for a real-time charting
//! dashboard.
//!
//! The backend computes everything (candles, oscillator, structural breaks,
//! Fibonacci levels); this crate keeps what is *displayed* consistent with
//! the *latest* user selection: one source of truth for the selection,
//! sequenced fetches that drop superseded results, and a render cycle that
//! tears down every transient overlay before rebuilding from the new
//! payload.

pub mod config;
pub mod core;
pub mod logging;
pub mod models;
pub mod services;
