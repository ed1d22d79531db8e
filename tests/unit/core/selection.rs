//! Unit tests for the selection controller

use marketscope::core::SelectionController;
use marketscope::models::{Selection, Timeframe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[test]
fn starts_empty_and_not_ready() {
    let controller = SelectionController::new();
    assert_eq!(controller.current(), &Selection::default());
    assert!(!controller.current().is_complete());
}

#[test]
fn setters_report_whether_anything_changed() {
    let mut controller = SelectionController::new();
    assert!(controller.set_exchange("Binance"));
    assert!(!controller.set_exchange("Binance"));
    assert!(controller.set_symbol("BTC/USDT"));
    assert!(!controller.set_symbol("BTC/USDT"));
    assert!(controller.set_timeframe(Timeframe::H4));
    assert!(!controller.set_timeframe(Timeframe::H4));
    assert!(controller.current().is_complete());
}

#[test]
fn identical_reselection_does_not_notify() {
    let mut controller = SelectionController::new();
    let notifications = Arc::new(AtomicUsize::new(0));
    let seen = notifications.clone();
    controller.on_change(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });

    controller.set_exchange("Binance");
    controller.set_exchange("Binance");
    controller.set_timeframe(Timeframe::H1);
    controller.set_timeframe(Timeframe::H1);

    assert_eq!(notifications.load(Ordering::SeqCst), 2);
}

#[test]
fn listeners_receive_the_new_selection() {
    let mut controller = SelectionController::new();
    let observed = Arc::new(Mutex::new(Vec::<Selection>::new()));
    let sink = observed.clone();
    controller.on_change(move |selection| {
        sink.lock().expect("observed").push(selection.clone());
    });

    controller.set_exchange("Bybit");
    controller.set_symbol("ETH/USDT");

    let observed = observed.lock().expect("observed");
    assert_eq!(observed.len(), 2);
    assert_eq!(observed[0].exchange, "Bybit");
    assert!(observed[0].symbol.is_empty());
    assert_eq!(observed[1].symbol, "ETH/USDT");
}

#[test]
fn changing_exchange_clears_the_symbol() {
    let mut controller = SelectionController::new();
    controller.set_exchange("Binance");
    controller.set_symbol("BTC/USDT");
    controller.set_timeframe(Timeframe::H4);

    assert!(controller.set_exchange("Bybit"));

    let current = controller.current();
    assert_eq!(current.exchange, "Bybit");
    assert!(current.symbol.is_empty());
    assert_eq!(current.timeframe, Some(Timeframe::H4));
    assert!(!current.is_complete());
}
