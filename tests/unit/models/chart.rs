//! Unit tests for the chart-data wire model

use marketscope::models::{BreakDirection, ChartPayload};
use serde_json::json;

#[test]
fn decodes_the_original_backend_spelling() {
    // The legacy backend emits rsi/fibos and no break direction.
    let body = json!({
        "ohlc": [
            {"time": 1700000000, "open": 100.0, "high": 102.0, "low": 99.0, "close": 101.0}
        ],
        "volume": [
            {"time": 1700000000, "value": 1234.0, "color": "rgba(0, 150, 136, 0.8)"}
        ],
        "rsi": [
            {"time": 1700000000, "value": 55.2}
        ],
        "breaks": [
            {"price": 101.5, "startTime": 1700000000, "endTime": 1700014400,
             "type": "BOS", "color": "lime"}
        ],
        "fibos": [
            {"ratio": 0.618, "price": 100.3, "color": "rgba(255, 105, 180, 0.5)",
             "startTime": 1700000000, "endTime": 1700014400}
        ],
        "currentPrice": {"price": 101.0, "color": "green"}
    });

    let payload: ChartPayload = serde_json::from_value(body).expect("decode");
    assert_eq!(payload.ohlc.len(), 1);
    assert_eq!(payload.volume[0].color.as_deref(), Some("rgba(0, 150, 136, 0.8)"));
    assert_eq!(payload.oscillator.len(), 1);
    assert_eq!(payload.breaks[0].kind, "BOS");
    assert_eq!(payload.breaks[0].direction, BreakDirection::Bullish);
    assert_eq!(payload.fibonacci_levels[0].ratio, 0.618);
    assert_eq!(payload.current_price.as_ref().map(|p| p.price), Some(101.0));
}

#[test]
fn decodes_canonical_field_names() {
    let body = json!({
        "ohlc": [],
        "volume": [],
        "oscillator": [{"time": 1, "value": 42.0}],
        "fibonacciLevels": [{"ratio": 0.5, "price": 10.0, "color": "orange"}],
        "breaks": [
            {"price": 9.0, "startTime": 1, "endTime": 2, "direction": "bearish",
             "type": "CHoCH", "color": "red"}
        ]
    });

    let payload: ChartPayload = serde_json::from_value(body).expect("decode");
    assert_eq!(payload.oscillator[0].value, 42.0);
    assert_eq!(payload.fibonacci_levels[0].price, 10.0);
    assert_eq!(payload.breaks[0].direction, BreakDirection::Bearish);
}

#[test]
fn omitted_optional_sections_decode_as_empty() {
    let body = json!({
        "ohlc": [
            {"time": 1, "open": 1.0, "high": 1.0, "low": 1.0, "close": 1.0}
        ],
        "volume": []
    });

    let payload: ChartPayload = serde_json::from_value(body).expect("decode");
    assert!(payload.oscillator.is_empty());
    assert!(payload.breaks.is_empty());
    assert!(payload.fibonacci_levels.is_empty());
    assert!(payload.current_price.is_none());
    assert!(!payload.is_empty());
}

#[test]
fn empty_ohlc_is_the_no_data_state() {
    let payload: ChartPayload = serde_json::from_value(json!({})).expect("decode");
    assert!(payload.is_empty());
}

#[test]
fn unknown_keys_are_ignored() {
    let body = json!({
        "ohlc": [],
        "volume": [],
        "fvgs": [{"startTime": 1, "endTime": 2, "top": 3.0, "bottom": 2.0}],
        "serverTime": 1700000000
    });

    let payload: ChartPayload = serde_json::from_value(body).expect("decode");
    assert!(payload.is_empty());
}

#[test]
fn candle_timestamp_converts_to_datetime() {
    let payload: ChartPayload = serde_json::from_value(json!({
        "ohlc": [{"time": 1700000000, "open": 1.0, "high": 1.0, "low": 1.0, "close": 1.0}]
    }))
    .expect("decode");

    let dt = payload.ohlc[0].datetime().expect("in range");
    assert_eq!(dt.timestamp(), 1700000000);
}
