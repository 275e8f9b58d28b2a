use serde::{Deserialize, Serialize};

/// One OHLCV-style observation for a single asset, as delivered by the
/// analytics backend. Timestamps are ISO-8601 strings and sort
/// lexicographically in chronological order.
///
/// A fresh poll replaces the whole bar sequence; bars are never patched in
/// place once received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    #[serde(default)]
    pub ts: String,
    /// Last traded price. Positive by contract with the backend.
    #[serde(default)]
    pub price: f64,
    /// Traded volume over the bar interval.
    #[serde(default)]
    pub volume: f64,
}

impl Bar {
    pub fn new(ts: impl Into<String>, price: f64, volume: f64) -> Self {
        Bar {
            ts: ts.into(),
            price,
            volume,
        }
    }
}
