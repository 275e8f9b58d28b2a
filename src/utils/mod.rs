// Small pure helpers shared across the UI and engine
pub mod fmt;
pub mod time_utils;

pub use fmt::{SeverityTier, fmt_opt, stationarity_label, trend_color};
