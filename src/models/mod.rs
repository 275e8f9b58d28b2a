// Payload and state models for the dashboard
// These modules contain pure data shapes independent of UI/visualization

pub mod alert;
pub mod pair_metrics;
pub mod pair_series;
pub mod params;
pub mod snapshot;

// Re-export key types for convenience
pub use alert::{Alert, AlertDraft};
pub use pair_metrics::{AdfTest, PairMetrics, TradeDecision};
pub use pair_series::PairSeries;
pub use params::DashboardParams;
pub use snapshot::DashboardSnapshot;
