// HTTP access to the analytics backend
pub mod client;

// Re-export commonly used types
pub use client::AnalyticsClient;
