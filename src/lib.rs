#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use data::AnalyticsClient;
pub use domain::{Bar, Symbol, Timeframe};
pub use engine::DashEngine;
pub use models::{DashboardParams, DashboardSnapshot};
pub use ui::DashboardApp;

use std::time::Duration;

use clap::Parser;

use crate::config::BACKEND;

// CLI argument parsing
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the analytics backend
    #[arg(long, default_value = BACKEND.default_base_url)]
    pub backend_url: String,

    /// Seconds between poll cycles
    #[arg(long, default_value_t = BACKEND.poll.period_secs)]
    pub poll_secs: u64,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext<'_>,
    client: AnalyticsClient,
    poll_secs: u64,
) -> Box<dyn eframe::App> {
    let app = ui::DashboardApp::new(cc, client, Duration::from_secs(poll_secs));
    Box::new(app)
}
