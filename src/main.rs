#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use std::path::PathBuf;

use clap::Parser;
use eframe::NativeOptions;

use pairboard::{AnalyticsClient, Cli, run_app};

const APP_STATE_PATH: &str = "pairboard_state.json";

fn main() -> eframe::Result {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Build the backend client (the worker thread owns the runtime)
    let client = match AnalyticsClient::new(&args.backend_url) {
        Ok(client) => client,
        Err(e) => {
            log::error!("Failed to build HTTP client: {:#}", e);
            std::process::exit(1);
        }
    };
    log::info!("Polling {} every {}s", client.base_url(), args.poll_secs);

    // D. Run Native App
    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(APP_STATE_PATH)),
        ..Default::default()
    };

    let poll_secs = args.poll_secs;
    eframe::run_native(
        "Pairboard - Pair Trading Analytics",
        options,
        Box::new(move |cc| Ok(run_app(cc, client, poll_secs))),
    )
}
