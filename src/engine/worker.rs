use std::sync::mpsc::{Receiver, Sender};
use std::thread;
use std::time::Instant;

use crate::data::AnalyticsClient;
use crate::models::{DashboardParams, DashboardSnapshot};

use super::messages::{JobRequest, JobResult};

/// Run the engine's jobs on a dedicated thread that owns the async runtime.
/// Each job is spawned as its own task rather than awaited inline, so a
/// fresh poll cycle can start while a superseded batch is still in flight;
/// the engine sorts out which result wins.
pub fn spawn_worker_thread(
    client: AnalyticsClient,
    rx: Receiver<JobRequest>,
    tx: Sender<JobResult>,
) {
    thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("Failed to create Tokio runtime");

        while let Ok(req) = rx.recv() {
            let client = client.clone();
            let tx = tx.clone();

            match req {
                JobRequest::Poll { cycle, params } => {
                    rt.spawn(async move {
                        let start = Instant::now();
                        let result = run_poll_cycle(&client, &params).await;
                        // If the receiver is gone the app is shutting down
                        let _ = tx.send(JobResult::Poll {
                            cycle,
                            params,
                            duration_ms: start.elapsed().as_millis(),
                            result,
                        });
                    });
                }
                JobRequest::CreateAlert { draft } => {
                    rt.spawn(async move {
                        let result = client
                            .create_alert(&draft)
                            .await
                            .map_err(|e| format!("{e:#}"));
                        let _ = tx.send(JobResult::AlertCreated(result));
                    });
                }
            }
        }
    });
}

/// Fan out the five requests, join them all, then decide. `tokio::join!` is
/// deliberate: a failed request does not short-circuit the others, but a
/// single failure discards the whole batch so the published snapshot can
/// never mix data from different cycles.
async fn run_poll_cycle(
    client: &AnalyticsClient,
    params: &DashboardParams,
) -> Result<DashboardSnapshot, String> {
    let (bars_y, bars_x, pair, series, alerts) = tokio::join!(
        client.fetch_bars(params.symbol_y, params.timeframe),
        client.fetch_bars(params.symbol_x, params.timeframe),
        client.fetch_pair_metrics(params.symbol_y, params.symbol_x, params.window),
        client.fetch_pair_series(params.symbol_y, params.symbol_x, params.window),
        client.fetch_alerts(),
    );

    Ok(DashboardSnapshot {
        bars_y: bars_y.map_err(|e| format!("{e:#}"))?,
        bars_x: bars_x.map_err(|e| format!("{e:#}"))?,
        pair: pair.map_err(|e| format!("{e:#}"))?,
        series: series.map_err(|e| format!("{e:#}"))?,
        alerts: alerts.map_err(|e| format!("{e:#}"))?,
    })
}
