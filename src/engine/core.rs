use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::{Duration, Instant};

use crate::config::BACKEND;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::data::AnalyticsClient;
use crate::models::{AlertDraft, DashboardParams, DashboardSnapshot};

use super::messages::{JobRequest, JobResult};
use super::worker;

/// Where the refresh loop currently is. `Fetching` tracks the newest batch;
/// an older overlapping batch is resolved purely through the publish guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    Idle,
    Fetching { cycle: u64 },
}

/// Owns the dashboard's reactive parameters and the published snapshot, and
/// drives the periodic fan-out/fan-in refresh against the backend.
///
/// Pumped from the egui frame loop: `update()` drains worker results and
/// starts cycles, never blocking a frame. All five data sources are published
/// together or not at all; a batch that fails, or that was issued under
/// superseded parameters, or that trails an already-published newer batch,
/// is discarded and the last-known-good snapshot stays visible.
pub struct DashEngine {
    /// THE FRONT BUFFER. The UI reads this every frame; it is replaced
    /// wholesale by the publish step and appended to by the alert flow.
    snapshot: DashboardSnapshot,

    params: DashboardParams,
    state: PollState,

    /// Monotonic id handed to each batch; stale results carry an older one.
    cycle_seq: u64,
    last_published_cycle: u64,

    next_poll_at: Instant,
    poll_period: Duration,

    /// At-most-one alert submission in flight.
    alert_in_flight: bool,

    // Telemetry for the status bar
    last_error: Option<String>,
    last_cycle_ms: Option<u128>,

    /// Worker Communication
    job_tx: Sender<JobRequest>,
    result_rx: Receiver<JobResult>,
}

impl DashEngine {
    /// Initialize the engine and spawn the worker thread.
    pub fn new(client: AnalyticsClient, params: DashboardParams) -> Self {
        let (job_tx, job_rx) = channel::<JobRequest>();
        let (result_tx, result_rx) = channel::<JobResult>();

        worker::spawn_worker_thread(client, job_rx, result_tx);

        Self::from_channels(job_tx, result_rx, params)
    }

    /// Wire an engine to externally-owned channels. Tests drive the engine
    /// through this with hand-built results instead of a worker and network.
    fn from_channels(
        job_tx: Sender<JobRequest>,
        result_rx: Receiver<JobResult>,
        params: DashboardParams,
    ) -> Self {
        Self {
            snapshot: DashboardSnapshot::default(),
            params,
            state: PollState::Idle,
            cycle_seq: 0,
            last_published_cycle: 0,
            // Due immediately: the first update() starts the first cycle
            next_poll_at: Instant::now(),
            poll_period: Duration::from_secs(BACKEND.poll.period_secs),
            alert_in_flight: false,
            last_error: None,
            last_cycle_ms: None,
            job_tx,
            result_rx,
        }
    }

    pub fn with_poll_period(mut self, period: Duration) -> Self {
        self.poll_period = period;
        self
    }

    /// THE GAME LOOP.
    /// Returns TRUE while work is in flight, telling the UI to keep waking
    /// up (request_repaint).
    pub fn update(&mut self) -> bool {
        // 1. Drain results (swap the front buffer when one survives the guards)
        while let Ok(result) = self.result_rx.try_recv() {
            self.handle_job_result(result);
        }

        // 2. Fixed-period tick, re-armed unconditionally by start_cycle() so
        //    a transient outage self-heals on the next tick
        if Instant::now() >= self.next_poll_at {
            self.start_cycle();
        }

        self.is_fetching() || self.alert_in_flight
    }

    /// Adopt new parameters. A change to any query-driving field cancels the
    /// pending timer and starts a fresh cycle immediately; a superseded
    /// in-flight batch is discarded on arrival rather than aborted. A
    /// threshold-only change updates the next alert submission and nothing
    /// else.
    pub fn set_params(&mut self, params: DashboardParams) {
        let refetch = !self.params.same_query(&params);
        self.params = params;

        if refetch {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_poll_cycles {
                log::info!("Query parameters changed, restarting poll cycle");
            }
            self.start_cycle();
        }
    }

    /// Submit one alert for the current pair/window/threshold. No-op while a
    /// previous submission is still pending.
    pub fn submit_alert(&mut self) {
        if self.alert_in_flight {
            return;
        }

        let draft = AlertDraft {
            y: self.params.symbol_y,
            x: self.params.symbol_x,
            window: self.params.window,
            threshold: self.params.threshold,
        };

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_alert_flow {
            log::info!(
                "Submitting alert {}/{} window={} threshold={}",
                draft.y.code(),
                draft.x.code(),
                draft.window,
                draft.threshold
            );
        }

        self.alert_in_flight = true;
        let _ = self.job_tx.send(JobRequest::CreateAlert { draft });
    }

    // --- ACCESSORS FOR UI ---

    pub fn snapshot(&self) -> &DashboardSnapshot {
        &self.snapshot
    }

    pub fn params(&self) -> &DashboardParams {
        &self.params
    }

    pub fn is_fetching(&self) -> bool {
        matches!(self.state, PollState::Fetching { .. })
    }

    pub fn alert_in_flight(&self) -> bool {
        self.alert_in_flight
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn last_cycle_ms(&self) -> Option<u128> {
        self.last_cycle_ms
    }

    pub fn published_cycle(&self) -> u64 {
        self.last_published_cycle
    }

    /// How long the UI can sleep before the next tick is due.
    pub fn until_next_poll(&self) -> Duration {
        self.next_poll_at.saturating_duration_since(Instant::now())
    }

    // --- INTERNAL LOGIC ---

    fn start_cycle(&mut self) {
        self.cycle_seq += 1;
        let cycle = self.cycle_seq;
        self.state = PollState::Fetching { cycle };
        self.next_poll_at = Instant::now() + self.poll_period;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_poll_cycles {
            log::info!("Poll cycle {} started", cycle);
        }

        // If the send fails the worker is gone (engine shutting down)
        let _ = self.job_tx.send(JobRequest::Poll {
            cycle,
            params: self.params.clone(),
        });
    }

    fn handle_job_result(&mut self, result: JobResult) {
        match result {
            JobResult::Poll {
                cycle,
                params,
                duration_ms,
                result,
            } => self.handle_poll_result(cycle, params, duration_ms, result),
            JobResult::AlertCreated(result) => self.handle_alert_created(result),
        }
    }

    fn handle_poll_result(
        &mut self,
        cycle: u64,
        params: DashboardParams,
        duration_ms: u128,
        result: Result<DashboardSnapshot, String>,
    ) {
        // Leave Fetching only when the newest batch settles; an older
        // overlapping batch falls through to the guards below.
        if self.state == (PollState::Fetching { cycle }) {
            self.state = PollState::Idle;
        }

        // Guard (a): issued under parameters the operator has since replaced
        if !params.same_query(&self.params) {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_poll_cycles {
                log::info!("Poll cycle {} discarded: parameters changed mid-flight", cycle);
            }
            return;
        }

        // Guard (b): an even newer batch already published
        if cycle <= self.last_published_cycle {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_poll_cycles {
                log::info!("Poll cycle {} discarded: cycle {} already published", cycle, self.last_published_cycle);
            }
            return;
        }

        match result {
            Ok(snapshot) => {
                // THIS IS THE SWAP: all five sources move together
                self.snapshot = snapshot;
                self.last_published_cycle = cycle;
                self.last_cycle_ms = Some(duration_ms);
                self.last_error = None;

                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_poll_cycles {
                    log::info!("Poll cycle {} published in {}ms", cycle, duration_ms);
                }
            }
            Err(e) => {
                // Stale-but-consistent beats partial-and-inconsistent: log
                // and keep the last-known-good snapshot on screen
                log::warn!("Poll cycle {} failed, keeping previous data: {}", cycle, e);
                self.last_cycle_ms = Some(duration_ms);
                self.last_error = Some(e);
            }
        }
    }

    fn handle_alert_created(&mut self, result: Result<crate::models::Alert, String>) {
        self.alert_in_flight = false;

        match result {
            Ok(alert) => {
                // Optimistic, additive-only merge. De-dup by id in case the
                // service echoed an alert a refresh already delivered.
                let duplicate = alert.id.is_some()
                    && self.snapshot.alerts.iter().any(|a| a.id == alert.id);

                if !duplicate {
                    #[cfg(debug_assertions)]
                    if DEBUG_FLAGS.print_alert_flow {
                        log::info!("Alert created: {:?}", alert.id);
                    }
                    self.snapshot.alerts.push(alert);
                }
            }
            Err(e) => {
                // The operator can retry immediately; the list is untouched
                log::warn!("Alert creation failed: {}", e);
                self.last_error = Some(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Symbol;
    use crate::models::Alert;

    fn test_engine(
        params: DashboardParams,
    ) -> (DashEngine, Receiver<JobRequest>, Sender<JobResult>) {
        let (job_tx, job_rx) = channel::<JobRequest>();
        let (result_tx, result_rx) = channel::<JobResult>();
        let engine = DashEngine::from_channels(job_tx, result_rx, params);
        (engine, job_rx, result_tx)
    }

    fn poll_request(req: JobRequest) -> (u64, DashboardParams) {
        match req {
            JobRequest::Poll { cycle, params } => (cycle, params),
            other => panic!("expected a poll request, got {:?}", other),
        }
    }

    fn marked_snapshot(marker: &str) -> DashboardSnapshot {
        DashboardSnapshot {
            alerts: vec![Alert {
                id: Some(marker.to_string()),
                ..Alert::default()
            }],
            bars_y: vec![crate::domain::Bar::new("t1", 1.0, 0.0)],
            ..DashboardSnapshot::default()
        }
    }

    fn poll_result(
        cycle: u64,
        params: DashboardParams,
        result: Result<DashboardSnapshot, String>,
    ) -> JobResult {
        JobResult::Poll {
            cycle,
            params,
            duration_ms: 1,
            result,
        }
    }

    #[test]
    fn first_update_starts_a_cycle_immediately() {
        let (mut engine, job_rx, _result_tx) = test_engine(DashboardParams::default());

        assert!(engine.update());
        let (cycle, params) = poll_request(job_rx.try_recv().unwrap());
        assert_eq!(cycle, 1);
        assert_eq!(params, DashboardParams::default());
        assert!(engine.is_fetching());
    }

    #[test]
    fn stale_batch_never_overwrites_state_for_new_params() {
        let (mut engine, job_rx, result_tx) = test_engine(DashboardParams::default());
        engine.update();
        let (old_cycle, old_params) = poll_request(job_rx.try_recv().unwrap());

        // Operator switches symbols while the first batch is in flight
        let new_params = DashboardParams {
            symbol_y: Symbol::SolUsdt,
            ..DashboardParams::default()
        };
        engine.set_params(new_params.clone());
        let (new_cycle, _) = poll_request(job_rx.try_recv().unwrap());
        assert!(new_cycle > old_cycle);

        // The stale batch resolves late and must be discarded
        result_tx
            .send(poll_result(old_cycle, old_params, Ok(marked_snapshot("stale"))))
            .unwrap();
        engine.update();
        assert!(engine.snapshot().is_empty());
        assert_eq!(engine.published_cycle(), 0);

        // The batch for the new parameters publishes normally
        result_tx
            .send(poll_result(new_cycle, new_params, Ok(marked_snapshot("fresh"))))
            .unwrap();
        engine.update();
        assert_eq!(
            engine.snapshot().alerts[0].id.as_deref(),
            Some("fresh")
        );
        assert_eq!(engine.published_cycle(), new_cycle);
    }

    #[test]
    fn out_of_order_completion_keeps_the_newer_publish() {
        let params = DashboardParams::default();
        let (mut engine, job_rx, result_tx) = test_engine(params.clone());
        // Zero period: every update tick starts a new cycle
        engine = engine.with_poll_period(Duration::ZERO);

        engine.update();
        let (first, _) = poll_request(job_rx.try_recv().unwrap());
        engine.update();
        let (second, _) = poll_request(job_rx.try_recv().unwrap());
        assert!(second > first);

        // The newer batch completes first
        result_tx
            .send(poll_result(second, params.clone(), Ok(marked_snapshot("newer"))))
            .unwrap();
        engine.update();
        assert_eq!(engine.snapshot().alerts[0].id.as_deref(), Some("newer"));

        // The older batch limps in afterwards and is dropped
        result_tx
            .send(poll_result(first, params, Ok(marked_snapshot("older"))))
            .unwrap();
        engine.update();
        assert_eq!(engine.snapshot().alerts[0].id.as_deref(), Some("newer"));
    }

    #[test]
    fn failed_batch_leaves_previous_snapshot_untouched() {
        let params = DashboardParams::default();
        let (mut engine, job_rx, result_tx) = test_engine(params.clone());
        engine = engine.with_poll_period(Duration::ZERO);

        engine.update();
        let (first, _) = poll_request(job_rx.try_recv().unwrap());
        result_tx
            .send(poll_result(first, params.clone(), Ok(marked_snapshot("good"))))
            .unwrap();
        engine.update();
        let (second, _) = poll_request(job_rx.try_recv().unwrap());

        result_tx
            .send(poll_result(second, params, Err("connection refused".to_string())))
            .unwrap();
        engine.update();

        assert_eq!(engine.snapshot().alerts[0].id.as_deref(), Some("good"));
        assert_eq!(engine.last_error(), Some("connection refused"));
    }

    #[test]
    fn alert_submission_is_single_flight() {
        let (mut engine, job_rx, result_tx) = test_engine(DashboardParams::default());

        engine.submit_alert();
        assert!(engine.alert_in_flight());
        engine.submit_alert(); // ignored while pending

        let mut creates = 0;
        while let Ok(req) = job_rx.try_recv() {
            if matches!(req, JobRequest::CreateAlert { .. }) {
                creates += 1;
            }
        }
        assert_eq!(creates, 1);

        result_tx
            .send(JobResult::AlertCreated(Err("boom".to_string())))
            .unwrap();
        engine.update();
        assert!(!engine.alert_in_flight());
        // A failed creation leaves the visible list unchanged
        assert!(engine.snapshot().alerts.is_empty());
    }

    #[test]
    fn created_alert_is_appended_once() {
        let (mut engine, _job_rx, result_tx) = test_engine(DashboardParams::default());

        let alert = Alert {
            id: Some("a-1".to_string()),
            threshold: Some(1.5),
            ..Alert::default()
        };

        engine.submit_alert();
        result_tx
            .send(JobResult::AlertCreated(Ok(alert.clone())))
            .unwrap();
        engine.update();
        assert_eq!(engine.snapshot().alerts.len(), 1);

        // The same id coming back again (e.g. service echo) is not duplicated
        engine.submit_alert();
        result_tx.send(JobResult::AlertCreated(Ok(alert))).unwrap();
        engine.update();
        assert_eq!(engine.snapshot().alerts.len(), 1);
    }

    #[test]
    fn threshold_change_does_not_restart_the_cycle() {
        let (mut engine, job_rx, _result_tx) = test_engine(DashboardParams::default());
        engine.update();
        let _ = poll_request(job_rx.try_recv().unwrap());

        engine.set_params(DashboardParams {
            threshold: 3.0,
            ..DashboardParams::default()
        });

        assert!(job_rx.try_recv().is_err());
        assert_eq!(engine.params().threshold, 3.0);
    }
}
