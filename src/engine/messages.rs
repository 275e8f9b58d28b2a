use crate::models::{Alert, AlertDraft, DashboardParams, DashboardSnapshot};

/// A unit of work for the background worker.
#[derive(Debug, Clone)]
pub enum JobRequest {
    /// One full poll cycle: all five endpoints fetched concurrently, joined.
    Poll {
        /// Monotonic batch id assigned by the engine.
        cycle: u64,
        /// The parameter snapshot the batch is issued under.
        params: DashboardParams,
    },
    /// One alert creation.
    CreateAlert { draft: AlertDraft },
}

/// The result returned by the worker.
#[derive(Debug)]
pub enum JobResult {
    Poll {
        cycle: u64,
        /// Echoed back so the engine can discard batches whose parameters no
        /// longer match the current selection.
        params: DashboardParams,
        duration_ms: u128,

        // Success: one complete, internally-consistent snapshot
        // Failure: the first transport error encountered in the batch
        result: Result<DashboardSnapshot, String>,
    },
    AlertCreated(Result<Alert, String>),
}
