//! Backend-specific configuration constants and types.

/// Default values for the REST client.
pub struct ClientDefaults {
    /// Per-request timeout. Kept shorter than the poll period so a hung
    /// request cannot stack cycles behind it.
    pub timeout_ms: u64,
}

/// Settings for the periodic refresh loop.
pub struct PollDefaults {
    /// Seconds between poll cycles.
    pub period_secs: u64,
}

/// The Master Configuration Struct
pub struct BackendConfig {
    /// Base URL of the analytics service when none is given on the CLI.
    pub default_base_url: &'static str,
    pub client: ClientDefaults,
    pub poll: PollDefaults,
}

pub const BACKEND: BackendConfig = BackendConfig {
    default_base_url: "http://127.0.0.1:8000",
    client: ClientDefaults { timeout_ms: 4000 },
    poll: PollDefaults { period_secs: 5 },
};
