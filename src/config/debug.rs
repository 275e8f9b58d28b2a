//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so
//! debug builds stay quiet unless a specific subsystem is under inspection.

pub struct DebugFlags {
    /// Emit one line per poll cycle (start, publish, discard reasons).
    pub print_poll_cycles: bool,
    /// Emit UI interaction logs (parameter changes, manual actions).
    pub print_ui_interactions: bool,
    /// Emit alert submission lifecycle logs.
    pub print_alert_flow: bool,
    /// Emit details of UI state serialization/deserialization.
    pub print_state_serde: bool,
    /// Emit shutdown messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_poll_cycles: false,
    print_ui_interactions: true,
    print_alert_flow: false,
    print_state_serde: false,
    print_shutdown: false,
};
