//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Every request sent and every outcome received.
    pub log_fetches: bool,

    /// Timer restarts, cancellations and ticks.
    pub log_polling: bool,

    /// Anything about handling the Selection struct
    pub log_selection: bool,

    /// Activate trace_time macro (for scope-level timing)
    pub log_performance: bool,
}

pub const DF: LogFlags = LogFlags {
    log_fetches: true,
    log_selection: true,

    log_polling: false,
    log_performance: false,
};
