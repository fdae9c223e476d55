use std::sync::Arc;

use anyhow::Result;

use crate::domain::{Selection, Series};

/// A request to fetch the series for one selection.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    /// Monotonic per engine. Lets late completions be recognised.
    pub seq: u64,
    pub selection: Selection,
    pub reason: FetchReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchReason {
    /// First activation or a selection change
    Restart,
    Tick,
    Manual,
}

/// The result returned by the dispatcher
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub seq: u64,
    pub selection: Selection,
    pub duration_ms: u128,
    /// The error text is for the log only; the UI collapses every failure into one message.
    pub result: Result<Arc<Series>, String>,
}

impl FetchOutcome {
    pub fn new(request: FetchRequest, result: Result<Series>, duration_ms: u128) -> Self {
        Self {
            seq: request.seq,
            selection: request.selection,
            duration_ms,
            result: result.map(Arc::new).map_err(|e| format!("{:#}", e)),
        }
    }
}
