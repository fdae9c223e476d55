use std::sync::Arc;

use crate::domain::Series;

/// Outcome of the most recent fetch as the renderer sees it.
/// Failures carry no detail: the UI only ever says the fetch failed.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchStatus {
    #[default]
    Loading,
    Ready(Arc<Series>),
    Failed,
}

impl FetchStatus {
    /// The series to plot. Only a `Ready` status has one.
    pub fn series(&self) -> Option<&Series> {
        match self {
            Self::Ready(series) => Some(series),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }
}
