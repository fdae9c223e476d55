mod core;
mod messages;
mod poller;
mod view_state;

pub use core::ChartEngine;
pub use messages::{FetchOutcome, FetchReason, FetchRequest};
pub use poller::PollingController;
pub use view_state::{Applied, ViewState};
