use std::time::Duration;

use crate::domain::RefreshInterval;

pub struct PollingConfig {
    /// Interval used at mount when nothing else is requested.
    pub default_interval: RefreshInterval,
    /// Added to the repaint delay so the frame that checks the timer lands after the deadline.
    pub repaint_slack: Duration,
}

pub const POLLING: PollingConfig = PollingConfig {
    default_interval: RefreshInterval::M5,
    repaint_slack: Duration::from_millis(50),
};
