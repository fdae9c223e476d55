use std::time::Duration;

#[cfg(debug_assertions)]
use crate::config::DF;

use crate::utils::AppInstant;

/// The repeating refresh timer.
///
/// Time is passed in by the caller, which drives `poll` once per frame. At most one timer
/// exists: `restart` drops the previous deadline before arming a new one, and `cancel`
/// disarms it for good.
#[derive(Debug, Clone)]
pub struct PollingController {
    interval: Duration,
    next_due: Option<AppInstant>,
    /// Bumped every time a timer is armed.
    generation: u64,
    /// How many armed timers have been torn down (restart or cancel).
    cancellations: u64,
}

impl PollingController {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
            generation: 0,
            cancellations: 0,
        }
    }

    /// Cancel any running timer and arm a new one whose first tick is one interval from `now`.
    /// The caller performs the immediate fetch itself. Returns whether a timer was cancelled.
    pub fn restart(&mut self, now: AppInstant, interval: Duration) -> bool {
        let cancelled = self.cancel();
        self.interval = interval;
        self.generation += 1;
        self.next_due = Some(now + interval);

        #[cfg(debug_assertions)]
        if DF.log_polling {
            log::info!(
                "⏱ Timer #{} armed every {:?} (previous cancelled: {})",
                self.generation,
                interval,
                cancelled
            );
        }
        cancelled
    }

    /// Disarm the timer. Returns whether one was running.
    pub fn cancel(&mut self) -> bool {
        let was_active = self.next_due.take().is_some();
        if was_active {
            self.cancellations += 1;
        }
        was_active
    }

    /// True when a tick is due at `now`.
    ///
    /// Ticks missed while nobody polled are dropped rather than queued: the next deadline is
    /// moved to the first interval boundary after `now`, keeping the original phase.
    pub fn poll(&mut self, now: AppInstant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }

        let next = if self.interval.is_zero() {
            now
        } else {
            let behind = now.duration_since(due).as_nanos() / self.interval.as_nanos();
            let skipped = u32::try_from(behind).unwrap_or(u32::MAX - 1);
            due + self.interval * (skipped + 1)
        };
        self.next_due = Some(next);

        #[cfg(debug_assertions)]
        if DF.log_polling {
            log::info!("⏱ Timer #{} tick", self.generation);
        }
        true
    }

    /// Time left until the next tick, None when disarmed.
    pub fn time_until_next(&self, now: AppInstant) -> Option<Duration> {
        self.next_due
            .map(|due| due.saturating_duration_since(now))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cancellations(&self) -> u64 {
        self.cancellations
    }
}
