use std::time::Duration;

#[cfg(debug_assertions)]
use crate::config::DF;

use crate::data::FetchDispatcher;
use crate::domain::{Asset, ChartKind, Currency, RefreshInterval, Selection, TimeRange};
use crate::utils::AppInstant;

use super::messages::{FetchReason, FetchRequest};
use super::poller::PollingController;
use super::view_state::ViewState;

/// Ties the selection, the refresh timer and the fetch dispatcher together.
///
/// The UI calls `update` once per frame and the mutators in response to input. Everything
/// runs on the UI thread; only the network wait happens elsewhere.
pub struct ChartEngine<D: FetchDispatcher> {
    view: ViewState,
    poller: PollingController,
    dispatcher: D,
    next_seq: u64,
    in_flight: usize,
}

impl<D: FetchDispatcher> ChartEngine<D> {
    pub fn new(selection: Selection, chart_kind: ChartKind, dispatcher: D) -> Self {
        let interval = selection.interval.duration();
        Self {
            view: ViewState::new(selection, chart_kind),
            poller: PollingController::new(interval),
            dispatcher,
            next_seq: 0,
            in_flight: 0,
        }
    }

    /// First activation: fetch now and arm the timer.
    pub fn start(&mut self, now: AppInstant) {
        self.restart_polling(now, "start");
    }

    /// Per-frame work: apply finished fetches in arrival order, then fire the timer if due.
    /// Returns how long until the timer next needs attention.
    pub fn update(&mut self, now: AppInstant, now_ms: i64) -> Option<Duration> {
        while let Some(outcome) = self.dispatcher.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            self.view.apply(outcome, now_ms);
        }

        if self.poller.poll(now) {
            self.issue_fetch(FetchReason::Tick);
        }

        self.poller.time_until_next(now)
    }

    /// Manual refresh: one extra fetch, timer untouched.
    pub fn refresh(&mut self) {
        self.issue_fetch(FetchReason::Manual);
    }

    /// Teardown. Pending fetches may still land through `update` but no new ones start.
    pub fn shutdown(&mut self) {
        if self.poller.cancel() {
            #[cfg(debug_assertions)]
            if DF.log_polling {
                log::info!("Polling stopped");
            }
        }
    }

    pub fn set_asset(&mut self, asset: Asset, now: AppInstant) {
        if self.view.set_asset(asset) {
            self.restart_polling(now, "asset");
        }
    }

    pub fn set_currency(&mut self, currency: Currency, now: AppInstant) {
        if self.view.set_currency(currency) {
            self.restart_polling(now, "currency");
        }
    }

    pub fn set_range(&mut self, range: TimeRange, now: AppInstant) {
        if self.view.set_range(range) {
            self.restart_polling(now, "range");
        }
    }

    pub fn set_interval(&mut self, interval: RefreshInterval, now: AppInstant) {
        if self.view.set_interval(interval) {
            self.restart_polling(now, "interval");
        }
    }

    /// Render preference only; never fetches.
    pub fn set_chart_kind(&mut self, kind: ChartKind) {
        self.view.set_chart_kind(kind);
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn poller(&self) -> &PollingController {
        &self.poller
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    fn restart_polling(&mut self, now: AppInstant, _reason: &str) {
        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!(
                "Polling restarted because of {}: {}",
                _reason,
                self.view.selection()
            );
        }
        let interval = self.view.selection().interval.duration();
        self.poller.restart(now, interval);
        self.issue_fetch(FetchReason::Restart);
    }

    fn issue_fetch(&mut self, reason: FetchReason) {
        self.next_seq += 1;
        let request = FetchRequest {
            seq: self.next_seq,
            selection: self.view.selection().clone(),
            reason,
        };

        #[cfg(debug_assertions)]
        if DF.log_fetches {
            log::info!(
                "Fetch #{} ({:?}) for {}",
                request.seq,
                reason,
                request.selection
            );
        }

        self.view.begin_fetch();
        self.in_flight += 1;
        self.dispatcher.dispatch(request);
    }
}
