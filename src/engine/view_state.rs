use std::sync::Arc;

#[cfg(debug_assertions)]
use crate::config::DF;

use crate::domain::{
    Asset, ChartKind, Currency, FetchStatus, RefreshInterval, Selection, Series, TimeRange,
};
use crate::engine::FetchOutcome;

/// What the renderer reads every frame.
///
/// `series` is the last successfully fetched series. It outlives failures so nothing is lost
/// from memory, but the renderer only plots what `status` carries.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    selection: Selection,
    status: FetchStatus,
    series: Arc<Series>,
    chart_kind: ChartKind,
    /// Highest request sequence applied so far.
    last_applied_seq: Option<u64>,
    /// Local wall-clock ms of the last successful fetch.
    last_updated_ms: Option<i64>,
}

/// How a completion related to the state it overwrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Current,
    /// An older request finished after a newer one, or the selection moved on meanwhile.
    /// Applied anyway: last completion wins.
    Stale,
}

impl ViewState {
    pub fn new(selection: Selection, chart_kind: ChartKind) -> Self {
        Self {
            selection,
            chart_kind,
            ..Default::default()
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    pub fn chart_kind(&self) -> ChartKind {
        self.chart_kind
    }

    pub fn last_updated_ms(&self) -> Option<i64> {
        self.last_updated_ms
    }

    // Mutators return true only when the value actually changed.

    pub fn set_asset(&mut self, asset: Asset) -> bool {
        replace_if_changed(&mut self.selection.asset, asset)
    }

    pub fn set_currency(&mut self, currency: Currency) -> bool {
        replace_if_changed(&mut self.selection.currency, currency)
    }

    pub fn set_range(&mut self, range: TimeRange) -> bool {
        replace_if_changed(&mut self.selection.range, range)
    }

    pub fn set_interval(&mut self, interval: RefreshInterval) -> bool {
        replace_if_changed(&mut self.selection.interval, interval)
    }

    pub fn set_chart_kind(&mut self, kind: ChartKind) -> bool {
        replace_if_changed(&mut self.chart_kind, kind)
    }

    /// A fetch has been issued.
    pub fn begin_fetch(&mut self) {
        self.status = FetchStatus::Loading;
    }

    /// Overwrite status (and on success the series) with a completed fetch.
    pub fn apply(&mut self, outcome: FetchOutcome, now_ms: i64) -> Applied {
        let out_of_order = self.last_applied_seq.is_some_and(|seq| outcome.seq < seq);
        let superseded = outcome.selection != self.selection;
        let newest = self.last_applied_seq.map_or(outcome.seq, |seq| seq.max(outcome.seq));
        self.last_applied_seq = Some(newest);

        let applied = if out_of_order || superseded {
            log::warn!(
                "Late response #{} for {} overwrote state (current: {}, newest applied: #{})",
                outcome.seq,
                outcome.selection,
                self.selection,
                newest
            );
            Applied::Stale
        } else {
            Applied::Current
        };

        match outcome.result {
            Ok(series) => {
                #[cfg(debug_assertions)]
                if DF.log_fetches {
                    log::info!("Fetch #{} ready with {} points", outcome.seq, series.len());
                }
                self.series = series.clone();
                self.status = FetchStatus::Ready(series);
                self.last_updated_ms = Some(now_ms);
            }
            Err(err) => {
                log::error!("Fetch #{} for {} failed: {}", outcome.seq, outcome.selection, err);
                self.status = FetchStatus::Failed;
            }
        }
        applied
    }
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PricePoint;

    fn ok(seq: u64, selection: &Selection, points: &[(i64, f64)]) -> FetchOutcome {
        FetchOutcome {
            seq,
            selection: selection.clone(),
            duration_ms: 10,
            result: Ok(Arc::new(
                points.iter().map(|&(t, p)| PricePoint::new(t, p)).collect(),
            )),
        }
    }

    fn failed(seq: u64, selection: &Selection) -> FetchOutcome {
        FetchOutcome {
            seq,
            selection: selection.clone(),
            duration_ms: 10,
            result: Err("HTTP status client error (429 Too Many Requests)".into()),
        }
    }

    #[test]
    fn starts_loading_with_no_series() {
        let view = ViewState::new(Selection::default(), ChartKind::Area);
        assert!(view.status().is_loading());
        assert!(view.series().is_empty());
        assert_eq!(view.last_updated_ms(), None);
    }

    #[test]
    fn success_sets_ready_and_series_together() {
        let mut view = ViewState::new(Selection::default(), ChartKind::Area);
        let sel = view.selection().clone();
        view.begin_fetch();
        let applied = view.apply(ok(1, &sel, &[(1000, 50000.0), (2000, 50100.0)]), 99);

        assert_eq!(applied, Applied::Current);
        let ready = view.status().series().unwrap();
        assert_eq!(ready.times(), vec![1000, 2000]);
        assert_eq!(view.series(), ready);
        assert_eq!(view.last_updated_ms(), Some(99));
    }

    #[test]
    fn failure_keeps_the_previous_series_but_hides_it() {
        let mut view = ViewState::new(Selection::default(), ChartKind::Area);
        let sel = view.selection().clone();
        view.apply(ok(1, &sel, &[(1000, 1.0)]), 5);
        view.begin_fetch();
        view.apply(failed(2, &sel), 6);

        assert!(view.status().is_failed());
        assert!(view.status().series().is_none());
        assert_eq!(view.series().times(), vec![1000]);
        assert_eq!(view.last_updated_ms(), Some(5));
    }

    #[test]
    fn late_completion_still_wins_but_is_flagged() {
        let mut view = ViewState::new(Selection::default(), ChartKind::Area);
        let sel = view.selection().clone();
        view.apply(ok(2, &sel, &[(2000, 2.0)]), 1);
        let applied = view.apply(ok(1, &sel, &[(1000, 1.0)]), 2);

        assert_eq!(applied, Applied::Stale);
        assert_eq!(view.status().series().unwrap().times(), vec![1000]);
    }

    #[test]
    fn completion_for_an_old_selection_is_flagged() {
        let mut view = ViewState::new(Selection::default(), ChartKind::Area);
        let old = view.selection().clone();
        assert!(view.set_currency(Currency::Jpy));
        assert_eq!(view.apply(ok(1, &old, &[(1, 1.0)]), 0), Applied::Stale);
    }

    #[test]
    fn setters_report_only_real_changes() {
        let mut view = ViewState::new(Selection::default(), ChartKind::Area);
        assert!(!view.set_asset(Asset::new("bitcoin")));
        assert!(view.set_asset(Asset::new("dogecoin")));
        assert!(!view.set_range(TimeRange::Day));
        assert!(view.set_range(TimeRange::Year));
        assert!(view.set_interval(RefreshInterval::H1));
        assert!(!view.set_chart_kind(ChartKind::Area));
        assert!(view.set_chart_kind(ChartKind::Line));
        assert_eq!(view.selection().asset.id(), "dogecoin");
    }
}
