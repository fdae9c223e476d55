use eframe::egui::{CentralPanel, ComboBox, Context, RichText, TopBottomPanel, Ui};
use strum::IntoEnumIterator;

use crate::app::App;
use crate::config::PLOT_CONFIG;
use crate::domain::{Asset, ChartKind, Currency, FetchStatus, RefreshInterval, TimeRange};
use crate::engine::ViewState;
use crate::ui::styles::colored_subsection_heading;
use crate::ui::{ChartStyle, UI_CONFIG, UI_TEXT, UiStyleExt, format_price};
use crate::utils::{AppInstant, format_countdown, local_clock_label};

/// Controls touched during one frame. Applied after the panel closure releases its borrows.
#[derive(Default)]
struct ToolbarChanges {
    asset: Option<Asset>,
    currency: Option<Currency>,
    range: Option<TimeRange>,
    interval: Option<RefreshInterval>,
    chart_kind: Option<ChartKind>,
    refresh: bool,
}

impl App {
    pub(crate) fn render_top_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.top_panel_frame();
        let view = self.engine.view();
        let selection = view.selection().clone();
        let mut chart_kind = view.chart_kind();
        let mut asset = selection.asset.clone();
        let mut currency = selection.currency;
        let mut range = selection.range;
        let mut interval = selection.interval;
        let mut changes = ToolbarChanges::default();

        TopBottomPanel::top("top_toolbar")
            .frame(frame)
            .min_height(30.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    // 1. WHAT TO FETCH
                    ui.label_subheader(UI_TEXT.label_asset.as_str());
                    ComboBox::from_id_salt("asset_select")
                        .selected_text(asset.display_name().to_string())
                        .show_ui(ui, |ui| {
                            for known in Asset::known() {
                                let name = known.display_name().to_string();
                                ui.selectable_value(&mut asset, known, name);
                            }
                        });

                    ui.label_subheader(UI_TEXT.label_currency.as_str());
                    ComboBox::from_id_salt("currency_select")
                        .selected_text(currency.to_string())
                        .show_ui(ui, |ui| {
                            for c in Currency::iter() {
                                ui.selectable_value(&mut currency, c, c.to_string());
                            }
                        });

                    ui.separator();

                    // 2. LOOK-BACK WINDOW
                    for r in TimeRange::iter() {
                        ui.selectable_value(&mut range, r, r.to_string());
                    }

                    ui.separator();

                    // 3. POLLING
                    ui.label_subheader(UI_TEXT.label_interval.as_str());
                    ComboBox::from_id_salt("interval_select")
                        .selected_text(interval.to_string())
                        .show_ui(ui, |ui| {
                            for i in RefreshInterval::iter() {
                                ui.selectable_value(&mut interval, i, i.to_string());
                            }
                        });

                    if ui.button(UI_TEXT.button_refresh.as_str()).clicked() {
                        changes.refresh = true;
                    }

                    ui.separator();

                    // 4. STYLE
                    ui.label_subheader(UI_TEXT.label_chart_kind.as_str());
                    for k in ChartKind::iter() {
                        ui.selectable_value(&mut chart_kind, k, k.to_string());
                    }
                });
            });

        changes.asset = (asset != selection.asset).then_some(asset);
        changes.currency = (currency != selection.currency).then_some(currency);
        changes.range = (range != selection.range).then_some(range);
        changes.interval = (interval != selection.interval).then_some(interval);
        changes.chart_kind = (chart_kind != self.engine.view().chart_kind()).then_some(chart_kind);
        self.apply_toolbar_changes(changes);
    }

    fn apply_toolbar_changes(&mut self, changes: ToolbarChanges) {
        let now = AppInstant::now();
        if let Some(asset) = changes.asset {
            self.engine.set_asset(asset, now);
        }
        if let Some(currency) = changes.currency {
            self.engine.set_currency(currency, now);
        }
        if let Some(range) = changes.range {
            self.engine.set_range(range, now);
        }
        if let Some(interval) = changes.interval {
            self.engine.set_interval(interval, now);
        }
        if let Some(kind) = changes.chart_kind {
            self.engine.set_chart_kind(kind);
        }
        if changes.refresh {
            self.engine.refresh();
        }
    }

    pub(crate) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = UI_CONFIG.central_panel_frame();

        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                let view = self.engine.view();
                let selection = view.selection();

                ui.heading(colored_subsection_heading(chart_heading(
                    selection.asset.id(),
                    selection.currency,
                )));
                ui.add_space(8.0);

                match view.status() {
                    FetchStatus::Loading => {
                        ui.placeholder(UI_TEXT.loading.as_str(), PLOT_CONFIG.color_text_primary);
                    }
                    FetchStatus::Failed => {
                        ui.placeholder(UI_TEXT.fetch_failed.as_str(), PLOT_CONFIG.color_loss);
                    }
                    FetchStatus::Ready(series) if series.is_empty() => {
                        ui.placeholder(UI_TEXT.no_points.as_str(), PLOT_CONFIG.color_text_subdued);
                    }
                    FetchStatus::Ready(series) => {
                        let style = ChartStyle {
                            kind: view.chart_kind(),
                            range: selection.range,
                            currency: selection.currency,
                            locale: self.locale,
                        };
                        self.plot_view.show_chart(ui, series, style);
                    }
                }
            });
    }

    pub(crate) fn render_status_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.bottom_panel_frame();
        TopBottomPanel::bottom("status_panel")
            .frame(frame)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    self.render_status_last_update(ui);
                    ui.separator();
                    self.render_status_timer(ui);
                    ui.separator();
                    self.render_status_network(ui);
                });
            });
    }

    fn render_status_last_update(&self, ui: &mut Ui) {
        let view = self.engine.view();
        let value = view
            .last_updated_ms()
            .map(local_clock_label)
            .unwrap_or_else(|| UI_TEXT.status_never_updated.clone());
        ui.metric(
            &UI_TEXT.status_last_update,
            &value,
            PLOT_CONFIG.color_text_neutral,
        );

        if let Some(price) = latest_price_label(view) {
            ui.separator();
            ui.label(
                RichText::new(price)
                    .small()
                    .strong()
                    .color(PLOT_CONFIG.color_warning),
            );
        }
    }

    fn render_status_timer(&self, ui: &mut Ui) {
        match self.engine.poller().time_until_next(AppInstant::now()) {
            Some(left) => ui.metric(
                &UI_TEXT.status_next_refresh,
                &format_countdown(left),
                PLOT_CONFIG.color_info,
            ),
            None => ui.label_subdued(UI_TEXT.status_polling_stopped.as_str()),
        }
    }

    fn render_status_network(&self, ui: &mut Ui) {
        let in_flight = self.engine.in_flight();
        if in_flight > 0 {
            ui.label(
                RichText::new(format!("{} {}", in_flight, UI_TEXT.status_in_flight))
                    .small()
                    .color(PLOT_CONFIG.color_warning),
            );
        }
    }
}

/// Last price of the series on screen. Nothing while loading or after a failure: the
/// retained series may belong to another asset or currency.
pub(crate) fn latest_price_label(view: &ViewState) -> Option<String> {
    let last = view.status().series()?.last()?;
    Some(format_price(last.price, view.selection().currency))
}

/// "BITCOIN Price Data (USD)"
pub(crate) fn chart_heading(asset_id: &str, currency: Currency) -> String {
    format!(
        "{} {} ({})",
        asset_id.to_uppercase(),
        UI_TEXT.heading_suffix,
        currency.code().to_uppercase()
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::{PricePoint, Selection};
    use crate::engine::FetchOutcome;

    fn outcome(seq: u64, selection: &Selection, result: Result<Vec<(i64, f64)>, &str>) -> FetchOutcome {
        FetchOutcome {
            seq,
            selection: selection.clone(),
            duration_ms: 1,
            result: result
                .map(|pts| Arc::new(pts.into_iter().map(|(t, p)| PricePoint::new(t, p)).collect()))
                .map_err(str::to_string),
        }
    }

    #[test]
    fn latest_price_shows_only_for_a_ready_series() {
        let mut view = ViewState::new(Selection::default(), ChartKind::Area);
        assert_eq!(latest_price_label(&view), None);

        let usd = view.selection().clone();
        view.apply(outcome(1, &usd, Ok(vec![(1000, 50000.0), (2000, 50100.0)])), 0);
        assert_eq!(latest_price_label(&view).as_deref(), Some("$50100.00"));

        view.begin_fetch();
        assert_eq!(latest_price_label(&view), None);
    }

    #[test]
    fn currency_switch_then_failure_hides_the_old_price() {
        let mut view = ViewState::new(Selection::default(), ChartKind::Area);
        let usd = view.selection().clone();
        view.apply(outcome(1, &usd, Ok(vec![(1000, 50100.0)])), 0);

        assert!(view.set_currency(Currency::Jpy));
        view.begin_fetch();
        let jpy = view.selection().clone();
        view.apply(outcome(2, &jpy, Err("HTTP status client error (429 Too Many Requests)")), 1);

        assert!(view.status().is_failed());
        assert_eq!(view.series().len(), 1);
        assert_eq!(latest_price_label(&view), None);
    }

    #[test]
    fn heading_upper_cases_asset_and_currency() {
        assert_eq!(
            chart_heading("bitcoin", Currency::Usd),
            "BITCOIN Price Data (USD)"
        );
        assert_eq!(
            chart_heading("ethereum", Currency::Jpy),
            "ETHEREUM Price Data (JPY)"
        );
    }
}
