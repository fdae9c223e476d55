use std::ops::RangeInclusive;
use std::sync::Arc;

use eframe::egui::Ui;
use egui_plot::{Axis, AxisHints, GridInput, GridMark, HPlacement, Legend, Line, Plot, PlotPoints, VPlacement};

use crate::config::PLOT_CONFIG;
use crate::domain::{ChartKind, ChartLocale, Currency, Series, TimeRange};
use crate::ui::UI_TEXT;
use crate::ui::utils::format_price;
use crate::utils::{TimeUtils, axis_tick_label, hover_label, min_max_f64, min_max_i64, nice_step};

/// Data extent of a series: x is [first..last time], y is [lowest..highest price].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ChartBounds {
    /// None for an empty series.
    pub fn from_series(series: &Series) -> Option<Self> {
        let (t_min, t_max) = min_max_i64(&series.times())?;
        let (p_min, p_max) = min_max_f64(&series.prices())?;
        Some(Self {
            x_min: t_min as f64,
            x_max: t_max as f64,
            y_min: p_min,
            y_max: p_max,
        })
    }

    /// Ranges handed to the plot. Identical to the data extent except when an axis collapses
    /// to a single value (one point, or a flat price), which gets a small symmetric pad.
    pub fn display_ranges(&self) -> (RangeInclusive<f64>, RangeInclusive<f64>) {
        let x = if self.x_max > self.x_min {
            self.x_min..=self.x_max
        } else {
            let pad = TimeUtils::MS_IN_MIN as f64;
            (self.x_min - pad)..=(self.x_max + pad)
        };
        let y = if self.y_max > self.y_min {
            self.y_min..=self.y_max
        } else {
            let pad = (self.y_min.abs() * PLOT_CONFIG.flat_series_pad_pct).max(f64::EPSILON);
            (self.y_min - pad)..=(self.y_max + pad)
        };
        (x, y)
    }
}

/// Plot-ready copy of the current series, rebuilt only when a new series arrives.
#[derive(Clone)]
pub struct PlotCache {
    series: Arc<Series>,
    points: Vec<[f64; 2]>,
    bounds: Option<ChartBounds>,
}

#[derive(Default)]
pub struct PlotView {
    cache: Option<PlotCache>,
}

/// Everything besides the data that decides how the chart looks.
#[derive(Debug, Clone, Copy)]
pub struct ChartStyle {
    pub kind: ChartKind,
    pub range: TimeRange,
    pub currency: Currency,
    pub locale: ChartLocale,
}

// Calendar-friendly steps for an epoch-millisecond axis.
const TIME_STEPS_MS: &[i64] = &[
    TimeUtils::MS_IN_MIN,
    TimeUtils::MS_IN_5_MIN,
    TimeUtils::MS_IN_15_MIN,
    TimeUtils::MS_IN_30_MIN,
    TimeUtils::MS_IN_H,
    TimeUtils::MS_IN_H * 2,
    TimeUtils::MS_IN_H * 3,
    TimeUtils::MS_IN_H * 6,
    TimeUtils::MS_IN_H * 12,
    TimeUtils::MS_IN_D,
    TimeUtils::MS_IN_D * 2,
    TimeUtils::MS_IN_D * 7,
    TimeUtils::MS_IN_D * 14,
    TimeUtils::MS_IN_D * 30,
    TimeUtils::MS_IN_D * 60,
    TimeUtils::MS_IN_D * 90,
];

/// Smallest calendar step that splits `span_ms` into at most `target_count` parts.
pub(crate) fn time_step_for(span_ms: f64, target_count: f64) -> f64 {
    let wanted = span_ms / target_count.max(1.0);
    TIME_STEPS_MS
        .iter()
        .map(|&s| s as f64)
        .find(|&s| s >= wanted)
        .unwrap_or_else(|| nice_step(span_ms, target_count))
}

fn time_grid_marks(input: GridInput) -> Vec<GridMark> {
    let (min, max) = input.bounds;
    let step = time_step_for(max - min, PLOT_CONFIG.x_tick_target);

    let start = (min / step).ceil() as i64;
    let end = (max / step).floor() as i64;
    (start..=end)
        .map(|i| GridMark {
            value: i as f64 * step,
            step_size: step,
        })
        .collect()
}

fn create_time_axis(range: TimeRange, locale: ChartLocale) -> AxisHints<'static> {
    AxisHints::new(Axis::X)
        .label(UI_TEXT.plot_x_axis.as_str())
        .formatter(move |mark, _range| axis_tick_label(mark.value as i64, range, locale))
        .placement(VPlacement::Bottom)
}

fn create_y_axis(currency: Currency) -> AxisHints<'static> {
    AxisHints::new_y()
        .label(currency.to_string())
        .formatter(move |grid_mark, _range| format_price(grid_mark.value, currency))
        .placement(HPlacement::Right)
}

/// Tooltip for a hovered sample. Empty when the pointer is not on the series (egui_plot
/// then passes an empty name and the raw cursor position).
pub(crate) fn hover_text(name: &str, x: f64, y: f64, style: ChartStyle) -> String {
    if name.is_empty() {
        return String::new();
    }
    let ms = x as i64;
    format!(
        "{}\n{}\n{}: {}",
        axis_tick_label(ms, style.range, style.locale),
        hover_label(ms, style.locale),
        name,
        format_price(y, style.currency)
    )
}

impl PlotView {
    pub fn new() -> Self {
        Self { cache: None }
    }

    fn cache_for(&mut self, series: &Arc<Series>) -> &PlotCache {
        let stale = self
            .cache
            .as_ref()
            .is_none_or(|c| !Arc::ptr_eq(&c.series, series));

        if stale {
            let cache = crate::trace_time!("Rebuild Plot Cache", 500, {
                PlotCache {
                    series: series.clone(),
                    points: series
                        .iter()
                        .map(|p| [p.time as f64, p.price])
                        .collect(),
                    bounds: ChartBounds::from_series(series),
                }
            });
            self.cache = Some(cache);
        }
        self.cache.get_or_insert_with(|| PlotCache {
            series: series.clone(),
            points: Vec::new(),
            bounds: None,
        })
    }

    pub fn show_chart(&mut self, ui: &mut Ui, series: &Arc<Series>, style: ChartStyle) {
        let cache = self.cache_for(series);
        let points = cache.points.clone();
        let bounds = cache.bounds;
        let locale = style.locale;
        let currency = style.currency;
        let range = style.range;

        Plot::new("price_chart")
            .height(PLOT_CONFIG.chart_height)
            .legend(Legend::default())
            .custom_x_axes(vec![create_time_axis(range, locale)])
            .custom_y_axes(vec![create_y_axis(currency)])
            .x_grid_spacer(time_grid_marks)
            .label_formatter(move |name, value| hover_text(name, value.x, value.y, style))
            .allow_double_click_reset(false)
            .allow_scroll(false)
            .allow_drag(false)
            .allow_zoom(false)
            .show(ui, |plot_ui| {
                let mut fill_to = None;
                if let Some(bounds) = bounds {
                    let (x_range, y_range) = bounds.display_ranges();
                    fill_to = Some(*y_range.start());
                    plot_ui.set_plot_bounds_x(x_range);
                    plot_ui.set_plot_bounds_y(y_range);
                }

                let mut line = Line::new(UI_TEXT.plot_series_name.as_str(), PlotPoints::new(points))
                    .color(PLOT_CONFIG.price_line_color)
                    .width(PLOT_CONFIG.price_line_width);

                if let (ChartKind::Area, Some(y)) = (style.kind, fill_to) {
                    line = line.fill(y as f32);
                }
                plot_ui.line(line);
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PricePoint;

    fn series(points: &[(i64, f64)]) -> Series {
        points.iter().map(|&(t, p)| PricePoint::new(t, p)).collect()
    }

    #[test]
    fn bounds_span_the_data() {
        let b = ChartBounds::from_series(&series(&[(1000, 50000.0), (2000, 50100.0)])).unwrap();
        assert_eq!(
            b,
            ChartBounds {
                x_min: 1000.0,
                x_max: 2000.0,
                y_min: 50000.0,
                y_max: 50100.0
            }
        );
        let (x, y) = b.display_ranges();
        assert_eq!(x, 1000.0..=2000.0);
        assert_eq!(y, 50000.0..=50100.0);
    }

    #[test]
    fn bounds_use_extremes_not_endpoints() {
        let b = ChartBounds::from_series(&series(&[(3000, 5.0), (1000, 9.0), (2000, 1.0)])).unwrap();
        assert_eq!((b.x_min, b.x_max), (1000.0, 3000.0));
        assert_eq!((b.y_min, b.y_max), (1.0, 9.0));
    }

    #[test]
    fn empty_series_has_no_bounds() {
        assert!(ChartBounds::from_series(&Series::default()).is_none());
    }

    #[test]
    fn collapsed_axes_get_padded_for_display() {
        let b = ChartBounds::from_series(&series(&[(5000, 200.0)])).unwrap();
        let (x, y) = b.display_ranges();
        assert_eq!(x, -55_000.0..=65_000.0);
        assert_eq!(y, 198.0..=202.0);
    }

    #[test]
    fn time_steps_snap_to_calendar_units() {
        let day = TimeUtils::MS_IN_D as f64;
        assert_eq!(time_step_for(day, 6.0), (TimeUtils::MS_IN_H * 6) as f64);
        assert_eq!(time_step_for(7.0 * day, 6.0), 2.0 * day);
        assert_eq!(time_step_for(30.0 * day, 6.0), 7.0 * day);
        assert_eq!(time_step_for(365.0 * day, 6.0), 90.0 * day);
    }

    #[test]
    fn cache_is_rebuilt_only_for_a_new_series() {
        let mut view = PlotView::new();
        let a = Arc::new(series(&[(1, 1.0), (2, 2.0)]));
        assert_eq!(view.cache_for(&a).points, vec![[1.0, 1.0], [2.0, 2.0]]);
        assert!(Arc::ptr_eq(&view.cache_for(&a).series, &a));

        let b = Arc::new(series(&[(3, 3.0)]));
        assert_eq!(view.cache_for(&b).points, vec![[3.0, 3.0]]);
        assert_eq!(view.cache_for(&b).bounds.map(|b| b.x_min), Some(3.0));
    }

    #[test]
    fn hover_text_is_empty_off_the_series() {
        let style = ChartStyle {
            kind: ChartKind::Area,
            range: TimeRange::Day,
            currency: Currency::Usd,
            locale: ChartLocale::EnUs,
        };
        assert_eq!(hover_text("", 1000.0, 50100.0, style), "");

        let text = hover_text("price", 1000.0, 50100.0, style);
        assert_eq!(text.lines().count(), 3);
        assert!(text.ends_with("price: $50100.00"));
    }
}
