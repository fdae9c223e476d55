mod styles;
mod ui_config;
mod ui_plot_view;
mod ui_render;
mod ui_text;
mod utils;

pub(crate) use styles::UiStyleExt;
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
pub(crate) use ui_plot_view::{ChartStyle, PlotView};
pub(crate) use utils::{format_price, setup_custom_visuals};
