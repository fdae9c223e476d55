//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Stroke of the price line (and the area outline)
    pub price_line_color: Color32,
    pub price_line_width: f32,

    /// Chart height in points
    pub chart_height: f32,
    /// Number of labelled ticks to aim for on the time axis
    pub x_tick_target: f64,
    /// Y padding used only when every price is identical (fraction of the price)
    pub flat_series_pad_pct: f64,

    // --- SEMANTIC COLORS ---
    pub color_info: Color32,
    pub color_warning: Color32,
    pub color_loss: Color32,

    pub color_text_neutral: Color32,
    pub color_text_primary: Color32,
    pub color_text_subdued: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    price_line_color: Color32::from_rgb(136, 132, 216), // #8884d8
    price_line_width: 2.0,

    chart_height: 400.0,
    x_tick_target: 6.0,
    flat_series_pad_pct: 0.01,

    color_info: Color32::from_rgb(100, 200, 255),
    color_warning: Color32::from_rgb(255, 215, 0),
    color_loss: Color32::from_rgb(220, 60, 60),

    color_text_neutral: Color32::WHITE,
    color_text_primary: Color32::LIGHT_GRAY,
    color_text_subdued: Color32::GRAY,
};
