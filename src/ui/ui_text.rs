use std::sync::LazyLock;

pub const ICON_REFRESH: &str = "🔄";
pub const ICON_CLOCK: &str = "⏱";
pub const ICON_WARNING: &str = "⚠";

pub struct UiText {
    // --- Top panel ---
    pub heading_suffix: String,
    pub label_asset: String,
    pub label_currency: String,
    pub label_interval: String,
    pub label_chart_kind: String,
    pub button_refresh: String,

    // --- Placeholders ---
    pub loading: String,
    pub fetch_failed: String,
    pub no_points: String,

    // --- PLOT LABELS ---
    pub plot_x_axis: String,
    pub plot_series_name: String,

    // --- Status bar ---
    pub status_last_update: String,
    pub status_never_updated: String,
    pub status_next_refresh: String,
    pub status_polling_stopped: String,
    pub status_in_flight: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    heading_suffix: "Price Data".to_string(),
    label_asset: "Cryptocurrency".to_string(),
    label_currency: "Currency".to_string(),
    label_interval: "Refresh every".to_string(),
    label_chart_kind: "Chart".to_string(),
    button_refresh: format!("{} Refresh", ICON_REFRESH),

    loading: "Loading data...".to_string(),
    fetch_failed: format!("{} Failed to fetch data.", ICON_WARNING),
    no_points: "No price points for this range.".to_string(),

    plot_x_axis: "Time".to_string(),
    plot_series_name: "price".to_string(),

    status_last_update: "Last update".to_string(),
    status_never_updated: "not yet".to_string(),
    status_next_refresh: format!("{} Next refresh in", ICON_CLOCK),
    status_polling_stopped: "Polling stopped".to_string(),
    status_in_flight: "requests in flight".to_string(),
});
