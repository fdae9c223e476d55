use eframe::egui::{Context, Visuals};

use crate::domain::Currency;
use crate::ui::UI_CONFIG;

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;

    // Make the widgets stand out a bit more
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}

/// Formats a price with "Trader Precision".
/// - Large (>=1000): no decimals for yen, 2 otherwise
/// - Medium (1-1000): 2 decimals (4 below 10)
/// - Small (<1): 6 decimals, enough for meme coins
pub fn format_price(price: f64, currency: Currency) -> String {
    let symbol = match currency {
        Currency::Usd => "$",
        Currency::Jpy => "¥",
    };
    let abs_price = price.abs();

    if abs_price >= 1000.0 {
        match currency {
            Currency::Jpy => format!("{}{:.0}", symbol, price),
            Currency::Usd => format!("{}{:.2}", symbol, price),
        }
    } else if abs_price >= 10.0 {
        format!("{}{:.2}", symbol, price)
    } else if abs_price >= 1.0 {
        format!("{}{:.4}", symbol, price)
    } else {
        format!("{}{:.6}", symbol, price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precision_follows_magnitude() {
        assert_eq!(format_price(50100.0, Currency::Usd), "$50100.00");
        assert_eq!(format_price(7_512_345.6, Currency::Jpy), "¥7512346");
        assert_eq!(format_price(123.456, Currency::Usd), "$123.46");
        assert_eq!(format_price(2.5, Currency::Usd), "$2.5000");
        assert_eq!(format_price(0.0712341, Currency::Usd), "$0.071234");
    }
}
