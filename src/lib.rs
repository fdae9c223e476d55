#![allow(clippy::collapsible_if)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod ui;
pub mod utils;

pub use app::App;
pub use data::{CoinGeckoProvider, MarketDataProvider, parse_market_chart};
pub use domain::{
    Asset, ChartKind, ChartLocale, Currency, PricePoint, RefreshInterval, Selection, Series,
    TimeRange,
};
pub use engine::ChartEngine;

use config::COINGECKO;

// CLI argument parsing
use clap::Parser;

/// Every flag is optional; anything left out falls back to the mount defaults.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// CoinGecko coin id, e.g. bitcoin, ethereum
    #[arg(long)]
    pub asset: Option<Asset>,

    /// Quote currency: usd or jpy
    #[arg(long)]
    pub currency: Option<Currency>,

    /// Look-back window in days: 1, 7, 30 or 365
    #[arg(long)]
    pub days: Option<TimeRange>,

    /// Refresh interval in minutes: 1, 5, 15, 30 or 60
    #[arg(long)]
    pub interval_mins: Option<RefreshInterval>,

    /// Label locale: en-US or ja-JP (defaults to the build's locale)
    #[arg(long)]
    pub locale: Option<ChartLocale>,

    /// line or area
    #[arg(long)]
    pub chart_kind: Option<ChartKind>,

    /// Override the API root, e.g. for a proxy or a local mock
    #[arg(long)]
    pub api_base: Option<String>,
}

impl Cli {
    pub fn selection(&self) -> Selection {
        Selection {
            asset: self.asset.clone().unwrap_or_default(),
            currency: self.currency.unwrap_or_default(),
            range: self.days.unwrap_or_default(),
            interval: self.interval_mins.unwrap_or_default(),
        }
    }

    pub fn locale(&self) -> ChartLocale {
        self.locale.unwrap_or_default()
    }

    pub fn chart_kind(&self) -> ChartKind {
        self.chart_kind.unwrap_or_default()
    }

    pub fn api_base(&self) -> &str {
        self.api_base.as_deref().unwrap_or(COINGECKO.base_url)
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> anyhow::Result<App> {
    App::new(cc, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_command_line_gives_mount_defaults() {
        let cli = Cli::try_parse_from(["coin-chart"]).unwrap();
        assert_eq!(cli.selection(), Selection::default());
        assert_eq!(cli.chart_kind(), ChartKind::Area);
        assert_eq!(cli.api_base(), "https://api.coingecko.com/api/v3");
    }

    #[test]
    fn flags_map_onto_the_selection() {
        let cli = Cli::try_parse_from([
            "coin-chart",
            "--asset",
            "ethereum",
            "--currency",
            "jpy",
            "--days",
            "30",
            "--interval-mins",
            "15",
            "--locale",
            "ja-JP",
            "--chart-kind",
            "line",
            "--api-base",
            "http://127.0.0.1:9000",
        ])
        .unwrap();

        let s = cli.selection();
        assert_eq!(s.asset.id(), "ethereum");
        assert_eq!(s.currency, Currency::Jpy);
        assert_eq!(s.range, TimeRange::Month);
        assert_eq!(s.interval, RefreshInterval::M15);
        assert_eq!(cli.locale(), ChartLocale::JaJp);
        assert_eq!(cli.chart_kind(), ChartKind::Line);
        assert_eq!(cli.api_base(), "http://127.0.0.1:9000");
    }

    #[test]
    fn unsupported_values_are_rejected() {
        assert!(Cli::try_parse_from(["coin-chart", "--days", "90"]).is_err());
        assert!(Cli::try_parse_from(["coin-chart", "--interval-mins", "2"]).is_err());
        assert!(Cli::try_parse_from(["coin-chart", "--currency", "eur"]).is_err());
    }
}
