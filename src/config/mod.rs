//! Configuration module for the coin chart application.

// Can all be private now because we have a public re-export.
mod coingecko;
mod debug;
mod polling;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use coingecko::{COINGECKO, CoinGeckoConfig};
pub use debug::DF;
pub use plot::PLOT_CONFIG;
pub use polling::POLLING;

/// Gate for the `trace_time!` macro.
pub const LOG_PERFORMANCE: bool = DF.log_performance;
