mod coingecko;
mod dispatcher;
mod provider;

pub use {
    coingecko::{CoinGeckoProvider, parse_market_chart},
    dispatcher::{AsyncDispatcher, FetchDispatcher},
    provider::MarketDataProvider,
};
