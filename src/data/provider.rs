use anyhow::Result;
use async_trait::async_trait;

use crate::domain::Series;
use crate::engine::FetchRequest;

/// Abstract interface for fetching a price series.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait MarketDataProvider: Send + Sync {
    /// One request for `request.selection`'s asset, currency and range. No retries.
    async fn fetch_market_chart(&self, request: &FetchRequest) -> Result<Series>;
}
