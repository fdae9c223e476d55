/// Endpoint layout for the public CoinGecko v3 API.
pub struct CoinGeckoConfig {
    pub base_url: &'static str,
    pub market_chart_path: &'static str,
    pub default_asset: &'static str,
    /// (api id, display name) pairs offered by the asset selector.
    pub known_assets: &'static [(&'static str, &'static str)],
}

impl CoinGeckoConfig {
    /// `{base}/coins/{asset}/market_chart`. The asset id is not escaped or checked.
    pub fn market_chart_url(&self, base_url: &str, asset_id: &str) -> String {
        format!(
            "{}/coins/{}/{}",
            base_url.trim_end_matches('/'),
            asset_id,
            self.market_chart_path
        )
    }
}

pub const COINGECKO: CoinGeckoConfig = CoinGeckoConfig {
    base_url: "https://api.coingecko.com/api/v3",
    market_chart_path: "market_chart",
    default_asset: "bitcoin",
    known_assets: &[
        ("bitcoin", "Bitcoin"),
        ("ethereum", "Ethereum"),
        ("dogecoin", "Dogecoin"),
    ],
};
