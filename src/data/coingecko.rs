use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use crate::config::COINGECKO;
use crate::data::MarketDataProvider;
use crate::domain::{PricePoint, Series};
use crate::engine::FetchRequest;

/// Body of `/coins/{id}/market_chart`. Only `prices` is read; `market_caps` and
/// `total_volumes` are ignored.
#[derive(Debug, Deserialize)]
struct MarketChartResponse {
    prices: Vec<[f64; 2]>,
}

/// Turn a market_chart body into a series, one point per `[timestamp, price]` pair, in order.
pub fn parse_market_chart(body: &str) -> Result<Series> {
    let response: MarketChartResponse =
        serde_json::from_str(body).context("malformed market_chart body")?;
    Ok(response.prices.into_iter().map(PricePoint::from).collect())
}

pub struct CoinGeckoProvider {
    client: reqwest::Client,
    base_url: String,
}

impl CoinGeckoProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl MarketDataProvider for CoinGeckoProvider {
    async fn fetch_market_chart(&self, request: &FetchRequest) -> Result<Series> {
        let selection = &request.selection;
        let url = COINGECKO.market_chart_url(&self.base_url, selection.asset.id());

        let response = self
            .client
            .get(&url)
            .query(&[
                ("vs_currency", selection.currency.code()),
                ("days", selection.range.code()),
            ])
            .send()
            .await
            .with_context(|| format!("request to {} failed", url))?
            .error_for_status()
            .context("market_chart returned an error status")?;

        let body = response
            .text()
            .await
            .context("failed to read market_chart body")?;

        parse_market_chart(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(not(target_arch = "wasm32"))]
    use crate::domain::{Asset, Currency, Selection, TimeRange};
    #[cfg(not(target_arch = "wasm32"))]
    use crate::engine::FetchReason;

    #[test]
    fn prices_map_one_to_one_in_order() {
        let series = parse_market_chart(r#"{"prices":[[1000,50000],[2000,50100]]}"#).unwrap();
        assert_eq!(
            series.points(),
            &[PricePoint::new(1000, 50000.0), PricePoint::new(2000, 50100.0)]
        );
    }

    #[test]
    fn other_fields_are_ignored() {
        let body = r#"{
            "prices": [[1711843200000, 69702.3087473573], [1711846800000, 69830.1]],
            "market_caps": [[1711843200000, 1370247487960.0871]],
            "total_volumes": [[1711843200000, 16408802301.837206]]
        }"#;
        let series = parse_market_chart(body).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.points()[0].time, 1_711_843_200_000);
        assert!((series.points()[0].price - 69702.3087473573).abs() < 1e-9);
    }

    #[test]
    fn empty_price_list_is_an_empty_series() {
        let series = parse_market_chart(r#"{"prices":[]}"#).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn unexpected_shapes_are_errors() {
        assert!(parse_market_chart(r#"{"error":"coin not found"}"#).is_err());
        assert!(parse_market_chart(r#"{"prices":[[1000]]}"#).is_err());
        assert!(parse_market_chart("<html>rate limited</html>").is_err());
    }

    /// Answers a single connection with `status` and `body`, then yields the request line it saw.
    #[cfg(not(target_arch = "wasm32"))]
    async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut head = Vec::new();
            let mut chunk = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&chunk[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;

            String::from_utf8_lossy(&head)
                .lines()
                .next()
                .unwrap_or_default()
                .to_string()
        });
        (base_url, handle)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn request_for(asset: &str, currency: Currency, range: TimeRange) -> FetchRequest {
        FetchRequest {
            seq: 1,
            selection: Selection {
                asset: Asset::new(asset),
                currency,
                range,
                ..Selection::default()
            },
            reason: FetchReason::Manual,
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn fetch_requests_market_chart_with_currency_and_days() {
        let (base_url, server) =
            serve_once("200 OK", r#"{"prices":[[1000,50000],[2000,50100]]}"#).await;
        let provider = CoinGeckoProvider::new(base_url);

        let series = provider
            .fetch_market_chart(&request_for("bitcoin", Currency::Usd, TimeRange::Day))
            .await
            .unwrap();

        assert_eq!(
            server.await.unwrap(),
            "GET /coins/bitcoin/market_chart?vs_currency=usd&days=1 HTTP/1.1"
        );
        assert_eq!(
            series.points(),
            &[PricePoint::new(1000, 50000.0), PricePoint::new(2000, 50100.0)]
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn fetch_forwards_other_selections_verbatim() {
        let (base_url, server) = serve_once("200 OK", r#"{"prices":[]}"#).await;
        let provider = CoinGeckoProvider::new(format!("{}/", base_url));

        let series = provider
            .fetch_market_chart(&request_for("ethereum", Currency::Jpy, TimeRange::Month))
            .await
            .unwrap();

        assert_eq!(
            server.await.unwrap(),
            "GET /coins/ethereum/market_chart?vs_currency=jpy&days=30 HTTP/1.1"
        );
        assert!(series.is_empty());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let (base_url, server) =
            serve_once("429 Too Many Requests", r#"{"status":{"error_code":429}}"#).await;
        let provider = CoinGeckoProvider::new(base_url);

        let err = provider
            .fetch_market_chart(&request_for("bitcoin", Currency::Usd, TimeRange::Day))
            .await
            .unwrap_err();

        server.await.unwrap();
        assert!(format!("{:#}", err).contains("429"));
    }

    #[test]
    fn url_joins_base_and_asset_verbatim() {
        assert_eq!(
            COINGECKO.market_chart_url("https://api.coingecko.com/api/v3/", "bitcoin"),
            "https://api.coingecko.com/api/v3/coins/bitcoin/market_chart"
        );
    }
}
