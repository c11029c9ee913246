use crate::fetcher::HttpFetcher;
use crate::price_provider::{decode, parse_decimal, PriceProvider};
use async_trait::async_trait;
use kimp_common::{Feed, FeedError};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

/// Binance `/api/v3/ticker/price` 응답
#[derive(Debug, Deserialize)]
struct BinanceTickerPrice {
    price: Option<String>,
}

/// Binance에서 USDT 가격을 가져오는 클라이언트
pub struct BinancePrice {
    fetcher: Arc<dyn HttpFetcher>,
    url: String,
}

impl BinancePrice {
    pub fn new(fetcher: Arc<dyn HttpFetcher>, url: impl Into<String>) -> Self {
        Self {
            fetcher,
            url: url.into(),
        }
    }
}

#[async_trait]
impl PriceProvider for BinancePrice {
    async fn fetch_quote(&self) -> Result<Decimal, FeedError> {
        let body = self.fetcher.get_json(&self.url, &[]).await?;
        let ticker: BinanceTickerPrice = decode(&self.url, body)?;

        let raw = ticker.price.ok_or(FeedError::MissingField {
            feed: Feed::Global,
            field: "price",
        })?;
        let price = parse_decimal(Feed::Global, "price", &raw)?;

        info!("📊 Binance price: {} USDT", price);
        Ok(price)
    }

    fn feed(&self) -> Feed {
        Feed::Global
    }
}
