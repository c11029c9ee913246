use crate::fetcher::HttpFetcher;
use crate::price_provider::{decode, parse_decimal, PriceProvider};
use async_trait::async_trait;
use kimp_common::{Feed, FeedError};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

/// Upbit 티커 응답 원소
#[derive(Debug, Deserialize)]
struct UpbitTicker {
    trade_price: Option<TradePrice>,
}

/// `trade_price`는 보통 JSON 숫자지만 문자열로 올 수도 있다
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TradePrice {
    Number(serde_json::Number),
    Text(String),
}

impl TradePrice {
    fn to_decimal(&self) -> Result<Decimal, FeedError> {
        match self {
            TradePrice::Text(text) => parse_decimal(Feed::Domestic, "trade_price", text),
            TradePrice::Number(number) => {
                let text = number.to_string();
                Decimal::from_str(&text)
                    .or_else(|_| Decimal::from_scientific(&text))
                    .map_err(|_| FeedError::InvalidNumber {
                        feed: Feed::Domestic,
                        field: "trade_price",
                        value: text,
                    })
            }
        }
    }
}

/// Upbit에서 KRW 체결가를 가져오는 클라이언트
pub struct UpbitPrice {
    fetcher: Arc<dyn HttpFetcher>,
    url: String,
}

impl UpbitPrice {
    pub fn new(fetcher: Arc<dyn HttpFetcher>, url: impl Into<String>) -> Self {
        Self {
            fetcher,
            url: url.into(),
        }
    }
}

#[async_trait]
impl PriceProvider for UpbitPrice {
    async fn fetch_quote(&self) -> Result<Decimal, FeedError> {
        let body = self.fetcher.get_json(&self.url, &[]).await?;
        let tickers: Vec<UpbitTicker> = decode(&self.url, body)?;

        let trade_price = tickers
            .into_iter()
            .next()
            .and_then(|ticker| ticker.trade_price)
            .ok_or(FeedError::MissingField {
                feed: Feed::Domestic,
                field: "trade_price",
            })?
            .to_decimal()?;

        info!("📊 Upbit trade price: {} KRW", trade_price);
        Ok(trade_price)
    }

    fn feed(&self) -> Feed {
        Feed::Domestic
    }
}
