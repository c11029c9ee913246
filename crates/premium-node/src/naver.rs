use crate::fetcher::HttpFetcher;
use crate::price_provider::{decode, parse_decimal, PriceProvider};
use async_trait::async_trait;
use kimp_common::{Feed, FeedError};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

/// Naver 환율 응답 (필요한 필드만)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NaverFxResponse {
    exchange_info: Option<ExchangeInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExchangeInfo {
    close_price: Option<String>,
}

/// USD/KRW 환율을 Naver 증권에서 가져온다
pub struct NaverExchangeRate {
    fetcher: Arc<dyn HttpFetcher>,
    url: String,
    user_agent: String,
}

impl NaverExchangeRate {
    pub fn new(
        fetcher: Arc<dyn HttpFetcher>,
        url: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            url: url.into(),
            user_agent: user_agent.into(),
        }
    }
}

/// "1,380.50" 같은 천 단위 구분 문자열을 파싱
pub fn parse_close_price(raw: &str) -> Result<Decimal, FeedError> {
    let digits: String = raw.chars().filter(|c| *c != ',').collect();
    parse_decimal(Feed::ExchangeRate, "closePrice", &digits).map_err(|e| match e {
        FeedError::InvalidNumber { feed, field, .. } => FeedError::InvalidNumber {
            feed,
            field,
            value: raw.to_string(),
        },
        other => other,
    })
}

#[async_trait]
impl PriceProvider for NaverExchangeRate {
    async fn fetch_quote(&self) -> Result<Decimal, FeedError> {
        let body = self
            .fetcher
            .get_json(&self.url, &[("User-Agent", self.user_agent.as_str())])
            .await?;

        let response: NaverFxResponse = decode(&self.url, body)?;
        let close_price = response
            .exchange_info
            .and_then(|info| info.close_price)
            .ok_or(FeedError::MissingField {
                feed: Feed::ExchangeRate,
                field: "closePrice",
            })?;

        let rate = parse_close_price(&close_price)?;
        info!("💱 USD/KRW exchange rate: {}", rate);
        Ok(rate)
    }

    fn feed(&self) -> Feed {
        Feed::ExchangeRate
    }
}
