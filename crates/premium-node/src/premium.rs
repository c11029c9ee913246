use crate::binance::BinancePrice;
use crate::diagnostics::DiagnosticSink;
use crate::fetcher::HttpFetcher;
use crate::naver::NaverExchangeRate;
use crate::price_provider::{fetch_or_none, PriceProvider};
use crate::upbit::UpbitPrice;
use kimp_common::{Feed, FeedEndpoints, KimchiPremium, PremiumError};
use rust_decimal::{Decimal, RoundingStrategy};
use std::sync::Arc;
use tracing::info;

/// 소수점 둘째 자리, 0.5는 0에서 멀어지는 방향으로 반올림
///
/// `179.725 -> 179.73`, `-179.725 -> -179.73`
pub fn round_premium(raw: Decimal) -> Decimal {
    raw.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// 김치 프리미엄(%) 계산
///
/// `((domestic - global * rate) / (global * rate)) * 100`, rounded with
/// [`round_premium`]. A zero domestic price is valid (-100%); the global price
/// and the rate must be positive because their product is the denominator.
pub fn premium_percent(
    domestic: Decimal,
    global: Decimal,
    rate: Decimal,
) -> Result<Decimal, PremiumError> {
    if global <= Decimal::ZERO {
        return Err(PremiumError::NonPositive {
            feed: Feed::Global,
            value: global,
        });
    }
    if rate <= Decimal::ZERO {
        return Err(PremiumError::NonPositive {
            feed: Feed::ExchangeRate,
            value: rate,
        });
    }

    let converted = global.checked_mul(rate).ok_or(PremiumError::Overflow)?;
    let raw = domestic
        .checked_sub(converted)
        .and_then(|diff| diff.checked_div(converted))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or(PremiumError::Overflow)?;

    Ok(round_premium(raw))
}

/// 세 값이 모두 있을 때만 결과를 만든다
pub fn evaluate(
    exchange_rate: Option<Decimal>,
    domestic_price: Option<Decimal>,
    global_price: Option<Decimal>,
) -> Result<KimchiPremium, PremiumError> {
    let exchange_rate = exchange_rate.ok_or(PremiumError::MissingInput(Feed::ExchangeRate))?;
    let domestic_price = domestic_price.ok_or(PremiumError::MissingInput(Feed::Domestic))?;
    let global_price = global_price.ok_or(PremiumError::MissingInput(Feed::Global))?;

    let premium_pct = premium_percent(domestic_price, global_price, exchange_rate)?;

    Ok(KimchiPremium {
        premium_pct,
        exchange_rate,
        domestic_price,
        global_price,
    })
}

/// 세 피드를 동시에 조회해서 프리미엄을 계산한다
pub struct PremiumCalculator {
    exchange_rate: Box<dyn PriceProvider>,
    domestic: Box<dyn PriceProvider>,
    global: Box<dyn PriceProvider>,
    sink: Arc<dyn DiagnosticSink>,
}

impl PremiumCalculator {
    /// Wire the Naver, Upbit and Binance extractors onto one fetcher.
    pub fn new(
        fetcher: Arc<dyn HttpFetcher>,
        endpoints: &FeedEndpoints,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self::with_providers(
            Box::new(NaverExchangeRate::new(
                fetcher.clone(),
                endpoints.exchange_rate.as_str(),
                endpoints.user_agent.as_str(),
            )),
            Box::new(UpbitPrice::new(fetcher.clone(), endpoints.domestic_ticker.as_str())),
            Box::new(BinancePrice::new(fetcher, endpoints.global_ticker.as_str())),
            sink,
        )
    }

    pub fn with_providers(
        exchange_rate: Box<dyn PriceProvider>,
        domestic: Box<dyn PriceProvider>,
        global: Box<dyn PriceProvider>,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            exchange_rate,
            domestic,
            global,
            sink,
        }
    }

    /// 한 번 계산. 실패 원인은 sink로만 나간다.
    ///
    /// A failing feed does not cancel the others; all three run to completion.
    pub async fn calculate(&self) -> Option<KimchiPremium> {
        let sink = self.sink.as_ref();
        let (exchange_rate, domestic, global) = tokio::join!(
            fetch_or_none(self.exchange_rate.as_ref(), sink),
            fetch_or_none(self.domestic.as_ref(), sink),
            fetch_or_none(self.global.as_ref(), sink),
        );

        match evaluate(exchange_rate, domestic, global) {
            Ok(premium) => {
                info!(
                    "✅ Kimchi premium {}% (upbit {} KRW, binance {} USDT, rate {} KRW/USD)",
                    premium.premium_pct,
                    premium.domestic_price,
                    premium.global_price,
                    premium.exchange_rate
                );
                Some(premium)
            }
            Err(e) => {
                self.sink.premium_unavailable(&e);
                None
            }
        }
    }
}
