//! Upstream endpoints for the three feeds.
//!
//! These are compile-time constants; the binary never reads them from the
//! environment. `FeedEndpoints` exists so tests can point the extractors at
//! stub URLs.

/// Upbit KRW-TRX ticker
pub const UPBIT_TICKER_URL: &str = "https://api.upbit.com/v1/ticker?markets=KRW-TRX";
/// Binance TRXUSDT ticker price
pub const BINANCE_TICKER_URL: &str = "https://api.binance.com/api/v3/ticker/price?symbol=TRXUSDT";
/// Naver USD/KRW 환율
pub const NAVER_FX_URL: &str = "https://api.stock.naver.com/marketindex/exchange/FX_USDKRW";

/// Naver는 브라우저가 아닌 User-Agent를 차단한다
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:109.0) Gecko/20100101 Firefox/109.0";

/// 세 피드의 엔드포인트 묶음
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEndpoints {
    pub domestic_ticker: String,
    pub global_ticker: String,
    pub exchange_rate: String,
    pub user_agent: String,
}

impl Default for FeedEndpoints {
    fn default() -> Self {
        Self {
            domestic_ticker: UPBIT_TICKER_URL.to_string(),
            global_ticker: BINANCE_TICKER_URL.to_string(),
            exchange_rate: NAVER_FX_URL.to_string(),
            user_agent: BROWSER_USER_AGENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints_are_production() {
        let endpoints = FeedEndpoints::default();

        assert!(endpoints.domestic_ticker.contains("markets=KRW-TRX"));
        assert!(endpoints.global_ticker.contains("symbol=TRXUSDT"));
        assert!(endpoints.exchange_rate.ends_with("FX_USDKRW"));
        assert!(endpoints.user_agent.starts_with("Mozilla/5.0"));
    }
}
