use crate::diagnostics::DiagnosticSink;
use async_trait::async_trait;
use kimp_common::{Feed, FeedError};
use rust_decimal::Decimal;
use std::str::FromStr;

/// 하나의 피드에서 숫자 하나를 가져오는 인터페이스
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Fetch and extract the feed's value
    async fn fetch_quote(&self) -> Result<Decimal, FeedError>;

    /// Which feed this provider serves
    fn feed(&self) -> Feed;
}

/// 실패를 sink에 보고하고 `None`으로 바꾼다
///
/// This is the extractor boundary: no error escapes it.
pub async fn fetch_or_none(
    provider: &dyn PriceProvider,
    sink: &dyn DiagnosticSink,
) -> Option<Decimal> {
    match provider.fetch_quote().await {
        Ok(value) => Some(value),
        Err(e) => {
            sink.feed_failed(provider.feed(), &e);
            None
        }
    }
}

/// 부호, 숫자, 소수점 하나만 허용
///
/// `Decimal::from_str` also takes `_` separators, which no feed sends.
fn is_plain_decimal(text: &str) -> bool {
    let unsigned = text.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(text);
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

    match unsigned.split_once('.') {
        Some((int, frac)) => all_digits(int) && all_digits(frac),
        None => all_digits(unsigned),
    }
}

/// 문자열 필드를 Decimal로 파싱
pub(crate) fn parse_decimal(
    feed: Feed,
    field: &'static str,
    raw: &str,
) -> Result<Decimal, FeedError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FeedError::MissingField { feed, field });
    }

    let invalid = || FeedError::InvalidNumber {
        feed,
        field,
        value: raw.to_string(),
    };

    if !is_plain_decimal(trimmed) {
        return Err(invalid());
    }
    Decimal::from_str(trimmed).map_err(|_| invalid())
}

/// JSON 값을 응답 스키마로 디코딩
pub(crate) fn decode<T: serde::de::DeserializeOwned>(
    url: &str,
    body: serde_json::Value,
) -> Result<T, FeedError> {
    serde_json::from_value(body).map_err(|e| FeedError::Decode {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::MockDiagnosticSink;
    use mockall::mock;

    mock! {
        Provider {}

        #[async_trait]
        impl PriceProvider for Provider {
            async fn fetch_quote(&self) -> Result<Decimal, FeedError>;
            fn feed(&self) -> Feed;
        }
    }

    #[tokio::test]
    async fn test_success_passes_value_through() {
        // Given
        let mut provider = MockProvider::new();
        provider.expect_feed().return_const(Feed::Global);
        provider
            .expect_fetch_quote()
            .times(1)
            .returning(|| Ok(Decimal::new(1234, 4)));

        // 성공 시 sink는 호출되지 않아야 한다
        let sink = MockDiagnosticSink::new();

        // When
        let value = fetch_or_none(&provider, &sink).await;

        // Then
        assert_eq!(value, Some(Decimal::new(1234, 4)));
    }

    #[tokio::test]
    async fn test_failure_is_reported_and_swallowed() {
        // Given
        let mut provider = MockProvider::new();
        provider.expect_feed().return_const(Feed::ExchangeRate);
        provider.expect_fetch_quote().times(1).returning(|| {
            Err(FeedError::Network {
                url: "https://fx.invalid".to_string(),
                reason: "dns error".to_string(),
            })
        });

        let mut sink = MockDiagnosticSink::new();
        sink.expect_feed_failed()
            .withf(|feed, err| {
                *feed == Feed::ExchangeRate && err.url() == Some("https://fx.invalid")
            })
            .times(1)
            .return_const(());

        // When
        let value = fetch_or_none(&provider, &sink).await;

        // Then
        assert_eq!(value, None);
    }

    #[test]
    fn test_parse_decimal_accepts_plain_numbers() {
        assert_eq!(
            parse_decimal(Feed::Global, "price", "0.12340000").unwrap(),
            Decimal::from_str("0.1234").unwrap()
        );
        assert_eq!(
            parse_decimal(Feed::Global, "price", " 42 ").unwrap(),
            Decimal::from(42)
        );
    }

    #[test]
    fn test_parse_decimal_rejects_garbage() {
        let err = parse_decimal(Feed::Global, "price", "N/A").unwrap_err();
        assert_eq!(
            err,
            FeedError::InvalidNumber {
                feed: Feed::Global,
                field: "price",
                value: "N/A".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_decimal_rejects_separators_and_exponents() {
        for raw in ["1_8_1", "0.1_2", "1e5", "1.2.3", ".5", "5.", "--1", "0x10"] {
            let err = parse_decimal(Feed::Global, "price", raw).unwrap_err();
            assert!(
                matches!(err, FeedError::InvalidNumber { .. }),
                "{:?} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_parse_decimal_accepts_sign() {
        assert_eq!(parse_decimal(Feed::Global, "price", "-1.5").unwrap(), Decimal::new(-15, 1));
        assert_eq!(parse_decimal(Feed::Global, "price", "+7").unwrap(), Decimal::from(7));
    }

    #[test]
    fn test_parse_decimal_treats_empty_as_missing() {
        let err = parse_decimal(Feed::ExchangeRate, "closePrice", "").unwrap_err();
        assert!(matches!(err, FeedError::MissingField { .. }));
    }
}
