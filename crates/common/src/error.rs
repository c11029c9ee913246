use crate::types::Feed;
use rust_decimal::Decimal;
use thiserror::Error;

/// 개별 피드 조회 실패
///
/// Extractors convert every variant into an absent value; this type never
/// crosses the extractor boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeedError {
    /// Transport failure or non-2xx status
    #[error("API request failed [{url}]: {reason}")]
    Network { url: String, reason: String },

    /// Body was not JSON or did not match the expected shape
    #[error("Malformed response from [{url}]: {reason}")]
    Decode { url: String, reason: String },

    /// Expected field absent or empty
    #[error("Field `{field}` missing from {feed} response")]
    MissingField { feed: Feed, field: &'static str },

    /// Field present but not a decimal number
    #[error("Field `{field}` of {feed} response is not a number: {value:?}")]
    InvalidNumber {
        feed: Feed,
        field: &'static str,
        value: String,
    },
}

impl FeedError {
    /// Requested URL for transport-level failures
    pub fn url(&self) -> Option<&str> {
        match self {
            FeedError::Network { url, .. } | FeedError::Decode { url, .. } => Some(url),
            _ => None,
        }
    }
}

/// 프리미엄 계산 실패
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PremiumError {
    #[error("{} ({0} feed missing)", .0.unavailable_message())]
    MissingInput(Feed),

    /// Global price or exchange rate would make the denominator non-positive
    #[error("{feed} value must be positive, got {value}")]
    NonPositive { feed: Feed, value: Decimal },

    #[error("Premium arithmetic overflowed")]
    Overflow,
}
