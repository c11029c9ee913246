use rust_decimal::Decimal;
use std::fmt;

/// 가격/환율 피드 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feed {
    /// USD/KRW 환율 (Naver)
    ExchangeRate,
    /// 국내 거래소 가격 (Upbit, KRW)
    Domestic,
    /// 해외 거래소 가격 (Binance, USDT)
    Global,
}

impl Feed {
    pub fn name(&self) -> &'static str {
        match self {
            Feed::ExchangeRate => "naver-fx",
            Feed::Domestic => "upbit",
            Feed::Global => "binance",
        }
    }

    /// 사용자에게 보여줄 실패 메시지
    pub fn unavailable_message(&self) -> &'static str {
        match self {
            Feed::ExchangeRate => "환율 정보를 가져올 수 없습니다.",
            Feed::Domestic => "업비트 가격 정보를 가져올 수 없습니다.",
            Feed::Global => "바이낸스 가격 정보를 가져올 수 없습니다.",
        }
    }
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 한 번의 계산 결과
///
/// Only exists when all three feeds produced a value; there is no partially
/// filled variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KimchiPremium {
    /// Rounded to two decimal places
    pub premium_pct: Decimal,
    /// KRW per USD used for the conversion
    pub exchange_rate: Decimal,
    pub domestic_price: Decimal,
    pub global_price: Decimal,
}
