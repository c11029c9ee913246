//! 표준 출력용 텍스트 리포트

use kimp_common::KimchiPremium;
use rust_decimal::{Decimal, RoundingStrategy};

pub const CALCULATING: &str = "김치 프리미엄 계산 중...";
pub const FAILED: &str = "김치 프리미엄 계산 실패.";

fn two_places(value: Decimal) -> String {
    format!(
        "{:.2}",
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// 결과를 출력할 줄들로 변환
pub fn render(result: Option<&KimchiPremium>) -> Vec<String> {
    match result {
        Some(premium) => vec![
            format!("현재 김프: {}%", two_places(premium.premium_pct)),
            format!("환율: {} KRW/USD", two_places(premium.exchange_rate)),
        ],
        None => vec![FAILED.to_string()],
    }
}
