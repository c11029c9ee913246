pub mod binance;
pub mod diagnostics;
pub mod fetcher;
pub mod naver;
pub mod premium;
pub mod price_provider;
pub mod report;
pub mod upbit;

pub use diagnostics::{DiagnosticSink, TracingSink};
pub use fetcher::{HttpFetcher, ReqwestFetcher};
pub use kimp_common::{Feed, FeedEndpoints, FeedError, KimchiPremium, PremiumError};
pub use premium::PremiumCalculator;
pub use price_provider::PriceProvider;
