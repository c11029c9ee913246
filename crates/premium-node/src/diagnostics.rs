use kimp_common::{Feed, FeedError, PremiumError};
use tracing::{error, warn};

/// 실패 진단을 받는 곳
///
/// Extractors and the aggregator report here instead of logging directly, so
/// tests can assert on failure paths.
#[cfg_attr(test, mockall::automock)]
pub trait DiagnosticSink: Send + Sync {
    /// One feed could not produce a value
    fn feed_failed(&self, feed: Feed, error: &FeedError);

    /// The premium could not be computed
    fn premium_unavailable(&self, error: &PremiumError);
}

/// `tracing`으로 내보내는 기본 sink
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn feed_failed(&self, feed: Feed, error: &FeedError) {
        warn!(feed = %feed, "❌ {} {}", feed.unavailable_message(), error);
    }

    fn premium_unavailable(&self, error: &PremiumError) {
        error!("❌ Premium unavailable: {}", error);
    }
}
