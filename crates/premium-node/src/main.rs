use anyhow::{Context, Result};
use premium_node::{report, FeedEndpoints, PremiumCalculator, ReqwestFetcher, TracingSink};
use std::sync::Arc;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 진단 로그는 stderr, 결과는 stdout
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    info!("Kimchi premium calculator v{}", env!("CARGO_PKG_VERSION"));
    println!("{}", report::CALCULATING);

    let fetcher = ReqwestFetcher::new().context("Failed to create HTTP client")?;
    let calculator = PremiumCalculator::new(
        Arc::new(fetcher),
        &FeedEndpoints::default(),
        Arc::new(TracingSink),
    );

    let result = calculator.calculate().await;
    for line in report::render(result.as_ref()) {
        println!("{}", line);
    }

    Ok(())
}
