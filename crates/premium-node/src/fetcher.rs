use async_trait::async_trait;
use kimp_common::FeedError;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

/// JSON GET 요청 인터페이스
///
/// Extractors only see this trait so they can run against stub transports.
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    /// GET `url` with the given headers and return the decoded JSON body.
    async fn get_json(&self, url: &str, headers: &[(&str, &str)]) -> Result<Value, FeedError>;
}

/// reqwest 기반 구현
///
/// No timeout and no retry: a request waits until the transport resolves.
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new() -> reqwest::Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }
}

fn network_error(url: &str, err: reqwest::Error) -> FeedError {
    FeedError::Network {
        url: url.to_string(),
        reason: err.to_string(),
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn get_json(&self, url: &str, headers: &[(&str, &str)]) -> Result<Value, FeedError> {
        debug!("🌐 GET {}", url);

        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| network_error(url, e))?;

        let body = response.text().await.map_err(|e| network_error(url, e))?;

        serde_json::from_str(&body).map_err(|e| FeedError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}
