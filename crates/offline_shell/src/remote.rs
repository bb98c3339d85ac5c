use std::time::Duration;

use async_trait::async_trait;
use common::capabilities::AssetFetcher;
use common::error::FetchError;
use common::models::Asset;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use url::Url;

/// Any status comes back as an asset; only transport problems are errors.
#[derive(Clone)]
pub struct HttpAssetFetcher {
    client: Client,
    base_url: Url,
}

impl HttpAssetFetcher {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent("live_signal_watcher/0.1.0")
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport {
                path: base_url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl AssetFetcher for HttpAssetFetcher {
    async fn fetch(&self, path: &str) -> Result<Asset, FetchError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|_| FetchError::InvalidPath(path.to_string()))?;

        let transport = |e: reqwest::Error| FetchError::Transport {
            path: path.to_string(),
            reason: e.to_string(),
        };

        let response = self.client.get(url).send().await.map_err(transport)?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await.map_err(transport)?.to_vec();

        Ok(Asset {
            path: path.to_string(),
            status,
            content_type,
            body,
        })
    }
}
