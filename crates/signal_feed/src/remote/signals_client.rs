use std::time::Duration;

use async_trait::async_trait;
use common::capabilities::SignalSource;
use common::error::FeedError;
use common::models::SignalSnapshot;
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use crate::remote::{LIVE_SIGNALS_PATH, LiveSignalsResponse};
use crate::traits::RemoteResponse;

#[derive(Clone)]
pub struct SignalsClient {
    client: Client,
    endpoint: Url,
}

impl SignalsClient {
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self, FeedError> {
        let endpoint = base_url
            .join(LIVE_SIGNALS_PATH)
            .map_err(|e| FeedError::Transport(format!("invalid endpoint: {}", e)))?;

        let client = Client::builder()
            .user_agent("live_signal_watcher/0.1.0")
            .timeout(timeout)
            .build()
            .map_err(|e| FeedError::Transport(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl SignalSource for SignalsClient {
    async fn fetch_signals(&self) -> Result<SignalSnapshot, FeedError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|e| FeedError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Signals endpoint answered {}", status);
            return Err(FeedError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FeedError::Transport(e.to_string()))?;

        let data = serde_json::from_str::<LiveSignalsResponse>(&body)
            .map_err(|e| FeedError::Parse(e.to_string()))?;

        let snapshot = data.to_model();
        debug!("Fetched {} signal rows", snapshot.signals.len());
        Ok(snapshot)
    }
}
