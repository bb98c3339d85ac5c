use std::sync::Arc;

use async_trait::async_trait;
use common::capabilities::Notifier;
use common::error::NotifyError;
use common::models::Notification;
use futures_util::future::join_all;
use tracing::{debug, warn};

#[derive(Default)]
pub struct NotificationCenter {
    channels: Vec<Arc<dyn Notifier>>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_channel(mut self, channel: Arc<dyn Notifier>) -> Self {
        self.channels.push(channel);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    pub fn channel_names(&self) -> Vec<&str> {
        self.channels.iter().map(|c| c.name()).collect()
    }
}

#[async_trait]
impl Notifier for NotificationCenter {
    fn name(&self) -> &str {
        "center"
    }

    /// Fails only when no channel delivered.
    async fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        if self.channels.is_empty() {
            return Err(NotifyError::Delivery {
                channel: self.name().to_string(),
                reason: "no channels configured".to_string(),
            });
        }

        let results = join_all(self.channels.iter().map(|c| c.notify(notification))).await;

        let mut last_error = None;
        let mut delivered = 0;
        for (channel, result) in self.channels.iter().zip(results) {
            match result {
                Ok(()) => {
                    debug!("Sent notification via {}", channel.name());
                    delivered += 1;
                }
                Err(e) => {
                    warn!("Failed to send notification via {}: {}", channel.name(), e);
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            Some(e) if delivered == 0 => Err(e),
            _ => Ok(()),
        }
    }
}
