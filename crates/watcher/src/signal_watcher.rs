use std::sync::Arc;
use std::time::Duration;

use common::capabilities::{Notifier, PermissionProvider, SignalSource};
use common::models::{Notification, Permission};
use tokio::time;
use tracing::{debug, info, warn};

use crate::signal_state::SignalState;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    Skipped,
    Failed,
    Completed { notified: usize },
}

pub struct SignalWatcher {
    source: Arc<dyn SignalSource>,
    notifier: Arc<dyn Notifier>,
    permissions: Arc<dyn PermissionProvider>,
    icon: String,
    poll_interval: Duration,
}

impl SignalWatcher {
    pub fn new(
        source: Arc<dyn SignalSource>,
        notifier: Arc<dyn Notifier>,
        permissions: Arc<dyn PermissionProvider>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            source,
            notifier,
            permissions,
            icon: icon.into(),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub async fn poll_once(&self, state: &mut SignalState) -> PollOutcome {
        if !self.permissions.is_supported() {
            debug!("Notifications not supported, skipping poll.");
            return PollOutcome::Skipped;
        }

        if self.permissions.permission().await != Permission::Granted {
            debug!("Notifications not granted yet, skipping poll.");
            return PollOutcome::Skipped;
        }

        let snapshot = match self.source.fetch_signals().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("Error during live signal poll: {}", e);
                return PollOutcome::Failed;
            }
        };

        if let Some(ref error) = snapshot.error {
            warn!("Signals endpoint reported: {}", error);
        }

        let mut notified = 0;
        for row in &snapshot.signals {
            if !state.observe(&row.symbol, row.signal) {
                continue;
            }

            info!("{} changed to {}", row.symbol, row.signal);
            let notification = Notification::for_signal(row, &self.icon);
            if let Err(e) = self.notifier.notify(&notification).await {
                warn!("Failed to notify via {}: {}", self.notifier.name(), e);
            }
            notified += 1;
        }

        PollOutcome::Completed { notified }
    }

    /// Sleeps `poll_interval` after each poll finishes, so polls never overlap.
    pub async fn start_polling(&self) {
        info!(
            "Live signal polling started, every {}s",
            self.poll_interval.as_secs()
        );
        let mut state = SignalState::new();

        loop {
            let outcome = self.poll_once(&mut state).await;
            debug!("Poll finished: {:?} ({} symbols tracked)", outcome, state.len());
            time::sleep(self.poll_interval).await;
        }
    }
}
