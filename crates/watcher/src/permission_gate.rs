use std::sync::Arc;

use common::capabilities::{Dialog, Notifier, PermissionProvider};
use common::error::NotifyError;
use common::models::{Notification, Permission};
use thiserror::Error;
use tracing::info;

pub const ENABLED_MESSAGE: &str = "Notifications enabled ✅";
pub const BLOCKED_MESSAGE: &str =
    "Notifications are blocked. You can change this in your notification settings.";

/// The display text is what the user is shown.
#[derive(Debug, Error)]
pub enum GateError {
    #[error("Notifications are not supported: no notification channel is configured.")]
    Unsupported,
    #[error("Please enable notifications first.")]
    NotGranted,
    #[error(transparent)]
    Notify(#[from] NotifyError),
}

pub struct PermissionGate {
    permissions: Arc<dyn PermissionProvider>,
    notifier: Arc<dyn Notifier>,
    dialog: Arc<dyn Dialog>,
    icon: String,
}

impl PermissionGate {
    pub fn new(
        permissions: Arc<dyn PermissionProvider>,
        notifier: Arc<dyn Notifier>,
        dialog: Arc<dyn Dialog>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            permissions,
            notifier,
            dialog,
            icon: icon.into(),
        }
    }

    /// Returns `None` when notifications are unsupported.
    pub async fn request_permission(&self) -> Option<Permission> {
        if !self.permissions.is_supported() {
            self.dialog.alert(&GateError::Unsupported.to_string()).await;
            return None;
        }

        let permission = self.permissions.request_permission().await;
        info!("Notification permission: {}", permission);

        match permission {
            Permission::Granted => self.dialog.alert(ENABLED_MESSAGE).await,
            Permission::Denied => self.dialog.alert(BLOCKED_MESSAGE).await,
            Permission::Default => {}
        }

        Some(permission)
    }

    pub async fn send_test_notification(&self) -> Result<(), GateError> {
        if !self.permissions.is_supported() {
            return self.refuse(GateError::Unsupported).await;
        }

        if self.permissions.permission().await != Permission::Granted {
            return self.refuse(GateError::NotGranted).await;
        }

        self.notifier.notify(&Notification::test(&self.icon)).await?;
        Ok(())
    }

    async fn refuse(&self, reason: GateError) -> Result<(), GateError> {
        self.dialog.alert(&reason.to_string()).await;
        Err(reason)
    }
}
