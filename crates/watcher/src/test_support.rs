use std::sync::Mutex;

use async_trait::async_trait;
use common::capabilities::{Dialog, Notifier, PermissionProvider, SignalSource};
use common::error::{FeedError, NotifyError};
use common::models::{Notification, Permission, SignalSnapshot};
use mockall::mock;

mock! {
    pub Source {}

    #[async_trait]
    impl SignalSource for Source {
        async fn fetch_signals(&self) -> Result<SignalSnapshot, FeedError>;
    }
}

mock! {
    pub Permissions {}

    #[async_trait]
    impl PermissionProvider for Permissions {
        fn is_supported(&self) -> bool;
        async fn permission(&self) -> Permission;
        async fn request_permission(&self) -> Permission;
    }
}

pub fn granted() -> MockPermissions {
    let mut permissions = MockPermissions::new();
    permissions.expect_is_supported().return_const(true);
    permissions
        .expect_permission()
        .returning(|| Permission::Granted);
    permissions
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<Notification>>,
    pub fail: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn titles(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.title.clone())
            .collect()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    fn name(&self) -> &str {
        "recording"
    }

    async fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        self.sent.lock().unwrap().push(notification.clone());
        if self.fail {
            return Err(NotifyError::Delivery {
                channel: "recording".to_string(),
                reason: "offline".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingDialog {
    pub messages: Mutex<Vec<String>>,
}

impl RecordingDialog {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl Dialog for RecordingDialog {
    async fn alert(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
