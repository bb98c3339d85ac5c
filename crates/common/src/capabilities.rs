//! Platform facilities the watcher and the offline shell depend on.

use async_trait::async_trait;

use crate::error::{FeedError, FetchError, NotifyError};
use crate::models::{Asset, Notification, Permission, SignalSnapshot};

#[async_trait]
pub trait SignalSource: Send + Sync {
    async fn fetch_signals(&self) -> Result<SignalSnapshot, FeedError>;
}

#[async_trait]
pub trait Notifier: Send + Sync {
    fn name(&self) -> &str;

    async fn notify(&self, notification: &Notification) -> Result<(), NotifyError>;
}

#[async_trait]
pub trait PermissionProvider: Send + Sync {
    fn is_supported(&self) -> bool;

    async fn permission(&self) -> Permission;

    /// Asks the user. Returns the stored decision without prompting when one exists.
    async fn request_permission(&self) -> Permission;
}

/// Blocking, user-visible message (the `alert()` of a page).
#[async_trait]
pub trait Dialog: Send + Sync {
    async fn alert(&self, message: &str);
}

#[async_trait]
pub trait AssetFetcher: Send + Sync {
    async fn fetch(&self, path: &str) -> Result<Asset, FetchError>;
}
