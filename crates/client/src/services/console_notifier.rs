use async_trait::async_trait;
use common::capabilities::Notifier;
use common::error::NotifyError;
use common::models::Notification;
use tracing::info;

pub struct ConsoleNotifier;

pub fn render(notification: &Notification) -> String {
    format!(
        "[{}] 🔔 {} | {}",
        notification.created_at.format("%H:%M:%S"),
        notification.title,
        notification.body
    )
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    fn name(&self) -> &str {
        "console"
    }

    async fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        println!("{}", render(notification));
        info!(title = %notification.title, "Notification shown");
        Ok(())
    }
}
