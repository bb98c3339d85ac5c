use async_trait::async_trait;
use common::capabilities::Notifier;
use common::config::TelegramConfig;
use common::error::NotifyError;
use common::models::Notification;
use teloxide::prelude::*;
use tracing::debug;

pub struct TelegramNotifier {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramNotifier {
    pub fn new(config: &TelegramConfig) -> Self {
        Self {
            bot: Bot::new(&config.bot_token),
            chat_id: ChatId(config.chat_id),
        }
    }
}

pub fn format_message(notification: &Notification) -> String {
    format!("{}\n{}", notification.title, notification.body)
}

#[async_trait]
impl Notifier for TelegramNotifier {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        self.bot
            .send_message(self.chat_id, format_message(notification))
            .await
            .map_err(|e| NotifyError::Delivery {
                channel: self.name().to_string(),
                reason: e.to_string(),
            })?;

        debug!("Sent Telegram message to {}", self.chat_id.0);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_title_then_body() {
        let n = Notification::new(
            "Signal: BUY on AAPL",
            "Price: 190.5 at 2025-01-02 14:00",
            "/i.png",
        );
        assert_eq!(format_message(&n), "Signal: BUY on AAPL\nPrice: 190.5 at 2025-01-02 14:00");
    }
}
