pub mod console_notifier;
pub mod notification_center;
pub mod telegram_service;
pub mod terminal;
