use chrono::{DateTime, Utc};

use super::SignalRow;

pub const DEFAULT_ICON: &str = "/static/icons/icon-192.png";

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub icon: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(title: impl Into<String>, body: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            icon: icon.into(),
            created_at: Utc::now(),
        }
    }

    pub fn for_signal(row: &SignalRow, icon: &str) -> Self {
        let price = row
            .price
            .map(|p| p.to_string())
            .unwrap_or_else(|| "n/a".to_string());
        let time = row.time.as_deref().unwrap_or("n/a");

        Self::new(
            format!("Signal: {} on {}", row.signal, row.symbol),
            format!("Price: {} at {}", price, time),
            icon,
        )
    }

    pub fn test(icon: &str) -> Self {
        Self::new(
            "Trading alert 🔔",
            "This is a test notification from your trading app.",
            icon,
        )
    }
}
