use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;
use crate::models::notification::DEFAULT_ICON;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_CACHE_NAME: &str = "trading-cache";

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: i64,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Url,
    pub poll_interval: Duration,
    pub http_timeout: Duration,
    pub icon: String,
    pub cache_name: String,
    pub permission_file: PathBuf,
    pub console_notifications: bool,
    pub telegram: Option<TelegramConfig>,
}

impl Config {
    /// Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let raw_url = get("SIGNALS_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&raw_url).map_err(|source| ConfigError::InvalidUrl {
            key: "SIGNALS_BASE_URL",
            source,
        })?;

        let poll_secs = parse_secs(get("POLL_INTERVAL_SECS"), "POLL_INTERVAL_SECS", 60)?;
        let timeout_secs = parse_secs(get("HTTP_TIMEOUT_SECS"), "HTTP_TIMEOUT_SECS", 10)?;
        let poll_interval = Duration::from_secs(poll_secs);
        let http_timeout = Duration::from_secs(timeout_secs);

        let console_notifications = match get("CONSOLE_NOTIFICATIONS") {
            None => true,
            Some(v) => match v.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "CONSOLE_NOTIFICATIONS",
                        expected: "a boolean",
                        value: v,
                    });
                }
            },
        };

        let telegram = match (get("TELEGRAM_BOT_TOKEN"), get("TELEGRAM_CHAT_ID")) {
            (Some(bot_token), Some(chat_id)) => {
                let chat_id = chat_id.parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                    key: "TELEGRAM_CHAT_ID",
                    expected: "a number",
                    value: chat_id.clone(),
                })?;
                Some(TelegramConfig { bot_token, chat_id })
            }
            _ => None,
        };

        Ok(Self {
            base_url,
            poll_interval,
            http_timeout,
            icon: get("NOTIFICATION_ICON").unwrap_or_else(|| DEFAULT_ICON.to_string()),
            cache_name: get("CACHE_NAME").unwrap_or_else(|| DEFAULT_CACHE_NAME.to_string()),
            permission_file: get("PERMISSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".notification-permission")),
            console_notifications,
            telegram,
        })
    }
}

fn parse_secs(raw: Option<String>, key: &'static str, default: u64) -> Result<u64, ConfigError> {
    match raw {
        None => Ok(default),
        Some(v) => match v.parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(secs),
            _ => Err(ConfigError::InvalidValue {
                key,
                expected: "a positive number of seconds",
                value: v,
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:5000/");
        assert_eq!(config.poll_interval, Duration::from_secs(60));
        assert_eq!(config.http_timeout, Duration::from_secs(10));
        assert_eq!(config.icon, "/static/icons/icon-192.png");
        assert_eq!(config.cache_name, "trading-cache");
        assert!(config.console_notifications);
        assert!(config.telegram.is_none());
    }

    #[test]
    fn telegram_needs_both_token_and_chat() {
        let config = config_from(&[("TELEGRAM_BOT_TOKEN", "abc")]).unwrap();
        assert!(config.telegram.is_none());

        let config =
            config_from(&[("TELEGRAM_BOT_TOKEN", "abc"), ("TELEGRAM_CHAT_ID", "-1001")]).unwrap();
        let telegram = config.telegram.unwrap();
        assert_eq!(telegram.chat_id, -1001);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            config_from(&[("POLL_INTERVAL_SECS", "0")]),
            Err(ConfigError::InvalidValue { key: "POLL_INTERVAL_SECS", .. })
        ));
        assert!(matches!(
            config_from(&[("SIGNALS_BASE_URL", "not a url")]),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            config_from(&[("TELEGRAM_BOT_TOKEN", "abc"), ("TELEGRAM_CHAT_ID", "me")]),
            Err(ConfigError::InvalidValue { key: "TELEGRAM_CHAT_ID", .. })
        ));
        assert!(matches!(
            config_from(&[("CONSOLE_NOTIFICATIONS", "maybe")]),
            Err(ConfigError::InvalidValue { key: "CONSOLE_NOTIFICATIONS", .. })
        ));
    }
}
