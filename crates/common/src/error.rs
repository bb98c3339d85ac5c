use thiserror::Error;

/// All of these are soft: the tick is skipped.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("HTTP {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("could not parse signals body: {0}")]
    Parse(String),
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("{channel} delivery failed: {reason}")]
    Delivery { channel: String, reason: String },
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request for {path} failed: {reason}")]
    Transport { path: String, reason: String },
    #[error("invalid asset path {0}")]
    InvalidPath(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} is not a valid URL: {source}")]
    InvalidUrl {
        key: &'static str,
        #[source]
        source: url::ParseError,
    },
    #[error("{key} must be {expected}, got {value:?}")]
    InvalidValue {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}
