use common::models::{Signal, SignalRow, SignalSnapshot};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::traits::RemoteResponse;

/// Body of `GET /api/live-signals`. Rows stay raw JSON so one malformed row only drops
/// itself; extra per-row fields (trend, message, moving averages) are ignored.
#[derive(Deserialize, Debug)]
pub struct LiveSignalsResponse {
    #[serde(default)]
    pub signals: Option<Vec<Value>>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct SignalRowResponse {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub signal: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub time: Option<String>,
}

impl RemoteResponse<Option<SignalRow>> for SignalRowResponse {
    fn to_model(&self) -> Option<SignalRow> {
        let symbol = self.symbol.clone()?;
        Some(SignalRow {
            symbol,
            signal: self.signal.as_deref().map(Signal::from).unwrap_or_default(),
            price: self.price,
            time: self.time.clone(),
        })
    }
}

impl RemoteResponse<SignalSnapshot> for LiveSignalsResponse {
    fn to_model(&self) -> SignalSnapshot {
        let signals = self
            .signals
            .iter()
            .flatten()
            .filter_map(|raw| match SignalRowResponse::deserialize(raw) {
                Ok(row) => row.to_model(),
                Err(e) => {
                    warn!("Skipping malformed signal row {}: {}", raw, e);
                    None
                }
            })
            .collect();

        SignalSnapshot {
            signals,
            error: self.error.clone(),
        }
    }
}
