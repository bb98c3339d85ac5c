pub mod signals_client;
pub mod signals_response;

pub use signals_client::SignalsClient;
pub use signals_response::{LiveSignalsResponse, SignalRowResponse};

pub const LIVE_SIGNALS_PATH: &str = "/api/live-signals";
