use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Signal {
    Buy,
    Sell,
    #[default]
    None,
}

impl Signal {
    pub fn is_actionable(self) -> bool {
        matches!(self, Signal::Buy | Signal::Sell)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Signal::Buy => "BUY",
            Signal::Sell => "SELL",
            Signal::None => "none",
        }
    }
}

impl From<&str> for Signal {
    fn from(raw: &str) -> Self {
        match raw {
            "BUY" => Signal::Buy,
            "SELL" => Signal::Sell,
            _ => Signal::None,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignalRow {
    pub symbol: String,
    pub signal: Signal,
    pub price: Option<f64>,
    pub time: Option<String>,
}

impl SignalRow {
    pub fn new(symbol: impl Into<String>, signal: Signal) -> Self {
        Self {
            symbol: symbol.into(),
            signal,
            price: None,
            time: None,
        }
    }

    pub fn with_quote(mut self, price: f64, time: impl Into<String>) -> Self {
        self.price = Some(price);
        self.time = Some(time.into());
        self
    }
}

/// Rows in the order the server sent them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignalSnapshot {
    pub signals: Vec<SignalRow>,
    pub error: Option<String>,
}
