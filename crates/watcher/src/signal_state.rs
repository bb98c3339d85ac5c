use std::collections::HashMap;

use common::models::Signal;

#[derive(Debug, Default)]
pub struct SignalState {
    last_signals: HashMap<String, Signal>,
}

impl SignalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `signal` is actionable and differs from the stored one. `none` is never stored.
    pub fn observe(&mut self, symbol: &str, signal: Signal) -> bool {
        if !signal.is_actionable() {
            return false;
        }

        match self.last_signals.get(symbol) {
            Some(prev) if *prev == signal => false,
            _ => {
                self.last_signals.insert(symbol.to_string(), signal);
                true
            }
        }
    }

    pub fn get(&self, symbol: &str) -> Option<Signal> {
        self.last_signals.get(symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.last_signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_signals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_actionable_observation_is_a_change() {
        let mut state = SignalState::new();
        assert!(state.observe("AAPL", Signal::Buy));
        assert!(state.observe("MSFT", Signal::Sell));
        assert_eq!(state.get("AAPL"), Some(Signal::Buy));
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn repeated_signal_is_not_a_change() {
        let mut state = SignalState::new();
        assert!(state.observe("AAPL", Signal::Sell));
        assert!(!state.observe("AAPL", Signal::Sell));
        assert!(!state.observe("AAPL", Signal::Sell));
    }

    #[test]
    fn flips_are_changes() {
        let mut state = SignalState::new();
        assert!(state.observe("AAPL", Signal::Buy));
        assert!(state.observe("AAPL", Signal::Sell));
        assert!(state.observe("AAPL", Signal::Buy));
        assert_eq!(state.get("AAPL"), Some(Signal::Buy));
    }

    #[test]
    fn none_never_touches_state() {
        let mut state = SignalState::new();
        assert!(!state.observe("AAPL", Signal::None));
        assert!(state.is_empty());

        state.observe("AAPL", Signal::Sell);
        assert!(!state.observe("AAPL", Signal::None));
        assert_eq!(state.get("AAPL"), Some(Signal::Sell));
        // none between two SELLs does not reset the symbol
        assert!(!state.observe("AAPL", Signal::Sell));
    }

    #[test]
    fn aapl_sequence_fires_on_ticks_one_three_and_six() {
        let mut state = SignalState::new();
        let ticks = [
            Signal::Buy,
            Signal::Buy,
            Signal::Sell,
            Signal::None,
            Signal::Sell,
            Signal::Buy,
        ];

        let fired: Vec<usize> = ticks
            .iter()
            .enumerate()
            .filter(|(_, signal)| state.observe("AAPL", **signal))
            .map(|(i, _)| i + 1)
            .collect();

        assert_eq!(fired, [1, 3, 6]);
    }

    #[test]
    fn symbols_are_tracked_independently() {
        let mut state = SignalState::new();
        assert!(state.observe("AAPL", Signal::Buy));
        assert!(state.observe("TSLA", Signal::Buy));
        assert!(!state.observe("AAPL", Signal::Buy));
        assert!(state.observe("TSLA", Signal::Sell));
        assert_eq!(state.get("AAPL"), Some(Signal::Buy));
    }
}
