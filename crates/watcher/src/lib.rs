pub mod permission_gate;
pub mod signal_state;
pub mod signal_watcher;

pub use permission_gate::{GateError, PermissionGate};
pub use signal_state::SignalState;
pub use signal_watcher::{PollOutcome, SignalWatcher};

#[cfg(test)]
pub(crate) mod test_support;
