pub mod asset;
pub mod notification;
pub mod permission;
pub mod signal;

pub use asset::Asset;
pub use notification::Notification;
pub use permission::Permission;
pub use signal::{Signal, SignalRow, SignalSnapshot};
