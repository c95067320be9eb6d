//! goserde-logging - Log output for the goserde binary
//!
//! This crate provides:
//! - [`init_logging`] to install a stderr subscriber filtered by [`LogLevel`]
//! - [`ReloadHandle`] to change the level after installation
//! - [`level_filter`] to convert [`LogLevel`] into a tracing filter

mod filter;
mod reload;
mod subscriber;

pub use filter::level_filter;
pub use goserde_core::LogLevel;
pub use reload::ReloadHandle;
pub use subscriber::init_logging;
