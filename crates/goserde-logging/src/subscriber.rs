//! Subscriber installation

use crate::filter::level_filter;
use crate::reload::ReloadHandle;
use goserde_core::LogLevel;
use std::io::IsTerminal;
use tracing::Subscriber;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{Registry, fmt, reload};

/// Install the global subscriber, writing to stderr at `level`.
///
/// Generated code goes to stdout, so log output never mixes with it.
/// Returns `false` when a global subscriber was already installed; the
/// existing one is kept and the call is otherwise a no-op.
pub fn init_logging(level: LogLevel) -> bool {
    let ansi = std::io::stderr().is_terminal();
    let (subscriber, handle) = build_subscriber(level, std::io::stderr, ansi);

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return false;
    }
    ReloadHandle::global().set_handle(handle);
    true
}

/// A fmt subscriber behind a reloadable level filter.
pub(crate) fn build_subscriber<W>(
    level: LogLevel,
    writer: W,
    ansi: bool,
) -> (
    impl Subscriber + Send + Sync + 'static,
    reload::Handle<LevelFilter, Registry>,
)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let (filter, handle) = reload::Layer::new(level_filter(level));
    let subscriber = tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_writer(writer)
            .with_ansi(ansi)
            .with_target(false),
    );
    (subscriber, handle)
}

#[cfg(test)]
#[path = "subscriber/subscriber_tests.rs"]
mod subscriber_tests;
