#![allow(non_snake_case)]

use super::*;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// In-memory writer shared between the subscriber and the test.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn build_subscriber___warn_level___drops_lower_levels() {
    let captured = Captured::default();
    let (subscriber, _handle) = build_subscriber(LogLevel::Warn, captured.clone(), false);

    tracing::subscriber::with_default(subscriber, || {
        tracing::warn!(kind = "channel_type", "placeholder emitted");
        tracing::info!("translation complete");
        tracing::debug!("rendered struct");
    });

    let output = captured.contents();
    assert!(output.contains("WARN"));
    assert!(output.contains("placeholder emitted"));
    assert!(output.contains("kind=\"channel_type\""));
    assert!(!output.contains("translation complete"));
    assert!(!output.contains("rendered struct"));
}

#[test]
fn build_subscriber___off___writes_nothing() {
    let captured = Captured::default();
    let (subscriber, _handle) = build_subscriber(LogLevel::Off, captured.clone(), false);

    tracing::subscriber::with_default(subscriber, || {
        tracing::error!("should not appear");
    });

    assert!(captured.contents().is_empty());
}

#[test]
fn build_subscriber___reloaded_level___takes_effect() {
    let captured = Captured::default();
    let (subscriber, handle) = build_subscriber(LogLevel::Error, captured.clone(), false);
    let reload = ReloadHandle::new();
    reload.set_handle(handle);

    tracing::subscriber::with_default(subscriber, || {
        tracing::info!("before reload");
        reload.reload_level(LogLevel::Info).unwrap();
        tracing::info!("after reload");
    });

    let output = captured.contents();
    assert!(!output.contains("before reload"));
    assert!(output.contains("after reload"));
}

#[test]
fn init_logging___called_twice___second_call_is_noop() {
    init_logging(LogLevel::Warn);

    let installed = init_logging(LogLevel::Debug);

    assert!(!installed);
    assert!(ReloadHandle::global().is_initialized());
}
