//! Browser logging.
//!
//! `tracing` events are formatted by `tracing-subscriber` and forwarded to the
//! devtools console, one console call per event, at the matching console
//! level. There is no wall clock in `wasm32-unknown-unknown`, so timestamps
//! are left to the console.

use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::{EnvFilter, fmt::MakeWriter};

/// Filter used unless `TRAINER_LOG` was set at build time.
const DEFAULT_FILTER: &str = "info";

/// Hands out one [`ConsoleWriter`] per event.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleMakeWriter;

/// Buffers one formatted event and emits it on flush or drop.
#[derive(Debug)]
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }

    /// Text that would be sent to the console.
    fn pending(&self) -> String {
        String::from_utf8_lossy(&self.buffer).trim_end().to_string()
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let line = self.pending().into();
        match self.level {
            Level::ERROR => web_sys::console::error_1(&line),
            Level::WARN => web_sys::console::warn_1(&line),
            Level::INFO => web_sys::console::info_1(&line),
            _ => web_sys::console::debug_1(&line),
        }
        self.buffer.clear();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = io::Write::flush(self);
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Install the console subscriber and a panic hook that logs through it.
pub fn init() {
    let filter = EnvFilter::new(option_env!("TRAINER_LOG").unwrap_or(DEFAULT_FILTER));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .with_writer(ConsoleMakeWriter)
        .try_init();
    if let Err(err) = installed {
        web_sys::console::warn_1(&format!("logging already initialized: {err}").into());
    }

    // Panic payloads are otherwise truncated in the browser.
    std::panic::set_hook(Box::new(|info| {
        let payload = info
            .payload()
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| info.payload().downcast_ref::<&str>().copied())
            .unwrap_or("unknown panic");
        match info.location() {
            Some(location) => tracing::error!(
                file = location.file(),
                line = location.line(),
                column = location.column(),
                "panic: {payload}"
            ),
            None => tracing::error!("panic: {payload}"),
        }
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tracing::callsite::{Callsite, Identifier};
    use tracing::field::FieldSet;
    use tracing::metadata::Kind;
    use tracing::subscriber::Interest;

    #[test]
    fn writer_buffers_until_flush() {
        let mut writer = ConsoleWriter::new(Level::WARN);
        writer.write_all(b"first part ").unwrap();
        writer.write_all(b"second part\n").unwrap();
        assert_eq!(writer.pending(), "first part second part");
        // Clear without touching the console, which only exists in a browser.
        writer.buffer.clear();
        assert!(writer.flush().is_ok());
    }

    struct WarnCallsite;

    static WARN_CALLSITE: WarnCallsite = WarnCallsite;

    static WARN_EVENT: Metadata<'static> = Metadata::new(
        "warn event",
        "frontend::logging",
        Level::WARN,
        None,
        None,
        None,
        FieldSet::new(&[], Identifier(&WARN_CALLSITE)),
        Kind::EVENT,
    );

    impl Callsite for WarnCallsite {
        fn set_interest(&self, _: Interest) {}

        fn metadata(&self) -> &Metadata<'_> {
            &WARN_EVENT
        }
    }

    #[test]
    fn writer_takes_event_level() {
        let writer = ConsoleMakeWriter.make_writer_for(&WARN_EVENT);
        assert_eq!(writer.level, Level::WARN);
    }

    #[test]
    fn writer_without_metadata_logs_at_info() {
        let writer = ConsoleMakeWriter.make_writer();
        assert_eq!(writer.level, Level::INFO);
    }
}
