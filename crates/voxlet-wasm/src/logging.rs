//! Tracing output for the browser console.
//!
//! Each formatted event is buffered into a [`ConsoleLine`] and emitted as a
//! single console call when the line is dropped, routed by level so the
//! browser's own filtering (errors, warnings, verbose) keeps working.

use std::io::{self, Write};

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::writer::MakeWriter;

/// Console method an event is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Debug,
}

impl ConsoleMethod {
    pub fn for_level(level: &Level) -> Self {
        if *level == Level::ERROR {
            Self::Error
        } else if *level == Level::WARN {
            Self::Warn
        } else if *level == Level::INFO {
            Self::Info
        } else {
            Self::Debug
        }
    }
}

/// Receives one finished line.
pub type ConsoleSink = fn(ConsoleMethod, &str);

/// [`MakeWriter`] producing one [`ConsoleLine`] per event.
#[derive(Clone, Copy)]
pub struct ConsoleWriter {
    sink: ConsoleSink,
}

impl ConsoleWriter {
    pub fn new(sink: ConsoleSink) -> Self {
        Self { sink }
    }
}

impl<'a> MakeWriter<'a> for ConsoleWriter {
    type Writer = ConsoleLine;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleLine::new(self.sink, ConsoleMethod::Info)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleLine::new(self.sink, ConsoleMethod::for_level(meta.level()))
    }
}

/// One buffered console line.
pub struct ConsoleLine {
    sink: ConsoleSink,
    method: ConsoleMethod,
    buf: Vec<u8>,
}

impl ConsoleLine {
    fn new(sink: ConsoleSink, method: ConsoleMethod) -> Self {
        Self {
            sink,
            method,
            buf: Vec::new(),
        }
    }
}

impl Write for ConsoleLine {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleLine {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buf);
        let text = text.trim_end();
        if !text.is_empty() {
            (self.sink)(self.method, text);
        }
    }
}

/// Level used when the bundle was built without `VOXLET_LOG`.
pub const DEFAULT_LEVEL: Level = Level::INFO;

/// Parse a level name, falling back to [`DEFAULT_LEVEL`].
pub fn parse_level(raw: Option<&str>) -> Level {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(DEFAULT_LEVEL)
}

/// Install the global subscriber. A second call is a no-op.
pub fn init_logging(sink: ConsoleSink, max_level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_writer(ConsoleWriter::new(sink))
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .with_max_level(max_level)
        .try_init();
}

/// Sink writing to `console.*`.
#[cfg(feature = "browser")]
pub fn browser_console(method: ConsoleMethod, text: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(text);
    match method {
        ConsoleMethod::Error => console::error_1(&value),
        ConsoleMethod::Warn => console::warn_1(&value),
        ConsoleMethod::Info => console::info_1(&value),
        ConsoleMethod::Debug => console::debug_1(&value),
    }
}
