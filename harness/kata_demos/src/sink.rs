//! Line-based output sink with configurable destination.
//!
//! Output can go to stdout (default), a capture buffer (tests), or be
//! discarded. Enum dispatch keeps this frequently-used path free of
//! vtable indirection.

use parking_lot::Mutex;
use std::sync::Arc;

/// Output sink for demo results.
pub enum OutputSink {
    /// Write to stdout (default).
    Stdout,
    /// Capture into a buffer for assertions.
    Buffer(Mutex<String>),
    /// Discard all output silently.
    Silent,
}

impl OutputSink {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout => println!("{msg}"),
            Self::Buffer(buf) => {
                let mut buf = buf.lock();
                buf.push_str(msg);
                buf.push('\n');
            }
            Self::Silent => {}
        }
    }

    /// Print without newline.
    pub fn print(&self, msg: &str) {
        match self {
            Self::Stdout => print!("{msg}"),
            Self::Buffer(buf) => buf.lock().push_str(msg),
            Self::Silent => {}
        }
    }

    /// All captured output; empty for sinks that do not capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(buf) => buf.lock().clone(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }

    /// Clear captured output. No-op for non-capturing sinks.
    pub fn clear(&self) {
        if let Self::Buffer(buf) = self {
            buf.lock().clear();
        }
    }
}

/// Shared sink that can be passed around.
pub type SharedSink = Arc<OutputSink>;

/// Create a stdout sink.
pub fn stdout_sink() -> SharedSink {
    Arc::new(OutputSink::Stdout)
}

/// Create a buffer sink for capturing output.
pub fn buffer_sink() -> SharedSink {
    Arc::new(OutputSink::Buffer(Mutex::new(String::new())))
}

/// Create a sink that discards all output.
pub fn silent_sink() -> SharedSink {
    Arc::new(OutputSink::Silent)
}
