//! Human-readable dumps of model objects.
//!
//! Entities describe themselves through [`Diagnostic::format`], writing one
//! line at a time to a [`LineSink`]. The output is for people, not parsers.
//!
//! # Implementations
//!
//! - [`TracingSink`] - forwards every line to `tracing` at `INFO`
//! - [`BufferSink`] - keeps lines in memory

use std::fmt::Display;
use tracing::info;

/// Placeholder written for absent optional fields.
pub const ABSENT: &str = "n/a";

/// Minimal "log a line" capability.
#[cfg_attr(test, mockall::automock)]
pub trait LineSink {
    fn line(&mut self, line: &str);
}

/// Diagnostic formatting hook implemented by every model object.
pub trait Diagnostic {
    fn format(&self, log: &mut dyn LineSink);

    /// Formats through the global `tracing` subscriber.
    fn log(&self) {
        self.format(&mut TracingSink);
    }
}

/// Sink that emits each line as a `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LineSink for TracingSink {
    fn line(&mut self, line: &str) {
        info!("{line}");
    }
}

/// Sink that collects lines, mostly useful in tests and for rendering dumps
/// into a string.
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    lines: Vec<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl LineSink for BufferSink {
    fn line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

pub(crate) fn display_opt<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| ABSENT.to_string(), |v| v.to_string())
}
