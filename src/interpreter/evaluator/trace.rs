use std::fmt;

use log::trace;

/// Log target of the execution trace.
///
/// Enable it with `RUST_LOG=prog::exec=trace` or the `--trace` flag.
pub const TRACE_TARGET: &str = "prog::exec";

/// Writes one trace line per evaluated node, indented by nesting depth.
#[derive(Debug, Default)]
pub struct Tracer {
    depth: usize,
}

impl Tracer {
    /// Logs `message` at the current depth.
    pub fn log(&self, message: fmt::Arguments<'_>) {
        trace!(target: TRACE_TARGET, "{:indent$}{}", "", message, indent = self.depth * 2);
    }

    /// Increases the indentation of subsequent lines.
    pub fn indent(&mut self) {
        self.depth += 1;
    }

    /// Decreases the indentation of subsequent lines.
    pub fn unindent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
