use std::sync::Arc;

use crate::{logger::Logger, sink::LogSink};


/// Starts with no logger and debug output disabled, and lives for the whole process.
static GLOBAL_SINK: LogSink = LogSink::new();

/// The process-wide default [`LogSink`].
///
/// Driver components which are not handed a sink explicitly emit their messages here.
#[inline]
#[must_use]
pub fn global() -> &'static LogSink {
    &GLOBAL_SINK
}

/// Install (or, with `None`, remove) the logger of the process-wide sink.
///
/// See [`LogSink::set_logger`].
#[inline]
pub fn set_logger(logger: Option<Arc<dyn Logger>>) {
    GLOBAL_SINK.set_logger(logger);
}

/// Enable or disable debug messages on the process-wide sink. Only meaningful if a logger is
/// also set.
#[inline]
pub fn set_debug(debug: bool) {
    GLOBAL_SINK.set_debug(debug);
}
