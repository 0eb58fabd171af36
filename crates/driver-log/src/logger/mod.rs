mod dyn_impls;
mod memory_logger;
mod stderr_logger;
mod tracing_logger;
mod writer_logger;


pub use self::{
    memory_logger::{CapturedRecord, MemoryLogger},
    stderr_logger::StderrLogger,
    tracing_logger::{TRACING_TARGET, TracingLogger},
    writer_logger::WriterLogger,
};


use std::{fmt::Debug, panic::Location};

use crate::error::DeliveryError;


/// The call-depth hint attached to every delivered [`Record`].
///
/// The value counts the frames above the delivery call: the emission helper of the
/// [`LogSink`], and the driver code that invoked it. Loggers which attribute messages to a source
/// location by unwinding frames should skip this many. If the emission helpers ever gain or lose
/// a layer, this must change with them.
///
/// Rust loggers can instead use [`Record::location`], which already names the driver call site.
///
/// [`LogSink`]: crate::LogSink
pub const CALL_DEPTH: usize = 2;

/// A fully formatted message on its way to a [`Logger`].
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    message:    &'a str,
    call_depth: usize,
    location:   &'static Location<'static>,
}

impl<'a> Record<'a> {
    /// Create a record for `message` emitted at `location`, with the standard [`CALL_DEPTH`].
    #[inline]
    #[must_use]
    pub const fn new(message: &'a str, location: &'static Location<'static>) -> Self {
        Self {
            message,
            call_depth: CALL_DEPTH,
            location,
        }
    }

    #[inline]
    #[must_use]
    pub const fn message(&self) -> &'a str {
        self.message
    }

    /// How many frames above the delivery call the emitting call site is.
    #[inline]
    #[must_use]
    pub const fn call_depth(&self) -> usize {
        self.call_depth
    }

    /// The source location in the driver which emitted this message.
    #[inline]
    #[must_use]
    pub const fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

/// Receives human-readable messages about what the driver is doing.
///
/// These messages are purely for diagnostics or debugging. Writes are not wrapped in any
/// buffering by the [`LogSink`]; a `Logger` that writes to a file or socket is responsible for
/// any buffering it wants.
///
/// Delivery is synchronous: the driver call site which emitted the message waits until
/// [`Logger::output`] returns. Any error returned is discarded by the sink.
///
/// [`LogSink`]: crate::LogSink
pub trait Logger: Debug + Send + Sync {
    fn output(&self, record: &Record<'_>) -> Result<(), DeliveryError>;
}
