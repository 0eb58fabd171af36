//! Optional logging hooks for a database driver.
//!
//! A driver reports what it is doing (connections opened, servers discovered, operations
//! retried) through a [`LogSink`]. By default nothing is listening and every message is dropped
//! before it is even formatted. An application opts in by installing a [`Logger`], and may
//! additionally enable debug output:
//!
//! ```
//! use std::sync::Arc;
//!
//! use driver_log::{MemoryLogger, logf};
//!
//! let memory = Arc::new(MemoryLogger::new());
//! driver_log::set_logger(Some(memory.clone()));
//! driver_log::set_debug(true);
//!
//! logf!(driver_log::global(), "ping to {} took {}ms", "db0:27017", 3);
//! driver_log::global().debug_with(|| format!("reply: {:?}", [1, 2, 3]));
//!
//! assert_eq!(memory.messages(), ["ping to db0:27017 took 3ms", "reply: [1, 2, 3]"]);
//!
//! driver_log::set_logger(None);
//! ```
//!
//! Logging is best-effort: a [`Logger`] may report a [`DeliveryError`], but the sink discards
//! it, so logging can never cause (or mask) a failure of a driver operation.

mod error;
mod global;
mod logger;
mod macros;
mod options;
mod sink;


pub use self::{
    error::{DeliveryError, LogFileError},
    global::{global, set_debug, set_logger},
    logger::{
        CALL_DEPTH, CapturedRecord, Logger, MemoryLogger, Record, StderrLogger,
        TRACING_TARGET, TracingLogger, WriterLogger,
    },
    options::SinkOptions,
    sink::LogSink,
};
