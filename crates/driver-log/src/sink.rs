use std::{panic::Location, sync::Arc};
use std::{
    fmt::{Arguments, Debug, Display, Formatter, Result as FmtResult, Write as _},
    sync::atomic::{AtomicBool, Ordering},
};

use arc_swap::ArcSwapOption;

use crate::{logger::{Logger, Record}, options::SinkOptions};


const TRACING_TARGET: &str = "driver_log::sink";

/// Where a driver sends its informational and debug messages.
///
/// A `LogSink` holds two independent settings: an optional [`Logger`], and a debug flag. Each is
/// replaced atomically as a whole value, without locks, so a `LogSink` can be shared by any
/// number of threads issuing database operations. Emitting a message loads each setting once,
/// independently of the other; a message racing with a reconfiguration may be judged by the
/// new logger and the old flag (or vice versa).
///
/// Every emission method is a no-op unless a logger is installed, and the `debug*` methods
/// are additionally no-ops unless debug output is enabled. Messages are only formatted once
/// those checks pass. Delivery is synchronous, and any [`DeliveryError`] the logger returns
/// is discarded: logging never fails a driver operation.
///
/// See [`global`] for the process-wide default sink.
///
/// [`DeliveryError`]: crate::DeliveryError
/// [`global`]: crate::global
pub struct LogSink {
    // Double `Arc`, since `ArcSwapOption` needs a sized pointee.
    logger: ArcSwapOption<Arc<dyn Logger>>,
    debug:  AtomicBool,
}

impl LogSink {
    /// A sink with no logger and debug output disabled.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            logger: ArcSwapOption::const_empty(),
            debug:  AtomicBool::new(false),
        }
    }

    #[must_use]
    pub fn with_options(options: SinkOptions) -> Self {
        let sink = Self::new();
        sink.apply(options);
        sink
    }

    /// Install the logger and debug setting of `options`, replacing the current ones.
    pub fn apply(&self, options: SinkOptions) {
        self.set_logger(options.logger);
        self.set_debug(options.debug);
    }

    /// Install `logger` as the destination of every subsequent message, replacing any previous
    /// logger. `None` removes the logger, turning every emission into a no-op.
    pub fn set_logger(&self, logger: Option<Arc<dyn Logger>>) {
        let _previous = self.replace_logger(logger);
    }

    /// Like [`LogSink::set_logger`], but returns the logger which was replaced.
    pub fn replace_logger(&self, logger: Option<Arc<dyn Logger>>) -> Option<Arc<dyn Logger>> {
        tracing::event!(
            target: TRACING_TARGET,
            tracing::Level::TRACE,
            installed = logger.is_some(),
            "replacing driver logger",
        );

        self.logger
            .swap(logger.map(Arc::new))
            .map(|previous| Arc::clone(&*previous))
    }

    /// The currently installed logger, if any.
    #[inline]
    #[must_use]
    pub fn logger(&self) -> Option<Arc<dyn Logger>> {
        self.logger.load().as_deref().map(Arc::clone)
    }

    #[inline]
    #[must_use]
    pub fn has_logger(&self) -> bool {
        self.logger.load().is_some()
    }

    /// Enable or disable the delivery of debug messages. This only matters while a logger is
    /// installed.
    pub fn set_debug(&self, enabled: bool) {
        tracing::event!(
            target: TRACING_TARGET,
            tracing::Level::TRACE,
            enabled,
            "setting driver debug output",
        );
        self.debug.store(enabled, Ordering::Release);
    }

    #[inline]
    #[must_use]
    pub fn debug_enabled(&self) -> bool {
        self.debug.load(Ordering::Acquire)
    }

    /// Deliver the concatenation of `parts`, with no separator.
    #[track_caller]
    pub fn log(&self, parts: &[&dyn Display]) {
        if let Some(logger) = &*self.logger.load() {
            deliver(&***logger, &concat(parts, "", ""));
        }
    }

    /// Deliver `parts` separated by single spaces, followed by a newline.
    #[track_caller]
    pub fn logln(&self, parts: &[&dyn Display]) {
        if let Some(logger) = &*self.logger.load() {
            deliver(&***logger, &concat(parts, " ", "\n"));
        }
    }

    /// Deliver a message built from a template, usually via [`format_args!`] or the
    /// [`logf!`] macro.
    ///
    /// [`logf!`]: crate::logf
    #[track_caller]
    pub fn logf(&self, args: Arguments<'_>) {
        if let Some(logger) = &*self.logger.load() {
            deliver(&***logger, &args.to_string());
        }
    }

    /// [`LogSink::log`], if debug output is enabled.
    #[track_caller]
    pub fn debug(&self, parts: &[&dyn Display]) {
        if self.debug_enabled() {
            self.log(parts);
        }
    }

    /// [`LogSink::logln`], if debug output is enabled.
    #[track_caller]
    pub fn debugln(&self, parts: &[&dyn Display]) {
        if self.debug_enabled() {
            self.logln(parts);
        }
    }

    /// [`LogSink::logf`], if debug output is enabled.
    #[track_caller]
    pub fn debugf(&self, args: Arguments<'_>) {
        if self.debug_enabled() {
            self.logf(args);
        }
    }

    /// Build a debug message with `producer` and deliver it, but only if a logger is installed
    /// and debug output is enabled. `producer` is not called otherwise.
    ///
    /// Nothing is delivered if `producer` returns an empty string.
    #[track_caller]
    pub fn debug_with<F: FnOnce() -> String>(&self, producer: F) {
        if !self.debug_enabled() {
            return;
        }
        if let Some(logger) = &*self.logger.load() {
            let message = producer();
            if !message.is_empty() {
                deliver(&***logger, &message);
            }
        }
    }
}

impl Default for LogSink {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for LogSink {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("LogSink")
            .field("logger", &self.logger())
            .field("debug", &self.debug_enabled())
            .finish()
    }
}

/// Hand `message` to `logger`, attributed to the driver code which called the emission helper.
#[track_caller]
fn deliver(logger: &dyn Logger, message: &str) {
    let record = Record::new(message, Location::caller());
    // Delivery is best-effort.
    let _ignored = logger.output(&record);
}

fn concat(parts: &[&dyn Display], separator: &str, terminator: &str) -> String {
    let mut message = String::new();
    for (idx, part) in parts.iter().enumerate() {
        if idx != 0 {
            message.push_str(separator);
        }
        // Writing to a `String` can only fail if the `Display` impl itself fails.
        let _ignored: FmtResult = write!(message, "{part}");
    }
    message.push_str(terminator);
    message
}
