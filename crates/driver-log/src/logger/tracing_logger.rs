use tracing::Level;

use crate::error::DeliveryError;
use super::{Logger, Record};


/// The `tracing` target of events emitted by a [`TracingLogger`].
pub const TRACING_TARGET: &str = "driver_log";

/// Forwards each message to [`tracing`] as an event, so that driver messages end up wherever
/// the application's subscriber sends them.
///
/// The emitting call site is attached as the `file` and `line` fields, since the event's own
/// metadata would otherwise point here.
#[derive(Debug, Clone, Copy)]
pub struct TracingLogger {
    level: Level,
}

impl TracingLogger {
    /// Forward messages at [`Level::INFO`].
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { level: Level::INFO }
    }

    #[inline]
    #[must_use]
    pub const fn with_level(level: Level) -> Self {
        Self { level }
    }

    #[inline]
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }
}

impl Default for TracingLogger {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for TracingLogger {
    fn output(&self, record: &Record<'_>) -> Result<(), DeliveryError> {
        let msg = record.message();
        let msg = msg.strip_suffix('\n').unwrap_or(msg);
        let location = record.location();

        macro_rules! forward {
            ($level:expr) => {
                tracing::event!(
                    target: TRACING_TARGET,
                    $level,
                    file       = location.file(),
                    line       = location.line(),
                    call_depth = record.call_depth(),
                    "{}",
                    msg,
                )
            };
        }

        match self.level {
            Level::ERROR => forward!(Level::ERROR),
            Level::WARN  => forward!(Level::WARN),
            Level::INFO  => forward!(Level::INFO),
            Level::DEBUG => forward!(Level::DEBUG),
            _            => forward!(Level::TRACE),
        }

        Ok(())
    }
}
