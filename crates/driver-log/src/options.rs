use std::sync::Arc;

use crate::logger::Logger;


/// The settings of a [`LogSink`], for constructing one or reconfiguring it in one call.
///
/// The default has no logger and debug output disabled, the same as [`LogSink::new`].
///
/// [`LogSink`]: crate::LogSink
/// [`LogSink::new`]: crate::LogSink::new
#[derive(Debug, Clone, Default)]
pub struct SinkOptions {
    pub logger: Option<Arc<dyn Logger>>,
    pub debug:  bool,
}

impl SinkOptions {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            logger: None,
            debug:  false,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    #[inline]
    #[must_use]
    pub fn without_logger(mut self) -> Self {
        self.logger = None;
        self
    }

    #[inline]
    #[must_use]
    pub const fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
