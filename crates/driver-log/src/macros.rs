// Each macro expands to a single `#[track_caller]` method call at the invocation site, so the
// records they produce are attributed to the line which invoked the macro.

/// Deliver the concatenation of the arguments to a [`LogSink`](crate::LogSink), with no separator.
///
/// ```
/// let sink = driver_log::LogSink::new();
/// driver_log::log!(sink, "socket ", 7, " closed");
/// ```
#[macro_export]
macro_rules! log {
    ($sink:expr, $($part:expr),+ $(,)?) => {
        $sink.log(&[$(&$part),+])
    };
}

/// Deliver the arguments separated by spaces and followed by a newline.
#[macro_export]
macro_rules! logln {
    ($sink:expr, $($part:expr),+ $(,)?) => {
        $sink.logln(&[$(&$part),+])
    };
}

/// Deliver a message built with [`format!`] syntax.
///
/// ```
/// let sink = driver_log::LogSink::new();
/// driver_log::logf!(sink, "{} servers in topology {:?}", 3, "rs0");
/// ```
#[macro_export]
macro_rules! logf {
    ($sink:expr, $($arg:tt)+) => {
        $sink.logf(::core::format_args!($($arg)+))
    };
}

/// [`log!`], for debug messages.
#[macro_export]
macro_rules! debug {
    ($sink:expr, $($part:expr),+ $(,)?) => {
        $sink.debug(&[$(&$part),+])
    };
}

/// [`logln!`], for debug messages.
#[macro_export]
macro_rules! debugln {
    ($sink:expr, $($part:expr),+ $(,)?) => {
        $sink.debugln(&[$(&$part),+])
    };
}

/// [`logf!`], for debug messages.
#[macro_export]
macro_rules! debugf {
    ($sink:expr, $($arg:tt)+) => {
        $sink.debugf(::core::format_args!($($arg)+))
    };
}
