use std::{io::Error as IoError, path::PathBuf};

use thiserror::Error;


/// An error a [`Logger`] may report when it fails to deliver a message.
///
/// A [`LogSink`] never propagates this error; it exists so that backends can be honest about
/// failures, and so that they can be tested in isolation.
///
/// [`Logger`]: crate::Logger
/// [`LogSink`]: crate::LogSink
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("IO error while writing a log message: {0}")]
    Io(#[from] IoError),
    #[error("logger rejected the message: {0}")]
    Rejected(String),
}

/// Could not open a log file for a [`WriterLogger`].
///
/// [`WriterLogger`]: crate::WriterLogger
#[derive(Error, Debug)]
#[error("could not open log file {path:?}: {source}")]
pub struct LogFileError {
    pub path:   PathBuf,
    #[source]
    pub source: IoError,
}
