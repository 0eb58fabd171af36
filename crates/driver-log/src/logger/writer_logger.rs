use std::{fs::OpenOptions, path::Path};
use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    fs::File,
    io::{BufWriter, Write},
};

use parking_lot::Mutex;

use crate::error::{DeliveryError, LogFileError};
use super::{Logger, Record};


/// Writes each message, on its own line, to any [`Write`] destination.
///
/// The writer is flushed after every message, so a `WriterLogger` wrapping a [`BufWriter`] does
/// not hold messages back.
pub struct WriterLogger<W> {
    logfile_path: Option<Box<Path>>,
    writer:       Mutex<W>,
}

impl<W: Write + Send> WriterLogger<W> {
    #[inline]
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            logfile_path: None,
            writer:       Mutex::new(writer),
        }
    }

    #[inline]
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    /// Run `f` with exclusive access to the underlying writer.
    ///
    /// Any concurrent [`Logger::output`] call waits until `f` returns.
    pub fn with_writer<T, F: FnOnce(&mut W) -> T>(&self, f: F) -> T {
        f(&mut self.writer.lock())
    }
}

impl WriterLogger<BufWriter<File>> {
    /// Open (or create) the file at `path` in append mode, and log to it.
    pub fn open_append<P: AsRef<Path>>(path: P) -> Result<Self, LogFileError> {
        let path = path.as_ref();

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| LogFileError {
                path: path.to_owned(),
                source,
            })?;

        Ok(Self {
            logfile_path: Some(path.into()),
            writer:       Mutex::new(BufWriter::new(file)),
        })
    }
}

impl<W> WriterLogger<W> {
    /// The path of the log file, if this logger was made by [`WriterLogger::open_append`].
    #[inline]
    #[must_use]
    pub fn logfile_path(&self) -> Option<&Path> {
        self.logfile_path.as_deref()
    }
}

impl<W> Debug for WriterLogger<W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if let Some(path) = &self.logfile_path {
            write!(f, "WriterLogger writing to path {path:?}")
        } else {
            write!(f, "WriterLogger writing to a {}", std::any::type_name::<W>())
        }
    }
}

impl<W: Write + Send> Logger for WriterLogger<W> {
    fn output(&self, record: &Record<'_>) -> Result<(), DeliveryError> {
        let msg = record.message();

        // Morally:
        // let line = format!("{msg}\n");
        let needs_newline = !msg.ends_with('\n');
        let mut line = String::with_capacity(msg.len() + usize::from(needs_newline));
        line.push_str(msg);
        if needs_newline {
            line.push('\n');
        }

        let mut writer = self.writer.lock();
        // If writing the message fails, don't bother to flush
        writer.write_all(line.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
