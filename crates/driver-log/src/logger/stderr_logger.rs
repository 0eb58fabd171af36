use std::io::{self, Write as _};

use crate::error::DeliveryError;
use super::{Logger, Record};


/// Writes each message to standard error, on its own line.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrLogger {
    prefix: Option<&'static str>,
}

impl StderrLogger {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { prefix: None }
    }

    /// Every line written is started with `prefix`, such as `"driver: "`.
    #[inline]
    #[must_use]
    pub const fn with_prefix(prefix: &'static str) -> Self {
        Self { prefix: Some(prefix) }
    }
}

impl Logger for StderrLogger {
    fn output(&self, record: &Record<'_>) -> Result<(), DeliveryError> {
        let msg = record.message();
        let mut stderr = io::stderr().lock();

        if let Some(prefix) = self.prefix {
            stderr.write_all(prefix.as_bytes())?;
        }
        stderr.write_all(msg.as_bytes())?;
        if !msg.ends_with('\n') {
            stderr.write_all(b"\n")?;
        }

        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use std::panic::Location;

    use super::*;


    #[test]
    fn writes_to_stderr() {
        let here = Location::caller();
        StderrLogger::new().output(&Record::new("plain", here)).unwrap();
        StderrLogger::with_prefix("driver: ").output(&Record::new("prefixed\n", here)).unwrap();
    }
}
