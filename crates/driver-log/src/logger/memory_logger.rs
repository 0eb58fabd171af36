use std::{mem, panic::Location};

use parking_lot::Mutex;

use crate::error::DeliveryError;
use super::{Logger, Record};


/// An owned copy of a [`Record`] captured by a [`MemoryLogger`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRecord {
    pub message:    String,
    pub call_depth: usize,
    pub location:   &'static Location<'static>,
}

/// Keeps every delivered message in memory, in delivery order.
///
/// Mostly useful for tests of driver code which need to assert on what was logged.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    records: Mutex<Vec<CapturedRecord>>,
}

impl MemoryLogger {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// The messages delivered so far, oldest first.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .map(|record| record.message.clone())
            .collect()
    }

    #[must_use]
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.records.lock().clone()
    }

    /// Remove and return every captured record.
    #[must_use]
    pub fn take(&self) -> Vec<CapturedRecord> {
        mem::take(&mut *self.records.lock())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Logger for MemoryLogger {
    fn output(&self, record: &Record<'_>) -> Result<(), DeliveryError> {
        self.records.lock().push(CapturedRecord {
            message:    record.message().to_owned(),
            call_depth: record.call_depth(),
            location:   record.location(),
        });
        Ok(())
    }
}
