use std::sync::Arc;

use crate::error::DeliveryError;
use super::{Logger, Record};


impl Logger for Box<dyn Logger> {
    fn output(&self, record: &Record<'_>) -> Result<(), DeliveryError> {
        self.as_ref().output(record)
    }
}

impl Logger for Arc<dyn Logger> {
    fn output(&self, record: &Record<'_>) -> Result<(), DeliveryError> {
        self.as_ref().output(record)
    }
}

impl<L: Logger + ?Sized> Logger for &L {
    fn output(&self, record: &Record<'_>) -> Result<(), DeliveryError> {
        (**self).output(record)
    }
}
