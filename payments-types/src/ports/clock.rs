//! Clock port trait.
//!
//! The query layer never reads the system clock directly.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset};

use crate::error::ClockError;

/// Source of the current date-time, including its UTC offset.
pub trait ClockSource: Send + Sync {
    /// Returns the current instant in the clock's offset.
    fn now(&self) -> Result<DateTime<FixedOffset>, ClockError>;
}

impl<T: ClockSource + ?Sized> ClockSource for &T {
    fn now(&self) -> Result<DateTime<FixedOffset>, ClockError> {
        (**self).now()
    }
}

impl<T: ClockSource + ?Sized> ClockSource for Arc<T> {
    fn now(&self) -> Result<DateTime<FixedOffset>, ClockError> {
        (**self).now()
    }
}

impl<T: ClockSource + ?Sized> ClockSource for Box<T> {
    fn now(&self) -> Result<DateTime<FixedOffset>, ClockError> {
        (**self).now()
    }
}
