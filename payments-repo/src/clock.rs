//! Clock adapters.

use chrono::{DateTime, FixedOffset, Offset, Utc};

use payments_types::{ClockError, ClockSource};

/// Wall clock, reported in a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// System clock reporting in UTC.
    pub fn utc() -> Self {
        Self::new(Utc.fix())
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::utc()
    }
}

impl ClockSource for SystemClock {
    fn now(&self) -> Result<DateTime<FixedOffset>, ClockError> {
        Ok(Utc::now().with_timezone(&self.offset))
    }
}

/// Clock that always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self { now }
    }
}

impl ClockSource for FixedClock {
    fn now(&self) -> Result<DateTime<FixedOffset>, ClockError> {
        Ok(self.now)
    }
}
