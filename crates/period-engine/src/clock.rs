//! The "now" source.
//!
//! Nothing in [`crate::boundary`] or [`crate::offset`] reads the system
//! clock. A [`crate::Calendar`] owns a [`Clock`] and consults it only when a
//! caller passes no instant, so tests substitute a [`FixedClock`] per
//! calendar instead of patching a global.

use std::fmt::Debug;

use chrono::{DateTime, Local, TimeZone};
use tracing::trace;

/// A source of the current instant.
pub trait Clock: Debug {
    /// Zone of the instants this clock produces.
    type Tz: TimeZone;

    /// The current instant.
    fn now(&self) -> DateTime<Self::Tz>;
}

/// The operating system clock, in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    type Tz = Local;

    fn now(&self) -> DateTime<Local> {
        let now = Local::now();
        trace!(%now, "read system clock");
        now
    }
}

/// A clock stopped at one instant.
#[derive(Debug, Clone)]
pub struct FixedClock<Tz: TimeZone> {
    instant: DateTime<Tz>,
}

impl<Tz: TimeZone> FixedClock<Tz> {
    pub fn new(instant: DateTime<Tz>) -> Self {
        Self { instant }
    }
}

impl<Tz: TimeZone + Debug> Clock for FixedClock<Tz> {
    type Tz = Tz;

    fn now(&self) -> DateTime<Tz> {
        self.instant.clone()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    type Tz = C::Tz;

    fn now(&self) -> DateTime<C::Tz> {
        (**self).now()
    }
}
