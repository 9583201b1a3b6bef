use log::warn;
use std::fmt;
use time::{Date, OffsetDateTime};

/// A source for "today".  Every computation takes the current date as an
/// explicit value obtained from one of these rather than reading the system
/// time itself.
pub trait Clock: fmt::Debug {
    fn today(&self) -> Date;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn today(&self) -> Date {
        (**self).today()
    }
}

/// Today's date in the local timezone
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        match OffsetDateTime::now_local() {
            Ok(now) => now.date(),
            Err(e) => {
                warn!("could not determine local date, using UTC: {e}");
                OffsetDateTime::now_utc().date()
            }
        }
    }
}

/// A clock stopped at a given date
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}
