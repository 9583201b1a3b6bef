use std::fmt;
use std::iter::successors;
use thiserror::Error;
use time::{
    error::Parse, format_description::FormatItem, macros::format_description, Date, Duration,
    Month, Time, Weekday,
};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

static HM_FMT: &[FormatItem<'_>] = format_description!("[hour]:[minute]");

pub const DAYS_IN_WEEK: usize = 7;

/// Number of weeks shown by a month grid, whether or not the month needs them
/// all
pub const GRID_WEEKS: usize = 6;

pub const GRID_DAYS: usize = DAYS_IN_WEEK * GRID_WEEKS;

/// Days between the first and last cells of a grid
const GRID_SPAN: i64 = 41;

pub(crate) trait WeekdayExt {
    fn index0(&self) -> u8;
}

impl WeekdayExt for Weekday {
    fn index0(&self) -> u8 {
        self.number_days_from_sunday()
    }
}

/// Parses a `YYYY-MM-DD` date key
pub fn parse_date(s: &str) -> Result<Date, Parse> {
    Date::parse(s, &YMD_FMT)
}

/// Parses a zero-padded 24-hour `HH:MM` time of day
pub fn parse_time(s: &str) -> Result<Time, Parse> {
    Time::parse(s, &HM_FMT)
}

/// Renders `date` as the `YYYY-MM-DD` key under which its events are grouped
pub fn date_key(date: Date) -> String {
    date.to_string()
}

pub fn format_time(time: Time) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// "Friday, April 25, 2025"
pub fn long_date(date: Date) -> String {
    format!(
        "{}, {} {:02}, {}",
        date.weekday(),
        date.month(),
        date.day(),
        date.year()
    )
}

/// "Apr 25, 2025"
pub fn short_date(date: Date) -> String {
    format!(
        "{} {:02}, {}",
        month_abbrev(date.month()),
        date.day(),
        date.year()
    )
}

pub fn month_abbrev(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

pub(crate) fn iter_days_from(date: Date) -> impl Iterator<Item = Date> {
    successors(Some(date), |&d| d.next_day())
}

/// Adds `days` (possibly negative) to `date`, or `None` if the result falls
/// outside the supported range of dates
pub fn shift_days(date: Date, days: i64) -> Option<Date> {
    date.checked_add(Duration::days(days))
}

/// The first day of the month `delta` months after the month containing
/// `date`
fn shift_months(date: Date, delta: i32) -> Option<Date> {
    let index = date
        .year()
        .checked_mul(12)?
        .checked_add(i32::from(u8::from(date.month())) - 1)?
        .checked_add(delta)?;
    let month = u8::try_from(index.rem_euclid(12) + 1).ok()?;
    let month = Month::try_from(month).ok()?;
    Date::from_calendar_date(index.div_euclid(12), month, 1).ok()
}

/// The first day of a month whose 42-day grid lies entirely within the range
/// of representable dates.
///
/// Every grid is built from one of these, so a `MonthAnchor` is always
/// normalized to the first of its month.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct MonthAnchor(Date);

impl MonthAnchor {
    /// Returns the anchor for the month containing `date`, failing if that
    /// month's grid would run past the start or end of time
    pub fn new(date: Date) -> Result<MonthAnchor, OutOfTimeError> {
        let first = date.replace_day(1).map_err(|_| OutOfTimeError)?;
        let start = grid_start(first).ok_or(OutOfTimeError)?;
        match shift_days(start, GRID_SPAN) {
            Some(_) => Ok(MonthAnchor(first)),
            None => Err(OutOfTimeError),
        }
    }

    /// Returns the anchor for the month containing `date`, clamped to the
    /// earliest or latest month that can be shown in full
    pub fn containing(date: Date) -> MonthAnchor {
        MonthAnchor::new(date).unwrap_or_else(|_| {
            if date.year() < 0 {
                MonthAnchor::earliest()
            } else {
                MonthAnchor::latest()
            }
        })
    }

    pub fn earliest() -> MonthAnchor {
        successors(Some(Date::MIN), |&d| shift_months(d, 1))
            .find_map(|d| MonthAnchor::new(d).ok())
            .unwrap_or(MonthAnchor(Date::MIN))
    }

    pub fn latest() -> MonthAnchor {
        successors(Some(Date::MAX), |&d| shift_months(d, -1))
            .find_map(|d| MonthAnchor::new(d).ok())
            .unwrap_or_else(MonthAnchor::earliest)
    }

    pub fn first_day(self) -> Date {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> Month {
        self.0.month()
    }

    pub fn contains(self, date: Date) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    pub fn checked_add_months(self, delta: i32) -> Result<MonthAnchor, OutOfTimeError> {
        shift_months(self.0, delta)
            .ok_or(OutOfTimeError)
            .and_then(MonthAnchor::new)
    }

    /// The Sunday on or before the first of the month
    pub fn grid_start(self) -> Date {
        grid_start(self.0).unwrap_or(self.0)
    }
}

impl fmt::Display for MonthAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month(), self.year())
    }
}

fn grid_start(first: Date) -> Option<Date> {
    shift_days(first, -i64::from(first.weekday().index0()))
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the end of time")]
pub struct OutOfTimeError;
