//! A month-view calendar engine.
//!
//! Given a month, a set of events, the current date, and the user's selected
//! day, the engine produces a fixed six-week grid of decorated day cells, the
//! events of the day being looked at, and a list of upcoming events.  All of
//! the computations are pure; [`CalendarEngine`] ties them together behind a
//! small stateful interface and caches the last view it computed.
mod clock;
mod date;
mod engine;
mod event;
mod grid;
mod index;
mod logging;
mod selection;
mod store;
mod upcoming;
pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::date::{
    date_key, format_time, long_date, month_abbrev, parse_date, parse_time, shift_days,
    short_date, MonthAnchor, OutOfTimeError, DAYS_IN_WEEK, GRID_DAYS, GRID_WEEKS,
};
pub use crate::engine::{CalendarEngine, CalendarView};
pub use crate::event::{Attendee, Event, EventKind, EventRecord, ParseError};
pub use crate::grid::{build_grid, DayCell, MonthGrid};
pub use crate::index::EventIndex;
pub use crate::logging::{init_file_logging, LOG_ENV_VAR};
pub use crate::selection::{CalendarViewState, SelectionController, SelectionState};
pub use crate::store::{
    demo_records, EventStore, JsonFileStore, MemoryStore, StoreError, DEMO_TODAY,
};
pub use crate::upcoming::{display_date, display_events, upcoming_boundary, upcoming_events};
