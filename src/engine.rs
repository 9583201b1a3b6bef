use crate::date::{MonthAnchor, OutOfTimeError};
use crate::event::{Event, EventRecord};
use crate::grid::MonthGrid;
use crate::index::EventIndex;
use crate::selection::{CalendarViewState, SelectionController};
use crate::store::{EventStore, StoreError};
use crate::upcoming::{display_date, display_events, upcoming_events};
use log::debug;
use std::sync::Arc;
use time::Date;

/// Everything a front end needs to draw the month view and its side panel
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CalendarView {
    pub grid: MonthGrid,
    pub display_date: Date,
    pub display_events: Vec<Event>,
    pub upcoming: Vec<Event>,
}

impl CalendarView {
    pub fn compute(index: &EventIndex, state: &CalendarViewState, limit: usize) -> CalendarView {
        CalendarView {
            grid: MonthGrid::new(state.month_anchor, index, state),
            display_date: display_date(state),
            display_events: display_events(state, index).to_vec(),
            upcoming: upcoming_events(state, index, limit)
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct ViewKey {
    state: CalendarViewState,
    version: u64,
    limit: usize,
}

#[derive(Clone, Debug)]
struct CachedView {
    key: ViewKey,
    view: CalendarView,
}

/// The calendar as seen by a front end: an event index, the user's position
/// in it, and a cache of the last view computed from the two.
#[derive(Debug)]
pub struct CalendarEngine {
    index: Arc<EventIndex>,
    /// Bumped every time the index is rebuilt
    version: u64,
    controller: SelectionController,
    cache: Option<CachedView>,
    recomputations: u64,
}

impl CalendarEngine {
    pub fn new<I>(records: I, controller: SelectionController) -> CalendarEngine
    where
        I: IntoIterator<Item = EventRecord>,
    {
        CalendarEngine {
            index: Arc::new(EventIndex::build(records)),
            version: 0,
            controller,
            cache: None,
            recomputations: 0,
        }
    }

    pub fn load<S: EventStore + ?Sized>(
        store: &S,
        controller: SelectionController,
    ) -> Result<CalendarEngine, StoreError> {
        Ok(CalendarEngine::new(store.list()?, controller))
    }

    /// Replaces the index with one built from `records`.  Anyone still
    /// holding a [`CalendarEngine::snapshot`] keeps seeing the old events.
    pub fn refresh<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = EventRecord>,
    {
        self.index = Arc::new(EventIndex::build(records));
        self.version += 1;
        debug!("event index rebuilt (version {})", self.version);
    }

    /// Fetches a fresh list of events from `store` and rebuilds the index.
    /// On failure the current index is kept.
    pub fn reload<S: EventStore + ?Sized>(&mut self, store: &S) -> Result<(), StoreError> {
        let records = store.list()?;
        self.refresh(records);
        Ok(())
    }

    pub fn snapshot(&self) -> Arc<EventIndex> {
        Arc::clone(&self.index)
    }

    pub fn index(&self) -> &EventIndex {
        &self.index
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn state(&self) -> CalendarViewState {
        self.controller.state()
    }

    pub fn controller(&self) -> &SelectionController {
        &self.controller
    }

    /// The grid for `anchor`, decorated with events and with the current
    /// today/selection flags
    pub fn grid(&self, anchor: MonthAnchor) -> MonthGrid {
        MonthGrid::new(anchor, &self.index, &self.controller.state())
    }

    pub fn display_events(&self) -> &[Event] {
        display_events(&self.controller.state(), &self.index)
    }

    pub fn upcoming_events(&self, limit: usize) -> Vec<&Event> {
        upcoming_events(&self.controller.state(), &self.index, limit)
    }

    pub fn select_day(&mut self, date: Date) -> Result<(), OutOfTimeError> {
        self.controller.select_day(date)
    }

    pub fn navigate_month(&mut self, delta: i32) -> Result<(), OutOfTimeError> {
        self.controller.navigate_month(delta)
    }

    pub fn jump_to_today(&mut self) {
        self.controller.jump_to_today();
    }

    pub fn move_selection(&mut self, days: i64) -> Result<(), OutOfTimeError> {
        self.controller.move_selection(days)
    }

    pub fn set_now(&mut self, now: Date) {
        self.controller.set_now(now);
    }

    /// The view for the current state.  It is only recomputed when the month,
    /// selection, current date, events, or `limit` have changed since the
    /// previous call.
    pub fn view(&mut self, limit: usize) -> &CalendarView {
        let key = ViewKey {
            state: self.controller.state(),
            version: self.version,
            limit,
        };
        if self.cache.as_ref().is_some_and(|cached| cached.key != key) {
            self.cache = None;
        }
        let cached = self.cache.get_or_insert_with(|| {
            self.recomputations += 1;
            debug!(
                "computing view for {} (selection {:?}, now {})",
                key.state.month_anchor, key.state.selection, key.state.now
            );
            CachedView {
                key,
                view: CalendarView::compute(&self.index, &key.state, limit),
            }
        });
        &cached.view
    }
}
