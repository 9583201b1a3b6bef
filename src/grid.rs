use crate::date::{iter_days_from, MonthAnchor, DAYS_IN_WEEK, GRID_DAYS};
use crate::event::Event;
use crate::index::EventIndex;
use crate::selection::CalendarViewState;
use time::Date;

/// Returns the 42 consecutive dates shown for `anchor`'s month, starting with
/// the Sunday on or before the first of the month.
///
/// The grid always has six rows so that its height does not depend on the
/// month.
pub fn build_grid(anchor: MonthAnchor) -> [Date; GRID_DAYS] {
    let start = anchor.grid_start();
    let mut days = [start; GRID_DAYS];
    // MonthAnchor guarantees that all 42 days exist.
    for (slot, date) in std::iter::zip(&mut days, iter_days_from(start)) {
        *slot = date;
    }
    days
}

/// A single position in a month grid together with everything needed to draw
/// it
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DayCell {
    pub date: Date,
    pub in_current_month: bool,
    /// The day's events in order of start time
    pub events: Vec<Event>,
    pub is_today: bool,
    pub is_selected: bool,
}

impl DayCell {
    /// Splits the cell's events into the first `max` and a count of how many
    /// more there are
    pub fn summary(&self, max: usize) -> (&[Event], usize) {
        let shown = self.events.len().min(max);
        let (head, rest) = self.events.split_at(shown);
        (head, rest.len())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MonthGrid {
    anchor: MonthAnchor,
    cells: [DayCell; GRID_DAYS],
}

impl MonthGrid {
    /// Decorates the grid for `anchor` with the events from `index` and the
    /// today/selection flags of `state`
    pub fn new(anchor: MonthAnchor, index: &EventIndex, state: &CalendarViewState) -> MonthGrid {
        let selected = state.selection.selected_date();
        let cells = build_grid(anchor).map(|date| DayCell {
            date,
            in_current_month: anchor.contains(date),
            events: index.lookup(date).to_vec(),
            is_today: date == state.now,
            is_selected: selected == Some(date),
        });
        MonthGrid { anchor, cells }
    }

    pub fn anchor(&self) -> MonthAnchor {
        self.anchor
    }

    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// The grid's six rows, Sunday first
    pub fn weeks(&self) -> std::slice::Chunks<'_, DayCell> {
        self.cells.chunks(DAYS_IN_WEEK)
    }

    pub fn cell(&self, date: Date) -> Option<&DayCell> {
        self.cells.iter().find(|c| c.date == date)
    }

    pub fn first_date(&self) -> Date {
        self.cells[0].date
    }

    pub fn last_date(&self) -> Date {
        self.cells[GRID_DAYS - 1].date
    }

    pub fn contains(&self, date: Date) -> bool {
        (self.first_date()..=self.last_date()).contains(&date)
    }
}
