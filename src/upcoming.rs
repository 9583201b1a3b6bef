//! The side-panel projections: the events of the day being looked at, and the
//! events coming up after it.

use crate::event::Event;
use crate::index::EventIndex;
use crate::selection::CalendarViewState;
use time::Date;

/// The selected day, or today when nothing is selected
pub fn display_date(state: &CalendarViewState) -> Date {
    state.selection.selected_date().unwrap_or(state.now)
}

/// The first date eligible for the upcoming list: the day after
/// [`display_date`].
///
/// This is anchored to the selection even when the selected day is in the
/// past, so events between the selection and today are listed as upcoming.
/// Returns `None` on the last day of time.
pub fn upcoming_boundary(state: &CalendarViewState) -> Option<Date> {
    display_date(state).next_day()
}

pub fn display_events<'a>(state: &CalendarViewState, index: &'a EventIndex) -> &'a [Event] {
    index.lookup(display_date(state))
}

/// Up to `limit` events on or after [`upcoming_boundary`], ordered by date and
/// start time.  A `limit` of zero yields nothing.
pub fn upcoming_events<'a>(
    state: &CalendarViewState,
    index: &'a EventIndex,
    limit: usize,
) -> Vec<&'a Event> {
    match upcoming_boundary(state) {
        Some(boundary) => index.upcoming_from(boundary).take(limit).collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::MonthAnchor;
    use crate::event::{EventKind, EventRecord};
    use crate::selection::SelectionState;
    use time::macros::date;

    fn index() -> EventIndex {
        let r = |id: &str, date: &str, start: &str| {
            EventRecord::new(id, id, date, start, start, EventKind::Generic)
        };
        EventIndex::build([
            r("apr18", "2025-04-18", "09:00"),
            r("apr20", "2025-04-20", "10:00"),
            r("apr21", "2025-04-21", "11:00"),
            r("apr23", "2025-04-23", "14:00"),
            r("apr25b", "2025-04-25", "13:30"),
            r("apr25a", "2025-04-25", "09:00"),
            r("apr28", "2025-04-28", "13:30"),
            r("may02", "2025-05-02", "17:00"),
        ])
    }

    fn state(selection: SelectionState) -> CalendarViewState {
        CalendarViewState {
            month_anchor: MonthAnchor::containing(date!(2025 - 04 - 01)),
            selection,
            now: date!(2025 - 04 - 20),
        }
    }

    fn ids(events: Vec<&Event>) -> Vec<&str> {
        events.into_iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_no_selection_uses_now() {
        let index = index();
        let st = state(SelectionState::NoSelection);
        assert_eq!(display_date(&st), date!(2025 - 04 - 20));
        assert_eq!(upcoming_boundary(&st), Some(date!(2025 - 04 - 21)));
        let shown = display_events(&st, &index);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id, "apr20");
        assert_eq!(
            ids(upcoming_events(&st, &index, 3)),
            ["apr21", "apr23", "apr25a"]
        );
    }

    #[test]
    fn test_future_selection_excludes_selected_day() {
        let index = index();
        let st = state(SelectionState::DaySelected(date!(2025 - 04 - 25)));
        assert_eq!(upcoming_boundary(&st), Some(date!(2025 - 04 - 26)));
        assert_eq!(
            display_events(&st, &index)
                .iter()
                .map(|e| e.id.as_str())
                .collect::<Vec<_>>(),
            ["apr25a", "apr25b"]
        );
        assert_eq!(ids(upcoming_events(&st, &index, 7)), ["apr28", "may02"]);
    }

    #[test]
    fn test_past_selection_resurrects_elapsed_events() {
        // The boundary follows the selected day rather than the clock, so
        // events that already happened relative to `now` show up as upcoming.
        let index = index();
        let st = state(SelectionState::DaySelected(date!(2025 - 04 - 17)));
        assert_eq!(upcoming_boundary(&st), Some(date!(2025 - 04 - 18)));
        assert_eq!(
            ids(upcoming_events(&st, &index, 2)),
            ["apr18", "apr20"]
        );
    }

    #[test]
    fn test_limits() {
        let index = index();
        let st = state(SelectionState::NoSelection);
        assert!(upcoming_events(&st, &index, 0).is_empty());
        assert_eq!(upcoming_events(&st, &index, 100).len(), 6);
    }

    #[test]
    fn test_empty_day() {
        let index = index();
        let st = state(SelectionState::DaySelected(date!(2025 - 04 - 22)));
        assert!(display_events(&st, &index).is_empty());
    }

    #[test]
    fn test_last_day_of_time() {
        let index = index();
        let st = state(SelectionState::DaySelected(Date::MAX));
        assert_eq!(upcoming_boundary(&st), None);
        assert!(upcoming_events(&st, &index, 5).is_empty());
    }
}
