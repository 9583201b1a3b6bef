use crate::date::{shift_days, MonthAnchor, OutOfTimeError};
use time::Date;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum SelectionState {
    #[default]
    NoSelection,
    DaySelected(Date),
}

impl SelectionState {
    pub fn selected_date(self) -> Option<Date> {
        match self {
            SelectionState::NoSelection => None,
            SelectionState::DaySelected(date) => Some(date),
        }
    }
}

/// Everything a calendar view is computed from, apart from the events
/// themselves
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct CalendarViewState {
    pub month_anchor: MonthAnchor,
    pub selection: SelectionState,
    /// The current date according to whatever clock the caller uses
    pub now: Date,
}

/// Owns a [`CalendarViewState`] and applies the user's navigation to it
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SelectionController {
    state: CalendarViewState,
}

impl SelectionController {
    /// Starts on `now`'s month with nothing selected
    pub fn new(now: Date) -> SelectionController {
        SelectionController {
            state: CalendarViewState {
                month_anchor: MonthAnchor::containing(now),
                selection: SelectionState::NoSelection,
                now,
            },
        }
    }

    pub fn selected(mut self, date: Date) -> Result<SelectionController, OutOfTimeError> {
        self.select_day(date)?;
        Ok(self)
    }

    pub fn state(&self) -> CalendarViewState {
        self.state
    }

    pub fn month_anchor(&self) -> MonthAnchor {
        self.state.month_anchor
    }

    pub fn selection(&self) -> SelectionState {
        self.state.selection
    }

    pub fn now(&self) -> Date {
        self.state.now
    }

    /// Selects `date`.  Picking a day outside the shown month (e.g. one of
    /// the leading or trailing days of the grid) moves the view to that day's
    /// month.
    ///
    /// Fails without changing anything if `date`'s month is too close to the
    /// start or end of time for its grid to be shown.
    pub fn select_day(&mut self, date: Date) -> Result<(), OutOfTimeError> {
        if !self.state.month_anchor.contains(date) {
            self.state.month_anchor = MonthAnchor::new(date)?;
        }
        self.state.selection = SelectionState::DaySelected(date);
        Ok(())
    }

    /// Moves the view `delta` months forwards or backwards.  The selection is
    /// left alone even if it scrolls out of view.
    pub fn navigate_month(&mut self, delta: i32) -> Result<(), OutOfTimeError> {
        self.state.month_anchor = self.state.month_anchor.checked_add_months(delta)?;
        Ok(())
    }

    pub fn jump_to_today(&mut self) {
        self.state.month_anchor = MonthAnchor::containing(self.state.now);
        self.state.selection = SelectionState::DaySelected(self.state.now);
    }

    /// Selects the day `days` away from the current selection (or from today
    /// if nothing is selected)
    pub fn move_selection(&mut self, days: i64) -> Result<(), OutOfTimeError> {
        let from = self.state.selection.selected_date().unwrap_or(self.state.now);
        let to = shift_days(from, days).ok_or(OutOfTimeError)?;
        self.select_day(to)
    }

    /// Advances the clock.  The view is not moved.
    pub fn set_now(&mut self, now: Date) {
        self.state.now = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::build_grid;
    use time::macros::date;

    fn april() -> SelectionController {
        SelectionController::new(date!(2025 - 04 - 20))
    }

    #[test]
    fn test_initial_state() {
        let ctl = april();
        assert_eq!(ctl.selection(), SelectionState::NoSelection);
        assert_eq!(ctl.month_anchor().first_day(), date!(2025 - 04 - 01));
        assert_eq!(ctl.now(), date!(2025 - 04 - 20));
    }

    #[test]
    fn test_select_in_month() {
        let mut ctl = april();
        ctl.select_day(date!(2025 - 04 - 25)).unwrap();
        assert_eq!(
            ctl.selection(),
            SelectionState::DaySelected(date!(2025 - 04 - 25))
        );
        assert_eq!(ctl.month_anchor().first_day(), date!(2025 - 04 - 01));
    }

    #[test]
    fn test_select_previous_month_recenters() {
        let mut ctl = april();
        // Leading cell of the April 2025 grid
        ctl.select_day(date!(2025 - 03 - 30)).unwrap();
        assert_eq!(ctl.month_anchor().first_day(), date!(2025 - 03 - 01));
        assert_eq!(ctl.selection().selected_date(), Some(date!(2025 - 03 - 30)));
    }

    #[test]
    fn test_select_next_month_recenters() {
        let mut ctl = april();
        ctl.select_day(date!(2025 - 05 - 10)).unwrap();
        assert_eq!(ctl.month_anchor().first_day(), date!(2025 - 05 - 01));
    }

    #[test]
    fn test_select_far_dates() {
        let mut ctl = april();
        ctl.select_day(date!(1600 - 02 - 29)).unwrap();
        assert_eq!(ctl.month_anchor().first_day(), date!(1600 - 02 - 01));
        ctl.select_day(date!(9999 - 11 - 30)).unwrap();
        assert_eq!(
            ctl.selection(),
            SelectionState::DaySelected(date!(9999 - 11 - 30))
        );
        assert_eq!(ctl.month_anchor(), MonthAnchor::latest());
    }

    #[test]
    fn test_select_unshowable_month() {
        let mut ctl = april().selected(date!(2025 - 04 - 25)).unwrap();
        let before = ctl.state();
        // Neither month has a complete 42-day grid
        assert_eq!(ctl.select_day(Date::MIN), Err(OutOfTimeError));
        assert_eq!(ctl.select_day(Date::MAX), Err(OutOfTimeError));
        assert_eq!(ctl.state(), before);
        // The first selectable day is the first of the earliest anchor
        let first = MonthAnchor::earliest().first_day();
        ctl.select_day(first).unwrap();
        assert_eq!(ctl.month_anchor(), MonthAnchor::earliest());
        assert!(build_grid(ctl.month_anchor()).contains(&first));
        assert_eq!(ctl.move_selection(-1), Err(OutOfTimeError));
        assert_eq!(ctl.selection(), SelectionState::DaySelected(first));
    }

    #[test]
    fn test_navigate_keeps_selection() {
        let mut ctl = april().selected(date!(2025 - 04 - 25)).unwrap();
        ctl.navigate_month(1).unwrap();
        assert_eq!(ctl.month_anchor().first_day(), date!(2025 - 05 - 01));
        assert_eq!(ctl.selection().selected_date(), Some(date!(2025 - 04 - 25)));
        ctl.navigate_month(-2).unwrap();
        assert_eq!(ctl.month_anchor().first_day(), date!(2025 - 03 - 01));
        assert_eq!(ctl.selection().selected_date(), Some(date!(2025 - 04 - 25)));
    }

    #[test]
    fn test_navigate_across_years() {
        let mut ctl = SelectionController::new(date!(2024 - 12 - 15));
        ctl.navigate_month(1).unwrap();
        assert_eq!(ctl.month_anchor().first_day(), date!(2025 - 01 - 01));
        ctl.navigate_month(-1).unwrap();
        ctl.navigate_month(-1).unwrap();
        assert_eq!(ctl.month_anchor().first_day(), date!(2024 - 11 - 01));
    }

    #[test]
    fn test_navigate_past_end_of_time() {
        let mut ctl = SelectionController::new(date!(9999 - 10 - 15));
        ctl.navigate_month(1).unwrap();
        assert_eq!(ctl.navigate_month(1), Err(OutOfTimeError));
        assert_eq!(ctl.month_anchor(), MonthAnchor::latest());
    }

    #[test]
    fn test_jump_to_today() {
        let mut ctl = april().selected(date!(2023 - 07 - 04)).unwrap();
        assert_eq!(ctl.month_anchor().first_day(), date!(2023 - 07 - 01));
        ctl.jump_to_today();
        assert_eq!(ctl.month_anchor().first_day(), date!(2025 - 04 - 01));
        assert_eq!(
            ctl.selection(),
            SelectionState::DaySelected(date!(2025 - 04 - 20))
        );
    }

    #[test]
    fn test_move_selection() {
        let mut ctl = april();
        ctl.move_selection(1).unwrap();
        assert_eq!(ctl.selection().selected_date(), Some(date!(2025 - 04 - 21)));
        ctl.move_selection(14).unwrap();
        assert_eq!(ctl.selection().selected_date(), Some(date!(2025 - 05 - 05)));
        assert_eq!(ctl.month_anchor().first_day(), date!(2025 - 05 - 01));
        ctl.move_selection(-7).unwrap();
        assert_eq!(ctl.month_anchor().first_day(), date!(2025 - 04 - 01));
    }

    #[test]
    fn test_set_now() {
        let mut ctl = april();
        ctl.set_now(date!(2025 - 06 - 01));
        assert_eq!(ctl.month_anchor().first_day(), date!(2025 - 04 - 01));
        ctl.jump_to_today();
        assert_eq!(ctl.month_anchor().first_day(), date!(2025 - 06 - 01));
    }
}
