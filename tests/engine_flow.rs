use calview::{
    build_grid, display_events, upcoming_events, CalendarEngine, CalendarViewState, Clock, Event,
    EventIndex, EventKind, EventRecord, FixedClock, MemoryStore, MonthAnchor,
    SelectionController, SelectionState,
};
use time::{macros::date, Date, Weekday};

fn record(id: &str, title: &str, date: &str, start: &str, end: &str) -> EventRecord {
    EventRecord::new(id, title, date, start, end, EventKind::Generic)
}

fn titles<'a, I: IntoIterator<Item = &'a Event>>(events: I) -> Vec<&'a str> {
    events.into_iter().map(|e| e.title.as_str()).collect()
}

#[test]
fn april_2025_grid() {
    let grid = build_grid(MonthAnchor::containing(date!(2025 - 04 - 01)));
    assert_eq!(grid.len(), 42);
    assert_eq!(grid[0], date!(2025 - 03 - 30));
    assert_eq!(grid[0].weekday(), Weekday::Sunday);
    assert_eq!(grid[2], date!(2025 - 04 - 01));
    assert_eq!(grid[41], date!(2025 - 05 - 10));
}

#[test]
fn same_day_events_sorted() {
    let index = EventIndex::build([
        record("b", "Science 101", "2025-04-25", "13:30", "15:00"),
        record("a", "Staff Meeting", "2025-04-25", "09:00", "10:00"),
    ]);
    assert_eq!(
        titles(index.lookup(date!(2025 - 04 - 25))),
        ["Staff Meeting", "Science 101"]
    );
}

#[test]
fn navigation_scenario() {
    let clock = FixedClock(date!(2025 - 04 - 20));
    let mut engine = CalendarEngine::load(
        &MemoryStore::demo(),
        SelectionController::new(clock.today()),
    )
    .unwrap();
    assert_eq!(engine.state().selection, SelectionState::NoSelection);

    // Picking a leading day of the grid moves to March
    engine.select_day(date!(2025 - 03 - 30)).unwrap();
    assert_eq!(
        engine.state().month_anchor.first_day(),
        date!(2025 - 03 - 01)
    );

    engine.navigate_month(2).unwrap();
    assert_eq!(
        engine.state().month_anchor.first_day(),
        date!(2025 - 05 - 01)
    );
    assert_eq!(
        engine.state().selection,
        SelectionState::DaySelected(date!(2025 - 03 - 30))
    );

    engine.jump_to_today();
    assert_eq!(
        engine.state().month_anchor.first_day(),
        date!(2025 - 04 - 01)
    );
    assert_eq!(
        engine.state().selection,
        SelectionState::DaySelected(date!(2025 - 04 - 20))
    );
}

#[test]
fn upcoming_with_future_selection() {
    let mut engine = CalendarEngine::load(
        &MemoryStore::demo(),
        SelectionController::new(date!(2025 - 04 - 20)),
    )
    .unwrap();
    engine.select_day(date!(2025 - 04 - 25)).unwrap();
    let view = engine.view(3);
    assert_eq!(
        titles(&view.display_events),
        ["Staff Meeting", "Science 101"]
    );
    assert_eq!(
        titles(&view.upcoming),
        [
            "Lab Experiment: Plant Cells",
            "Art Project Showcase",
            "Science Project Due"
        ]
    );
    assert!(view.upcoming.iter().all(|e| e.date > date!(2025 - 04 - 25)));
}

#[test]
fn past_selection_lists_elapsed_events_as_upcoming() {
    let index = EventIndex::build([
        record("1", "Yesterday", "2025-04-19", "09:00", "10:00"),
        record("2", "Today", "2025-04-20", "09:00", "10:00"),
        record("3", "Tomorrow", "2025-04-21", "09:00", "10:00"),
    ]);
    let state = CalendarViewState {
        month_anchor: MonthAnchor::containing(date!(2025 - 04 - 01)),
        selection: SelectionState::DaySelected(date!(2025 - 04 - 10)),
        now: date!(2025 - 04 - 20),
    };
    assert!(display_events(&state, &index).is_empty());
    // Everything after the selected day counts, even events before now
    assert_eq!(
        titles(upcoming_events(&state, &index, 5)),
        ["Yesterday", "Today", "Tomorrow"]
    );
}

#[test]
fn malformed_records_do_not_break_the_view() {
    let mut engine = CalendarEngine::new(
        [
            record("1", "Fine", "2025-04-21", "09:00", "10:00"),
            record("2", "Bad date", "2025-02-30", "09:00", "10:00"),
            record("3", "Backwards", "2025-04-22", "10:00", "09:00"),
        ],
        SelectionController::new(date!(2025 - 04 - 20)),
    );
    assert_eq!(engine.index().rejected().len(), 2);
    assert_eq!(titles(&engine.view(5).upcoming), ["Fine"]);
}

#[test]
fn empty_calendar() {
    let mut engine = CalendarEngine::new(
        Vec::<EventRecord>::new(),
        SelectionController::new(date!(2025 - 04 - 20)),
    );
    let view = engine.view(5);
    assert!(view.display_events.is_empty());
    assert!(view.upcoming.is_empty());
    assert!(view.grid.cells().iter().all(|c| c.events.is_empty()));
    assert_eq!(view.grid.cells().len(), 42);
}

#[test]
fn refresh_swaps_in_new_events() {
    let mut engine = CalendarEngine::load(
        &MemoryStore::demo(),
        SelectionController::new(date!(2025 - 04 - 20)),
    )
    .unwrap();
    let before = engine.view(10).upcoming.len();
    engine
        .reload(&MemoryStore::new(vec![record(
            "x",
            "Only",
            "2025-06-01",
            "09:00",
            "10:00",
        )]))
        .unwrap();
    assert_eq!(before, 10);
    assert_eq!(titles(&engine.view(10).upcoming), ["Only"]);
}

#[test]
fn leap_day_in_1600() {
    let today: Date = date!(1600 - 03 - 01);
    let mut engine = CalendarEngine::new(
        [record("1", "Old", "1600-02-29", "12:00", "13:00")],
        SelectionController::new(today),
    );
    engine.move_selection(-1).unwrap();
    assert_eq!(titles(engine.display_events()), ["Old"]);
    assert_eq!(
        engine.state().month_anchor.first_day(),
        date!(1600 - 02 - 01)
    );
}
