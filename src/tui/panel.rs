use super::theme::{kind_glyph, kind_style, BASE_STYLE, MUTED_STYLE, TITLE_STYLE};
use calview::{long_date, short_date, CalendarView, Event};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};
use time::Date;

/// Attendees named on an event card before the rest are summarized as "+N"
const MAX_CARD_ATTENDEES: usize = 3;

/// The side panel: the events of the day being looked at, and what comes
/// after it
#[derive(Clone, Copy, Debug)]
pub(crate) struct AgendaPanel<'a> {
    view: &'a CalendarView,
    today: Date,
}

impl<'a> AgendaPanel<'a> {
    pub(crate) fn new(view: &'a CalendarView, today: Date) -> Self {
        AgendaPanel { view, today }
    }

    fn heading(&self) -> String {
        let date = self.view.display_date;
        if date == self.today {
            format!("Today, {} {:02}", date.month(), date.day())
        } else {
            long_date(date)
        }
    }
}

impl Widget for AgendaPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [day_area, upcoming_area] =
            Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);
        section(
            self.heading(),
            &self.view.display_events,
            false,
            "No events for this day.",
        )
        .render(day_area, buf);
        section(
            String::from("Upcoming Events"),
            &self.view.upcoming,
            true,
            "No upcoming events.",
        )
        .render(upcoming_area, buf);
    }
}

fn section(
    title: String,
    events: &[Event],
    show_date: bool,
    empty: &'static str,
) -> Paragraph<'static> {
    let lines = if events.is_empty() {
        vec![Line::styled(empty, MUTED_STYLE)]
    } else {
        events
            .iter()
            .flat_map(|ev| event_card(ev, show_date))
            .collect()
    };
    Paragraph::new(lines)
        .block(Block::bordered().title(Line::styled(format!(" {title} "), TITLE_STYLE)))
        .style(BASE_STYLE)
        .wrap(Wrap { trim: false })
}

fn event_card(event: &Event, show_date: bool) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from_iter([
        Span::styled(format!("{} ", kind_glyph(event.kind)), kind_style(event.kind)),
        Span::styled(event.title.clone(), TITLE_STYLE),
    ])];
    if show_date {
        lines.push(Line::styled(short_date(event.date), MUTED_STYLE));
    }
    lines.push(Line::styled(event.time_range(), MUTED_STYLE));
    if let Some(ref location) = event.location {
        lines.push(Line::raw(location.clone()));
    }
    if let Some(ref description) = event.description {
        lines.push(Line::styled(description.clone(), MUTED_STYLE));
    }
    if let Some(attendees) = attendee_summary(event) {
        lines.push(Line::raw(attendees));
    }
    lines.push(Line::default());
    lines
}

fn attendee_summary(event: &Event) -> Option<String> {
    if event.attendees.is_empty() {
        return None;
    }
    let names = event
        .attendees
        .iter()
        .take(MAX_CARD_ATTENDEES)
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    match event.attendees.len().saturating_sub(MAX_CARD_ATTENDEES) {
        0 => Some(names),
        extra => Some(format!("{names} +{extra}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::buffer_lines;
    use calview::{Attendee, CalendarEngine, MemoryStore, SelectionController};
    use time::macros::date;

    fn render(engine: &mut CalendarEngine) -> String {
        let today = engine.state().now;
        let view = engine.view(3);
        let area = Rect::new(0, 0, 40, 40);
        let mut buffer = Buffer::empty(area);
        AgendaPanel::new(view, today).render(area, &mut buffer);
        buffer_lines(&buffer).join("\n")
    }

    fn engine() -> CalendarEngine {
        CalendarEngine::load(
            &MemoryStore::demo(),
            SelectionController::new(date!(2025 - 04 - 20)),
        )
        .unwrap()
    }

    #[test]
    fn test_today_without_events() {
        let text = render(&mut engine());
        assert!(text.contains(" Today, April 20 "));
        assert!(text.contains("No events for this day."));
        assert!(text.contains(" Upcoming Events "));
        assert!(text.contains("@ Team Sync"));
        assert!(text.contains("Apr 21, 2025"));
        assert!(text.contains("11:00 - 11:30"));
        assert!(!text.contains("No upcoming events."));
    }

    #[test]
    fn test_selected_day() {
        let mut engine = engine();
        engine.select_day(date!(2025 - 04 - 25)).unwrap();
        let text = render(&mut engine);
        assert!(text.contains(" Friday, April 25, 2025 "));
        assert!(text.contains("@ Staff Meeting"));
        assert!(text.contains("Conference Room 103"));
        assert!(text.contains("Alice, Bob"));
        assert!(text.contains("= Science 101"));
        assert!(text.contains("% Lab Experiment: Plant Cells"));
    }

    #[test]
    fn test_nothing_upcoming() {
        let mut engine = engine();
        engine.select_day(date!(2025 - 05 - 10)).unwrap();
        let text = render(&mut engine);
        assert!(text.contains("! Unit Test"));
        assert!(text.contains("No upcoming events."));
    }

    #[test]
    fn test_attendee_summary() {
        let mut event = engine().index().lookup(date!(2025 - 04 - 25))[0].clone();
        assert_eq!(attendee_summary(&event).unwrap(), "Alice, Bob");
        for name in ["Carol", "Dave", "Erin"] {
            event.attendees.push(Attendee {
                id: name.to_lowercase(),
                name: name.to_owned(),
                avatar_url: None,
            });
        }
        assert_eq!(attendee_summary(&event).unwrap(), "Alice, Bob, Carol +2");
        event.attendees.clear();
        assert_eq!(attendee_summary(&event), None);
    }
}
