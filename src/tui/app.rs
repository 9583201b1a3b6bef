use super::help::Help;
use super::jumpto::{JumpTo, JumpToInput, JumpToOutput, JumpToState};
use super::month::MonthView;
use super::panel::AgendaPanel;
use super::theme::{BASE_STYLE, STATUS_STYLE, TITLE_STYLE, WARNING_STYLE};
use calview::{long_date, CalendarEngine, Clock};
use crossterm::event::{read, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};
use time::Date;

const PANEL_WIDTH: u16 = 38;

#[derive(Debug)]
pub(crate) struct App {
    engine: CalendarEngine,
    /// Consulted before every redraw so that "today" follows the real date
    clock: Box<dyn Clock>,
    /// Maximum number of upcoming events to list
    limit: usize,
    state: AppState,
}

impl App {
    pub(crate) fn new(engine: CalendarEngine, clock: Box<dyn Clock>, limit: usize) -> App {
        App {
            engine,
            clock,
            limit,
            state: AppState::Calendar,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.tick();
            self.draw(terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn tick(&mut self) {
        self.engine.set_now(self.clock.today());
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = read()?.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key or tried to go past
    // the end of time
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match &mut self.state {
            AppState::Calendar => match key {
                KeyCode::Char('h') | KeyCode::Left => self.move_selection(-1),
                KeyCode::Char('l') | KeyCode::Right => self.move_selection(1),
                KeyCode::Char('k') | KeyCode::Up => self.move_selection(-7),
                KeyCode::Char('j') | KeyCode::Down => self.move_selection(7),
                KeyCode::Char('p') | KeyCode::PageUp => self.navigate_month(-1),
                KeyCode::Char('n') | KeyCode::PageDown => self.navigate_month(1),
                KeyCode::Char('t' | '0') | KeyCode::Home => {
                    self.engine.jump_to_today();
                    true
                }
                KeyCode::Char('g') => {
                    self.state = AppState::Jumping(JumpToState::new());
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Calendar;
                true
            }
            AppState::Jumping(state) => {
                if matches!(key, KeyCode::Char('q' | 'g') | KeyCode::Esc) {
                    self.state = AppState::Calendar;
                    true
                } else {
                    let output = match key {
                        KeyCode::Char('-') => state.handle_input(JumpToInput::Negative),
                        KeyCode::Char('+') => state.handle_input(JumpToInput::Positive),
                        KeyCode::Char(c) => match c.to_digit(10).map(u8::try_from) {
                            Some(Ok(d)) => state.handle_input(JumpToInput::Digit(d)),
                            _ => JumpToOutput::Invalid,
                        },
                        KeyCode::Backspace | KeyCode::Delete => {
                            state.handle_input(JumpToInput::Backspace)
                        }
                        KeyCode::Enter => state.handle_input(JumpToInput::Enter),
                        _ => JumpToOutput::Invalid,
                    };
                    match output {
                        JumpToOutput::Ok => true,
                        JumpToOutput::Invalid => false,
                        JumpToOutput::Jump(date) => {
                            self.state = AppState::Calendar;
                            self.jump_to(date)
                        }
                    }
                }
            }
            AppState::Quitting => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }

    fn move_selection(&mut self, days: i64) -> bool {
        self.engine.move_selection(days).is_ok()
    }

    fn navigate_month(&mut self, delta: i32) -> bool {
        self.engine.navigate_month(delta).is_ok()
    }

    fn jump_to(&mut self, date: Date) -> bool {
        self.engine.select_day(date).is_ok()
    }

    fn status_line(&self) -> Line<'static> {
        match self.engine.index().rejected().len() {
            0 => Line::styled("Press ? for help", STATUS_STYLE),
            1 => Line::styled("1 malformed event was skipped", WARNING_STYLE),
            n => Line::styled(format!("{n} malformed events were skipped"), WARNING_STYLE),
        }
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        let [header_area, body_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);
        let [month_area, panel_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(PANEL_WIDTH)])
                .areas(body_area);
        self.status_line().render(status_area, buf);
        let today = self.engine.state().now;
        let view = self.engine.view(self.limit);
        Line::styled(long_date(view.display_date), TITLE_STYLE).render(header_area, buf);
        MonthView::new(&view.grid).render(month_area, buf);
        AgendaPanel::new(view, today).render(panel_area, buf);
        if self.state == AppState::Helping {
            Help.render(area, buf);
        } else if let AppState::Jumping(ref mut state) = self.state {
            JumpTo.render(area, buf, state);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Calendar,
    Helping,
    Jumping(JumpToState),
    Quitting,
}
