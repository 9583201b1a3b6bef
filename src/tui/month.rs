use super::theme::{
    kind_glyph, kind_style, BASE_STYLE, MUTED_STYLE, SELECTED_STYLE, TITLE_STYLE, TODAY_STYLE,
    WEEKDAY_STYLE,
};
use calview::{DayCell, MonthGrid, DAYS_IN_WEEK, GRID_WEEKS};
use ratatui::{buffer::Buffer, layout::Rect, text::Line, widgets::Widget};
use std::iter::zip;

static WEEKDAYS: [&str; DAYS_IN_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Number of lines taken up by the month title and the weekday header
const HEADER_LINES: u16 = 2;

/// Event titles shown in a cell before the rest are summarized as "+N more"
const MAX_CELL_EVENTS: usize = 2;

/// Draws a six-week month grid, one box per day
#[derive(Clone, Copy, Debug)]
pub(crate) struct MonthView<'a> {
    grid: &'a MonthGrid,
}

impl<'a> MonthView<'a> {
    pub(crate) fn new(grid: &'a MonthGrid) -> Self {
        MonthView { grid }
    }
}

impl Widget for MonthView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height <= HEADER_LINES || area.is_empty() {
            return;
        }
        Line::styled(self.grid.anchor().to_string(), TITLE_STYLE)
            .centered()
            .render(line_of(area, 0), buf);
        let col_width = area.width / 7;
        let row_height = ((area.height - HEADER_LINES) / 6).max(1);
        for (col, name) in zip(0u16.., WEEKDAYS) {
            let rect = Rect::new(area.x + col * col_width, area.y + 1, col_width, 1);
            Line::styled(name, WEEKDAY_STYLE)
                .centered()
                .render(rect.intersection(area), buf);
        }
        for (row, week) in zip(0u16.., self.grid.weeks().take(GRID_WEEKS)) {
            for (col, cell) in zip(0u16.., week) {
                let rect = Rect::new(
                    area.x + col * col_width,
                    area.y + HEADER_LINES + row * row_height,
                    col_width,
                    row_height,
                )
                .intersection(area);
                if !rect.is_empty() {
                    draw_cell(cell, rect, buf);
                }
            }
        }
    }
}

fn draw_cell(cell: &DayCell, area: Rect, buf: &mut Buffer) {
    let base = if cell.is_selected {
        SELECTED_STYLE
    } else if cell.in_current_month {
        BASE_STYLE
    } else {
        MUTED_STYLE
    };
    buf.set_style(area, base);
    let day = cell.date.day();
    let (label, label_style) = if cell.is_today {
        let style = if cell.is_selected { base } else { TODAY_STYLE };
        (format!("[{day:2}]"), style)
    } else {
        (format!(" {day:2} "), base)
    };
    Line::styled(label, label_style).render(line_of(area, 0), buf);
    if !cell.in_current_month {
        return;
    }
    let lines = usize::from(area.height.saturating_sub(1));
    let (mut shown, mut more) = cell.summary(MAX_CELL_EVENTS.min(lines));
    if more > 0 && shown.len() == lines && lines > 0 {
        // Make room for the "+N more" line
        (shown, more) = cell.summary(lines - 1);
    }
    let mut y = 1;
    for event in shown {
        let style = if cell.is_selected {
            base
        } else {
            kind_style(event.kind)
        };
        Line::styled(format!("{} {}", kind_glyph(event.kind), event.title), style)
            .render(line_of(area, y), buf);
        y += 1;
    }
    if more > 0 {
        let style = if cell.is_selected { base } else { MUTED_STYLE };
        Line::styled(format!("+{more} more"), style).render(line_of(area, y), buf);
    }
}

/// The `y`th line of `area`, or an empty rectangle if `area` is too short
fn line_of(area: Rect, y: u16) -> Rect {
    if y < area.height {
        Rect {
            y: area.y + y,
            height: 1,
            ..area
        }
    } else {
        Rect::default()
    }
}
