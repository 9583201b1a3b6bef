use calview::EventKind;
use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const TITLE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const MUTED_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

pub(crate) const TODAY_STYLE: Style = BASE_STYLE
    .fg(Color::LightYellow)
    .add_modifier(Modifier::BOLD);

pub(crate) const SELECTED_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Cyan);

pub(crate) const STATUS_STYLE: Style = BASE_STYLE.fg(Color::Gray);

pub(crate) const WARNING_STYLE: Style = BASE_STYLE.fg(Color::LightRed);

pub(crate) fn kind_color(kind: EventKind) -> Color {
    match kind {
        EventKind::Meeting | EventKind::Conference => Color::Magenta,
        EventKind::Class => Color::LightBlue,
        EventKind::Lab => Color::LightGreen,
        EventKind::Test => Color::Yellow,
        EventKind::Project => Color::LightCyan,
        EventKind::Generic => Color::Gray,
    }
}

pub(crate) fn kind_style(kind: EventKind) -> Style {
    BASE_STYLE.fg(kind_color(kind))
}

pub(crate) fn kind_glyph(kind: EventKind) -> char {
    match kind {
        EventKind::Meeting => '@',
        EventKind::Class => '=',
        EventKind::Lab => '%',
        EventKind::Conference => '&',
        EventKind::Test => '!',
        EventKind::Project => '*',
        EventKind::Generic => '-',
    }
}

pub(crate) mod jumpto {
    use super::*;

    pub(crate) const UNFILLED_CELL_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

    pub(crate) const READY_ENTER_STYLE: Style = BASE_STYLE.add_modifier(Modifier::UNDERLINED);
}
