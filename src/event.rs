use crate::date::{date_key, format_time, parse_date, parse_time};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use time::{Date, Time};

/// The closed set of event categories.  The engine only uses these for
/// grouping; glyphs and colours are chosen by the front end.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum EventKind {
    Meeting,
    Class,
    Lab,
    Conference,
    Test,
    Project,
    Generic,
}

impl EventKind {
    pub const ALL: [EventKind; 7] = [
        EventKind::Meeting,
        EventKind::Class,
        EventKind::Lab,
        EventKind::Conference,
        EventKind::Test,
        EventKind::Project,
        EventKind::Generic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Meeting => "meeting",
            EventKind::Class => "class",
            EventKind::Lab => "lab",
            EventKind::Conference => "conference",
            EventKind::Test => "test",
            EventKind::Project => "project",
            EventKind::Generic => "generic",
        }
    }

    /// Case-insensitive lookup by name
    pub fn from_name(name: &str) -> Option<EventKind> {
        EventKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// An event as it is stored and exchanged: every date and time is still text,
/// and nothing has been checked yet.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: String,
    pub title: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    /// Left empty when the field is missing, which [`Event::from_record`]
    /// rejects like any other unknown type
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, alias = "color")]
    pub color_tag: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attendees: Vec<Attendee>,
}

impl EventRecord {
    /// A bare record with no styling, location, description, or attendees
    pub fn new<S: Into<String>>(
        id: S,
        title: S,
        date: S,
        start_time: S,
        end_time: S,
        kind: EventKind,
    ) -> EventRecord {
        EventRecord {
            id: id.into(),
            title: title.into(),
            date: date.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            kind: kind.as_str().to_owned(),
            color_tag: String::new(),
            icon: String::new(),
            location: None,
            description: None,
            attendees: Vec::new(),
        }
    }
}

/// A validated, immutable scheduled event.
///
/// Events never span midnight: `start <= end` always holds, with equality
/// allowed for zero-length milestones.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: Date,
    pub start: Time,
    pub end: Time,
    pub kind: EventKind,
    pub color_tag: String,
    pub icon: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub attendees: Vec<Attendee>,
}

impl Event {
    pub fn from_record(record: EventRecord) -> Result<Event, ParseError> {
        let EventRecord {
            id,
            title,
            date,
            start_time,
            end_time,
            kind,
            color_tag,
            icon,
            location,
            description,
            attendees,
        } = record;
        let date = match parse_date(&date) {
            Ok(d) => d,
            Err(source) => {
                return Err(ParseError::Date {
                    id,
                    value: date,
                    source,
                })
            }
        };
        let start = match parse_time(&start_time) {
            Ok(t) => t,
            Err(source) => {
                return Err(ParseError::StartTime {
                    id,
                    value: start_time,
                    source,
                })
            }
        };
        let end = match parse_time(&end_time) {
            Ok(t) => t,
            Err(source) => {
                return Err(ParseError::EndTime {
                    id,
                    value: end_time,
                    source,
                })
            }
        };
        if end < start {
            return Err(ParseError::EndsBeforeStart {
                id,
                start: start_time,
                end: end_time,
            });
        }
        let Some(kind) = EventKind::from_name(&kind) else {
            return Err(ParseError::Kind { id, value: kind });
        };
        Ok(Event {
            id,
            title,
            date,
            start,
            end,
            kind,
            color_tag,
            icon,
            location,
            description,
            attendees,
        })
    }

    pub fn to_record(&self) -> EventRecord {
        EventRecord {
            id: self.id.clone(),
            title: self.title.clone(),
            date: date_key(self.date),
            start_time: format_time(self.start),
            end_time: format_time(self.end),
            kind: self.kind.as_str().to_owned(),
            color_tag: self.color_tag.clone(),
            icon: self.icon.clone(),
            location: self.location.clone(),
            description: self.description.clone(),
            attendees: self.attendees.clone(),
        }
    }

    /// "09:00 - 10:00"
    pub fn time_range(&self) -> String {
        format!("{} - {}", format_time(self.start), format_time(self.end))
    }
}

/// Why an event record (or a date key) was refused at ingestion
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("event {id:?} has invalid date {value:?}")]
    Date {
        id: String,
        value: String,
        source: time::error::Parse,
    },
    #[error("event {id:?} has invalid start time {value:?}")]
    StartTime {
        id: String,
        value: String,
        source: time::error::Parse,
    },
    #[error("event {id:?} has invalid end time {value:?}")]
    EndTime {
        id: String,
        value: String,
        source: time::error::Parse,
    },
    #[error("event {id:?} ends at {end} before it starts at {start}")]
    EndsBeforeStart {
        id: String,
        start: String,
        end: String,
    },
    #[error("event {id:?} has unknown type {value:?}")]
    Kind { id: String, value: String },
    #[error("event id {id:?} is already in use")]
    DuplicateId { id: String },
    #[error("invalid date key {value:?}")]
    DateKey {
        value: String,
        source: time::error::Parse,
    },
}

impl ParseError {
    /// The id of the offending record, if the error concerns one
    pub fn event_id(&self) -> Option<&str> {
        match self {
            ParseError::Date { id, .. }
            | ParseError::StartTime { id, .. }
            | ParseError::EndTime { id, .. }
            | ParseError::EndsBeforeStart { id, .. }
            | ParseError::Kind { id, .. }
            | ParseError::DuplicateId { id } => Some(id),
            ParseError::DateKey { .. } => None,
        }
    }
}
