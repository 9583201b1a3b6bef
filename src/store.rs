use crate::event::{Attendee, EventKind, EventRecord};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use time::{macros::date, Date};

/// The date the demo data is meant to be viewed from
pub const DEMO_TODAY: Date = date!(2025 - 04 - 20);

/// Somewhere events come from.  The calendar only ever reads a complete
/// snapshot; creating, editing, and deleting events happen elsewhere.
pub trait EventStore {
    fn list(&self) -> Result<Vec<EventRecord>, StoreError>;
}

impl<T: EventStore + ?Sized> EventStore for &T {
    fn list(&self) -> Result<Vec<EventRecord>, StoreError> {
        (**self).list()
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read events from {}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse events in {}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// A JSON file holding an array of event records
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> JsonFileStore {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventStore for JsonFileStore {
    fn list(&self) -> Result<Vec<EventRecord>, StoreError> {
        let src = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&src).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MemoryStore(Vec<EventRecord>);

impl MemoryStore {
    pub fn new(records: Vec<EventRecord>) -> MemoryStore {
        MemoryStore(records)
    }

    /// A store preloaded with the sample events from [`demo_records`]
    pub fn demo() -> MemoryStore {
        MemoryStore(demo_records())
    }
}

impl EventStore for MemoryStore {
    fn list(&self) -> Result<Vec<EventRecord>, StoreError> {
        Ok(self.0.clone())
    }
}

fn styled(mut record: EventRecord, color_tag: &str, icon: &str) -> EventRecord {
    record.color_tag = color_tag.to_owned();
    record.icon = icon.to_owned();
    record
}

fn attendee(id: &str, name: &str) -> Attendee {
    Attendee {
        id: id.to_owned(),
        name: name.to_owned(),
        avatar_url: Some(format!(
            "https://placehold.co/32x32.png?text={}",
            name.chars().next().unwrap_or('?')
        )),
    }
}

/// Ten sample events in late April and early May 2025
pub fn demo_records() -> Vec<EventRecord> {
    use EventKind::*;
    let mut staff = styled(
        EventRecord::new("1", "Staff Meeting", "2025-04-25", "09:00", "10:00", Meeting),
        "bg-purple-500",
        "users-round",
    );
    staff.location = Some(String::from("Conference Room 103"));
    staff.attendees = vec![attendee("u1", "Alice"), attendee("u2", "Bob")];
    let mut science = styled(
        EventRecord::new("2", "Science 101", "2025-04-25", "13:30", "15:00", Class),
        "bg-blue-500",
        "notebook-text",
    );
    science.location = Some(String::from("Room 205"));
    science.description = Some(String::from("Topic: Introduction to Ecosystems"));
    let mut lab = styled(
        EventRecord::new(
            "3",
            "Lab Experiment: Plant Cells",
            "2025-04-28",
            "13:30",
            "15:00",
            Lab,
        ),
        "bg-green-500",
        "flask-conical",
    );
    lab.location = Some(String::from("Science Lab"));
    lab.description = Some(String::from(
        "Materials needed: microscopes, slides, plant samples",
    ));
    vec![
        staff,
        science,
        lab,
        styled(
            EventRecord::new("4", "Parent Conferences", "2025-05-05", "08:00", "12:00", Conference),
            "bg-purple-500",
            "users-round",
        ),
        styled(
            EventRecord::new("5", "Parent Conferences", "2025-05-06", "13:00", "17:00", Conference),
            "bg-purple-500",
            "users-round",
        ),
        styled(
            EventRecord::new("6", "Unit Test", "2025-05-10", "10:00", "11:00", Test),
            "bg-yellow-500",
            "clipboard-list",
        ),
        styled(
            EventRecord::new("7", "Science Project Due", "2025-05-02", "17:00", "17:00", Project),
            "bg-sky-500",
            "lightbulb",
        ),
        styled(
            EventRecord::new("8", "Team Sync", "2025-04-21", "11:00", "11:30", Meeting),
            "bg-purple-500",
            "users-round",
        ),
        styled(
            EventRecord::new("9", "History Lecture", "2025-04-23", "14:00", "15:30", Class),
            "bg-blue-500",
            "notebook-text",
        ),
        styled(
            EventRecord::new("10", "Art Project Showcase", "2025-04-30", "09:00", "12:00", Project),
            "bg-pink-500",
            "lightbulb",
        ),
    ]
}
