use crate::date::parse_date;
use crate::event::{Event, EventRecord, ParseError};
use log::{debug, warn};
use std::collections::{BTreeMap, HashSet};
use time::Date;

/// Events grouped by calendar day, each day's events sorted by start time.
///
/// An index is never patched in place; when the underlying events change, a
/// new index is built from scratch and swapped in whole.
#[derive(Debug, Default)]
pub struct EventIndex {
    days: BTreeMap<Date, Vec<Event>>,
    rejected: Vec<ParseError>,
    len: usize,
}

impl EventIndex {
    /// Validates and indexes `records`.
    ///
    /// Malformed records are logged, set aside in [`EventIndex::rejected`],
    /// and otherwise ignored so that one bad record does not empty the
    /// calendar.  When two records share an id, the first one wins.
    pub fn build<I>(records: I) -> EventIndex
    where
        I: IntoIterator<Item = EventRecord>,
    {
        let mut index = EventIndex::default();
        let mut seen = HashSet::new();
        for record in records {
            match Event::from_record(record) {
                Ok(event) if seen.contains(&event.id) => {
                    index.reject(ParseError::DuplicateId { id: event.id });
                }
                Ok(event) => {
                    seen.insert(event.id.clone());
                    index.days.entry(event.date).or_default().push(event);
                    index.len += 1;
                }
                Err(e) => index.reject(e),
            }
        }
        for events in index.days.values_mut() {
            // Stable, so events starting at the same time keep their input
            // order
            events.sort_by_key(|e| e.start);
        }
        debug!(
            "indexed {} events on {} days ({} rejected)",
            index.len,
            index.days.len(),
            index.rejected.len()
        );
        index
    }

    fn reject(&mut self, e: ParseError) {
        warn!("skipping malformed event: {e}");
        self.rejected.push(e);
    }

    /// The events on `date`, earliest first; empty if there are none
    pub fn lookup(&self, date: Date) -> &[Event] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or_default()
    }

    /// Like [`EventIndex::lookup`], but takes a `YYYY-MM-DD` date key
    pub fn lookup_key(&self, key: &str) -> Result<&[Event], ParseError> {
        match parse_date(key) {
            Ok(date) => Ok(self.lookup(date)),
            Err(source) => Err(ParseError::DateKey {
                value: key.to_owned(),
                source,
            }),
        }
    }

    /// All events on or after `boundary`, ordered by date and then start
    /// time
    pub fn upcoming_from(&self, boundary: Date) -> impl Iterator<Item = &Event> + '_ {
        self.days.range(boundary..).flat_map(|(_, events)| events)
    }

    /// The dates that have at least one event, in order
    pub fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        self.days.keys().copied()
    }

    /// The records that were refused while building the index
    pub fn rejected(&self) -> &[ParseError] {
        &self.rejected
    }

    /// Number of indexed events
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
