//! Tracked events

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Utc};


/// The identifier of an [`Event`]. This is the only key used to look events up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(u64);

impl EventId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for EventId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for EventId {
    type Err = std::num::ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

impl Display for EventId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.0)
    }
}


/// Hands out fresh [`EventId`]s.
///
/// Ids are creation timestamps (in milliseconds since the Unix epoch), but two events created within the same
/// millisecond (or after the clock went backwards) still get distinct, increasing ids.
#[derive(Clone, Debug, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator that will never return an id already used in `events`
    pub fn seeded_from(events: &[Event]) -> Self {
        let last = events.iter()
            .map(|ev| ev.id().as_u64())
            .max()
            .unwrap_or(0);
        Self { last }
    }

    /// Returns a new id, based on the current time.
    /// Returns `None` once every id has been used up.
    pub fn next_id(&mut self) -> Option<EventId> {
        self.next_id_at(Utc::now().timestamp_millis())
    }

    /// Returns a new id, based on a given timestamp (in milliseconds)
    pub fn next_id_at(&mut self, timestamp_millis: i64) -> Option<EventId> {
        let candidate = if timestamp_millis < 0 { 0 } else { timestamp_millis as u64 };
        let id = if candidate > self.last { candidate } else { self.last.checked_add(1)? };
        self.last = id;
        Some(EventId(id))
    }
}


/// The values typed in the "add event" form, before they become an [`Event`]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub date: String,
    pub time: String,
    pub category: String,
    pub description: String,
}

impl EventDraft {
    /// Whether every required field (title, date and time) has been filled
    pub fn is_complete(&self) -> bool {
           !self.title.trim().is_empty()
        && !self.date.trim().is_empty()
        && !self.time.trim().is_empty()
    }
}


/// An event.
///
/// Only its completion status can change once it has been created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    id: EventId,
    #[serde(default, deserialize_with = "null_as_default")]
    title: String,
    /// `YYYY-MM-DD`
    #[serde(default, deserialize_with = "null_as_default")]
    date: String,
    /// `HH:MM`
    #[serde(default, deserialize_with = "null_as_default")]
    time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    category: String,
    /// Empty when the event has no description
    #[serde(default, deserialize_with = "null_as_default")]
    description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    completed: bool,
}

/// Stored events are not validated again: a `null` field reads as if it were missing
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Event {
    /// Create a brand new (not completed) event from a form draft.
    /// Returns an error if the title, the date or the time is missing.
    pub fn new(id: EventId, draft: EventDraft) -> Result<Self, Box<dyn Error>> {
        if draft.is_complete() == false {
            return Err("title, date and time are required".into());
        }

        Ok(Self {
            id,
            title: draft.title.trim().to_string(),
            date: draft.date.trim().to_string(),
            time: draft.time.trim().to_string(),
            category: draft.category,
            description: draft.description.trim().to_string(),
            completed: false,
        })
    }

    pub fn id(&self) -> EventId       { self.id         }
    pub fn title(&self) -> &str       { &self.title     }
    pub fn date(&self) -> &str        { &self.date      }
    pub fn time(&self) -> &str        { &self.time      }
    pub fn category(&self) -> &str    { &self.category  }
    pub fn completed(&self) -> bool   { self.completed  }

    pub fn description(&self) -> Option<&str> {
        match self.description.is_empty() {
            true => None,
            false => Some(&self.description),
        }
    }

    /// Flip the completion status, and return the new one
    pub fn toggle_completion(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }

    /// The (local) date of this event, if it can be parsed
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    /// The (local) point in time this event starts at, if both its date and its time can be parsed
    pub fn starts_at(&self) -> Option<NaiveDateTime> {
        let date = parse_date(&self.date)?;
        let time = parse_time(&self.time)?;
        Some(date.and_time(time))
    }

    /// Whether this event is still to come (and is not completed yet)
    pub fn is_upcoming(&self, now: NaiveDateTime) -> bool {
        if self.completed {
            return false;
        }
        match self.starts_at() {
            Some(start) => start >= now,
            None => false,
        }
    }

    /// Case-insensitive substring match against the title or the category.
    /// `lowercase_term` must already be lowercase.
    pub fn matches(&self, lowercase_term: &str) -> bool {
           self.title.to_lowercase().contains(lowercase_term)
        || self.category.to_lowercase().contains(lowercase_term)
    }
}

pub(crate) fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()
}

pub(crate) fn parse_time(time: &str) -> Option<NaiveTime> {
    let time = time.trim();
    NaiveTime::parse_from_str(time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
        .ok()
}
