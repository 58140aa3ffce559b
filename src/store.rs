//! This module persists events (and the theme preference) into a [`KeyValueStorage`]

use std::error::Error;

use crate::event::Event;
use crate::theme::Theme;
use crate::traits::KeyValueStorage;

/// The key the events are stored under, as a JSON list
pub const EVENTS_KEY: &str = "simple-events";
/// The key the theme preference is stored under
pub const THEME_KEY: &str = "simple-theme";


/// Reads and writes the event collection and the theme preference
#[derive(Debug)]
pub struct Store<S: KeyValueStorage> {
    storage: S,
}

impl<S: KeyValueStorage> Store<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Load the stored events.
    ///
    /// This never fails: missing, unreadable or corrupt data yields an empty collection.
    pub fn load(&self) -> Vec<Event> {
        let raw = match self.storage.get_item(EVENTS_KEY) {
            Err(err) => {
                log::warn!("Unable to read stored events: {}. Starting with no events", err);
                return Vec::new();
            },
            Ok(None) => {
                log::debug!("No stored events yet");
                return Vec::new();
            },
            Ok(Some(raw)) => raw,
        };

        let values = match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
            Err(err) => {
                log::warn!("Invalid stored events: {}. Starting with no events", err);
                return Vec::new();
            },
            Ok(values) => values,
        };

        // One unusable record must not cost the others
        let mut events = Vec::with_capacity(values.len());
        for value in values {
            match serde_json::from_value::<Event>(value) {
                Ok(event) => events.push(event),
                Err(err) => log::warn!("Skipping an invalid stored event: {}", err),
            }
        }
        log::info!("Loaded {} events", events.len());
        events
    }

    /// Store the whole collection, replacing what was stored before
    pub fn save(&mut self, events: &[Event]) -> Result<(), Box<dyn Error>> {
        let json = serde_json::to_string(events)?;
        self.storage.set_item(EVENTS_KEY, &json)?;
        log::info!("Saved {} events", events.len());
        Ok(())
    }

    /// Load the theme preference. Defaults to [`Theme::Light`]
    pub fn load_theme(&self) -> Theme {
        match self.storage.get_item(THEME_KEY) {
            Err(err) => {
                log::warn!("Unable to read the theme preference: {}", err);
                Theme::default()
            },
            Ok(value) => Theme::from_stored(value.as_deref()),
        }
    }

    pub fn save_theme(&mut self, theme: Theme) -> Result<(), Box<dyn Error>> {
        self.storage.set_item(THEME_KEY, theme.as_str())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::event::{EventDraft, EventId};
    use crate::storage::MemoryStorage;

    fn sample(id: u64, title: &str) -> Event {
        let draft = EventDraft {
            title: title.to_string(),
            date: "2025-01-10".to_string(),
            time: "09:00".to_string(),
            category: "Work".to_string(),
            description: String::new(),
        };
        Event::new(EventId::from(id), draft).unwrap()
    }

    #[test]
    fn serde_store() {
        let mut store = Store::new(MemoryStorage::new());
        let mut events = vec![sample(1, "Standup"), sample(2, "Review")];
        events[1].toggle_completion();

        store.save(&events).unwrap();
        let retrieved = store.load();
        assert_eq!(events, retrieved);
    }

    #[test]
    fn missing_or_corrupt_data_is_empty() {
        let mut store = Store::new(MemoryStorage::new());
        assert!(store.load().is_empty());

        store.storage_mut().set_item(EVENTS_KEY, "[{\"id\": ").unwrap();
        assert!(store.load().is_empty());

        store.storage_mut().set_item(EVENTS_KEY, "{\"not\": \"a list\"}").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn invalid_records_are_skipped() {
        let mut store = Store::new(MemoryStorage::new());
        store.storage_mut().set_item(EVENTS_KEY, r#"[
            {"id": 1, "title": "Standup", "date": "2025-01-10", "time": "09:00", "category": "Work", "description": "", "completed": false},
            {"id": 2, "title": "Gym", "date": "2025-01-10", "time": "18:00", "category": null, "description": null, "completed": true},
            {"id": "not a number", "title": "Broken"},
            42
        ]"#).unwrap();

        let events = store.load();
        let ids: Vec<u64> = events.iter().map(|ev| ev.id().as_u64()).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(events[1].category(), "");
        assert!(events[1].completed());
    }

    #[test]
    fn persisted_shape() {
        let mut store = Store::new(MemoryStorage::new());
        store.save(&[sample(7, "Standup")]).unwrap();

        let raw = store.storage().get_item(EVENTS_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value, serde_json::json!([{
            "id": 7,
            "title": "Standup",
            "date": "2025-01-10",
            "time": "09:00",
            "category": "Work",
            "description": "",
            "completed": false,
        }]));
    }

    #[test]
    fn theme_preference() {
        let mut store = Store::new(MemoryStorage::new());
        assert_eq!(store.load_theme(), Theme::Light);

        store.save_theme(Theme::Dark).unwrap();
        assert_eq!(store.load_theme(), Theme::Dark);
        assert_eq!(store.storage().get_item(THEME_KEY).unwrap().as_deref(), Some("dark"));

        store.storage_mut().set_item(THEME_KEY, "sepia").unwrap();
        assert_eq!(store.load_theme(), Theme::Light);
    }
}
