//! The application state, and how commands change it

use crate::command::{Command, Effect};
use crate::event::{Event, EventDraft, EventId, IdGenerator};
use crate::notify::ToastKind;
use crate::section::Section;
use crate::theme::Theme;

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill title, date and time.";
pub const NO_ID_LEFT_MESSAGE: &str = "Unable to add more events.";


/// Everything the UI displays.
///
/// The master collection holds every event. The working collection is what the current search lets through;
/// it is always derived from the master collection, and is never stored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    master: Vec<Event>,
    working: Vec<Event>,
    query: String,
    theme: Theme,
    section: Section,
}

impl AppState {
    pub fn new(master: Vec<Event>, theme: Theme) -> Self {
        let working = master.clone();
        Self {
            master,
            working,
            query: String::new(),
            theme,
            section: Section::default(),
        }
    }

    pub fn master(&self) -> &[Event]   { &self.master  }
    pub fn working(&self) -> &[Event]  { &self.working }
    pub fn query(&self) -> &str        { &self.query   }
    pub fn theme(&self) -> Theme       { self.theme    }
    pub fn section(&self) -> Section   { self.section  }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.master.iter().find(|ev| ev.id() == id)
    }

    /// Apply a command, and return the side effects the caller must carry out (in order)
    pub fn apply(&mut self, command: Command, ids: &mut IdGenerator) -> Vec<Effect> {
        log::debug!("Applying {:?}", command);
        match command {
            Command::Add(draft) => self.add(draft, ids),
            Command::Toggle(id) => self.toggle(id),
            Command::Delete(id) => self.delete(id),
            Command::Filter(query) => {
                self.query = query;
                self.refresh_working();
                Vec::new()
            },
            Command::ToggleTheme => {
                self.theme = self.theme.toggled();
                vec![Effect::PersistTheme]
            },
            Command::Navigate(section) => {
                self.section = section;
                Vec::new()
            },
        }
    }

    fn add(&mut self, draft: EventDraft, ids: &mut IdGenerator) -> Vec<Effect> {
        if draft.is_complete() == false {
            return vec![Effect::notify(MISSING_FIELDS_MESSAGE, ToastKind::Error)];
        }

        let id = match ids.next_id() {
            Some(id) => id,
            None => {
                log::error!("No event id left");
                return vec![Effect::notify(NO_ID_LEFT_MESSAGE, ToastKind::Error)];
            },
        };
        let event = match Event::new(id, draft) {
            Ok(event) => event,
            Err(err) => {
                log::debug!("Rejected draft: {}", err);
                return vec![Effect::notify(MISSING_FIELDS_MESSAGE, ToastKind::Error)];
            },
        };
        log::debug!("Adding event {}", event.id());
        self.master.push(event);
        self.refresh_working();

        vec![
            Effect::PersistEvents,
            Effect::ResetForm,
            Effect::notify("Event added.", ToastKind::Success),
        ]
    }

    fn toggle(&mut self, id: EventId) -> Vec<Effect> {
        let event = match self.master.iter_mut().find(|ev| ev.id() == id) {
            Some(event) => event,
            None => {
                log::debug!("No event {} to toggle", id);
                return Vec::new();
            },
        };

        let message = match event.toggle_completion() {
            true => "Marked completed.",
            false => "Marked pending.",
        };
        self.refresh_working();

        vec![
            Effect::PersistEvents,
            Effect::notify(message, ToastKind::Info),
        ]
    }

    fn delete(&mut self, id: EventId) -> Vec<Effect> {
        let index = match self.master.iter().position(|ev| ev.id() == id) {
            Some(index) => index,
            None => {
                log::debug!("No event {} to delete", id);
                return Vec::new();
            },
        };

        self.master.remove(index);
        self.refresh_working();

        vec![
            Effect::PersistEvents,
            Effect::notify("Event deleted.", ToastKind::Info),
        ]
    }

    /// Derive the working collection from the master collection and the current query
    fn refresh_working(&mut self) {
        if self.query.trim().is_empty() {
            self.working = self.master.clone();
            return;
        }

        let term = self.query.to_lowercase();
        self.working = self.master.iter()
            .filter(|ev| ev.matches(&term))
            .cloned()
            .collect();
    }
}
