//! What users can ask for, and what the application must do in return

use crate::event::{EventDraft, EventId};
use crate::notify::ToastKind;
use crate::section::Section;


/// A user action, as produced by the UI layer
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Submit the "add event" form
    Add(EventDraft),
    /// Flip the completion status of an event
    Toggle(EventId),
    Delete(EventId),
    /// Search events by title or category. A blank query shows every event.
    Filter(String),
    ToggleTheme,
    Navigate(Section),
}

/// A side effect requested by [`AppState::apply`](crate::state::AppState::apply)
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// The master collection has changed and must be stored
    PersistEvents,
    /// The theme has changed and must be stored
    PersistTheme,
    /// The "add event" form must be cleared
    ResetForm,
    /// Show a toast
    Notify(String, ToastKind),
}

impl Effect {
    pub(crate) fn notify(message: &str, kind: ToastKind) -> Self {
        Effect::Notify(message.to_string(), kind)
    }
}
