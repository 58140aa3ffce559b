//! The "add event" form

use std::fmt::{Display, Formatter};

use crate::event::EventDraft;


/// A field of the "add event" form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Title,
    Date,
    Time,
    Category,
    Description,
}

impl Display for FormField {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        let name = match self {
            FormField::Title => "title",
            FormField::Date => "date",
            FormField::Time => "time",
            FormField::Category => "category",
            FormField::Description => "description",
        };
        write!(f, "{}", name)
    }
}


/// The current content of the "add event" form
#[derive(Clone, Debug, PartialEq)]
pub struct EventForm {
    draft: EventDraft,
}

impl Default for EventForm {
    fn default() -> Self {
        Self::new()
    }
}

impl EventForm {
    /// An empty form, with the default category selected
    pub fn new() -> Self {
        Self {
            draft: EventDraft {
                category: crate::config::default_category(),
                ..EventDraft::default()
            },
        }
    }

    pub fn set(&mut self, field: FormField, value: &str) {
        let value = value.to_string();
        match field {
            FormField::Title => self.draft.title = value,
            FormField::Date => self.draft.date = value,
            FormField::Time => self.draft.time = value,
            FormField::Category => self.draft.category = value,
            FormField::Description => self.draft.description = value,
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.draft.title,
            FormField::Date => &self.draft.date,
            FormField::Time => &self.draft.time,
            FormField::Category => &self.draft.category,
            FormField::Description => &self.draft.description,
        }
    }

    /// What a submission of the form would contain
    pub fn draft(&self) -> EventDraft {
        self.draft.clone()
    }

    /// Clear every field
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
