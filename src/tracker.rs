//! The controller that owns the application state
//!
//! A [`Tracker`] receives [`Command`]s from a host (a terminal, a test...), lets the [`AppState`] apply them,
//! then carries out the resulting [`Effect`]s: storing data, resetting the form and showing toasts.

use std::time::Instant;

use chrono::NaiveDateTime;

use crate::command::{Command, Effect};
use crate::event::IdGenerator;
use crate::form::EventForm;
use crate::notify::{Notifier, Toast, ToastKind};
use crate::render::{render, Listing};
use crate::section::Section;
use crate::state::AppState;
use crate::stats::Stats;
use crate::store::Store;
use crate::theme::Theme;
use crate::traits::KeyValueStorage;


#[derive(Debug)]
pub struct Tracker<S: KeyValueStorage> {
    store: Store<S>,
    state: AppState,
    ids: IdGenerator,
    form: EventForm,
    /// Set whenever the form has been reset, until a host asks for it
    form_reset: bool,
    notifier: Notifier,
}

impl<S: KeyValueStorage> Tracker<S> {
    /// Create a tracker, with the events and the theme previously saved into `store`
    pub fn open(store: Store<S>) -> Self {
        let events = store.load();
        let theme = store.load_theme();
        let ids = IdGenerator::seeded_from(&events);

        Self {
            store,
            state: AppState::new(events, theme),
            ids,
            form: EventForm::new(),
            form_reset: false,
            notifier: Notifier::new(),
        }
    }

    pub fn store(&self) -> &Store<S>      { &self.store    }
    pub fn state(&self) -> &AppState      { &self.state    }
    pub fn theme(&self) -> Theme          { self.state.theme()   }
    pub fn section(&self) -> Section      { self.state.section() }
    pub fn form(&self) -> &EventForm      { &self.form     }
    pub fn form_mut(&mut self) -> &mut EventForm  { &mut self.form }

    /// Whether the form has been reset since the last call, so that hosts can clear their own input widgets
    pub fn form_reset_requested(&mut self) -> bool {
        std::mem::replace(&mut self.form_reset, false)
    }

    /// Heading and sub-heading of the active section
    pub fn heading(&self) -> (&'static str, &'static str) {
        let section = self.state.section();
        (section.title(), section.subtitle())
    }

    /// Apply a command and carry out its effects. Returns the effects, in the order they were carried out.
    pub fn dispatch(&mut self, command: Command, now: Instant) -> Vec<Effect> {
        let effects = self.state.apply(command, &mut self.ids);
        for effect in &effects {
            self.execute(effect, now);
        }
        effects
    }

    /// Submit the form, as a [`Command::Add`]
    pub fn submit_form(&mut self, now: Instant) -> Vec<Effect> {
        let draft = self.form.draft();
        self.dispatch(Command::Add(draft), now)
    }

    fn execute(&mut self, effect: &Effect, now: Instant) {
        match effect {
            Effect::PersistEvents => {
                if let Err(err) = self.store.save(self.state.master()) {
                    log::error!("Unable to save events: {}", err);
                    self.notifier.notify("Unable to save events.", ToastKind::Error, now);
                }
            },
            Effect::PersistTheme => {
                if let Err(err) = self.store.save_theme(self.state.theme()) {
                    log::error!("Unable to save the theme preference: {}", err);
                }
            },
            Effect::ResetForm => {
                self.form.reset();
                self.form_reset = true;
            },
            Effect::Notify(message, kind) => {
                self.notifier.notify(message, *kind, now);
            },
        }
    }

    /// The cards of the events the current search lets through
    pub fn listing(&self) -> Listing {
        render(self.state.working())
    }

    /// Counters over every event (whatever the current search)
    pub fn stats(&self, now: NaiveDateTime) -> Stats {
        Stats::compute(self.state.master(), now)
    }

    pub fn toasts(&self) -> &[Toast] {
        self.notifier.toasts()
    }

    /// Drop expired toasts. Returns how many were removed
    pub fn tick(&mut self, now: Instant) -> usize {
        self.notifier.tick(now)
    }
}
