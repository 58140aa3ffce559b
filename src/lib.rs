//! This crate provides a small personal event tracker.
//!
//! Events are added through a form, listed sorted by date and time, searched, marked completed or deleted.
//! Everything is kept in a local [`Store`], as JSON, on top of any [`KeyValueStorage`](traits::KeyValueStorage) (see the [`storage`] module).
//!
//! Hosts (such as the `event-tracker` binary) turn user input into [`Command`]s and hand them to a [`Tracker`]. \
//! The tracker lets its [`AppState`](state::AppState) apply them, stores whatever changed, and keeps a stack of [`Toast`](notify::Toast)s as user feedback.
//! Hosts then display the [`Listing`](render::Listing), the [`Stats`] and the toasts.

pub mod traits;

mod event;
pub use event::{Event, EventDraft, EventId, IdGenerator};
pub mod command;
pub use command::{Command, Effect};
pub mod state;
pub mod tracker;
pub use tracker::Tracker;

pub mod store;
pub use store::Store;
pub mod storage;

pub mod stats;
pub use stats::Stats;
pub mod render;
pub mod notify;
pub mod section;
pub use section::Section;
pub mod theme;
pub use theme::Theme;
pub mod form;
pub mod input;

pub mod config;
pub mod utils;
