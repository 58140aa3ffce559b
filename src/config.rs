//! Support for application configuration options

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use once_cell::sync::Lazy;

/// The categories offered in the "add event" form. The first one is selected by default.
/// Feel free to override it when starting the application.
pub static CATEGORIES: Lazy<Arc<Mutex<Vec<String>>>> = Lazy::new(|| Arc::new(Mutex::new(
    ["Work", "Personal", "Meeting", "Birthday", "Other"].iter().map(|c| c.to_string()).collect()
)));

/// Name of the environment variable that can override the data folder
pub const DATA_FOLDER_ENV: &str = "EVENT_TRACKER_DIR";

/// How long a toast stays fully visible
pub const TOAST_DISPLAY: Duration = Duration::from_millis(2400);
/// How long a toast exit animation lasts, before it is removed
pub const TOAST_EXIT: Duration = Duration::from_millis(200);

/// A copy of the currently configured categories
pub fn categories() -> Vec<String> {
    match CATEGORIES.lock() {
        Ok(categories) => categories.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// The category selected in a freshly reset form
pub fn default_category() -> String {
    categories().into_iter().next().unwrap_or_default()
}

/// The folder events are stored into.
///
/// This is `$EVENT_TRACKER_DIR` if set, `~/.local/share/event-tracker` otherwise.
pub fn data_folder() -> PathBuf {
    if let Some(folder) = std::env::var_os(DATA_FOLDER_ENV) {
        return PathBuf::from(folder);
    }
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".local/share/event-tracker"),
        None => PathBuf::from("event-tracker-data"),
    }
}
