//! The views that can be navigated to

use std::fmt::{Display, Formatter};
use std::str::FromStr;


/// One of the mutually exclusive sections of the dashboard
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    /// The form and the list of events
    Events,
    /// Not implemented yet, this is only a placeholder
    Calendar,
    Settings,
}

impl Default for Section {
    fn default() -> Self {
        Self::Events
    }
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Events, Section::Calendar, Section::Settings];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Events => "events",
            Section::Calendar => "calendar",
            Section::Settings => "settings",
        }
    }

    /// The page heading shown while this section is active
    pub fn title(&self) -> &'static str {
        match self {
            Section::Events => "Events",
            Section::Calendar => "Calendar",
            Section::Settings => "Settings",
        }
    }

    /// The line shown under the heading
    pub fn subtitle(&self) -> &'static str {
        match self {
            Section::Events => "Manage all your events in one place",
            Section::Calendar => "Visual view of your events (coming soon)",
            Section::Settings => "Customize your dashboard",
        }
    }
}

impl FromStr for Section {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL.iter()
            .find(|section| section.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| format!("unknown section {:?}", s))
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.as_str())
    }
}
