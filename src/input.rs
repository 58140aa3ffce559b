//! Translates text typed by a user into [`Command`]s
//!
//! ```text
//! title <text>        date <YYYY-MM-DD>     time <HH:MM>
//! category <text>     description <text>    submit
//! add <title> | <date> | <time> | <category> | <description>
//! toggle <id>         delete <id>           search [text]
//! theme               nav events|calendar|settings
//! list                help                  quit
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::command::Command;
use crate::event::{EventDraft, EventId};
use crate::form::FormField;
use crate::section::Section;

pub const HELP: &str = "\
Commands:
  title|date|time|category|description <value>   fill a field of the form
  submit                                         add the event described by the form
  add <title> | <date> | <time> | <category> | <description>
  toggle <id>                                    mark an event completed or pending
  delete <id>                                    delete an event
  search [text]                                  only show matching events (no text: show all)
  theme                                          switch between the light and dark themes
  nav events|calendar|settings                   switch to another section
  list                                           display the current section again
  help                                           show this help
  quit                                           leave";


/// What a line of input asks for
#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    /// Something that changes the application state
    Command(Command),
    /// Fill a form field
    Field(FormField, String),
    /// Submit the form
    Submit,
    /// Display the current section again
    Show,
    Help,
    Quit,
}

#[derive(Clone, Debug, PartialEq)]
pub enum InputError {
    Empty,
    UnknownCommand(String),
    MissingArgument(&'static str),
    InvalidId(String),
    UnknownSection(String),
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            InputError::Empty => write!(f, "Nothing to do"),
            InputError::UnknownCommand(cmd) => write!(f, "Unknown command {:?} (type \"help\" for a list)", cmd),
            InputError::MissingArgument(what) => write!(f, "Missing {}", what),
            InputError::InvalidId(id) => write!(f, "{:?} is not a valid event id", id),
            InputError::UnknownSection(section) => write!(f, "Unknown section {:?}", section),
        }
    }
}

impl Error for InputError {}


/// Parse a line typed by the user
pub fn parse_line(line: &str) -> Result<Input, InputError> {
    let line = line.trim_end_matches(&['\r', '\n'][..]).trim_start();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (line, ""),
    };

    let input = match word.to_lowercase().as_str() {
        "" => return Err(InputError::Empty),
        "title" => Input::Field(FormField::Title, rest.to_string()),
        "date" => Input::Field(FormField::Date, rest.trim().to_string()),
        "time" => Input::Field(FormField::Time, rest.trim().to_string()),
        "category" => Input::Field(FormField::Category, rest.trim().to_string()),
        "description" => Input::Field(FormField::Description, rest.to_string()),
        "submit" => Input::Submit,
        "add" => Input::Command(Command::Add(parse_draft(rest))),
        "toggle" => Input::Command(Command::Toggle(parse_id(rest)?)),
        "delete" => Input::Command(Command::Delete(parse_id(rest)?)),
        "search" => Input::Command(Command::Filter(rest.to_string())),
        "theme" => Input::Command(Command::ToggleTheme),
        "nav" => {
            if rest.trim().is_empty() {
                return Err(InputError::MissingArgument("section"));
            }
            let section: Section = rest.parse().map_err(|_| InputError::UnknownSection(rest.trim().to_string()))?;
            Input::Command(Command::Navigate(section))
        },
        "list" => Input::Show,
        "help" => Input::Help,
        "quit" | "exit" => Input::Quit,
        other => return Err(InputError::UnknownCommand(other.to_string())),
    };
    Ok(input)
}

/// `<title> | <date> | <time> | <category> | <description>`. Missing parts are left empty, except for the category.
fn parse_draft(text: &str) -> EventDraft {
    let mut parts = text.splitn(5, '|').map(|part| part.trim().to_string());
    let mut next = || parts.next().unwrap_or_default();

    let title = next();
    let date = next();
    let time = next();
    let category = match next() {
        c if c.is_empty() => crate::config::default_category(),
        c => c,
    };
    let description = next();

    EventDraft { title, date, time, category, description }
}

fn parse_id(text: &str) -> Result<EventId, InputError> {
    let text = text.trim().trim_start_matches('#');
    if text.is_empty() {
        return Err(InputError::MissingArgument("event id"));
    }
    text.parse().map_err(|_| InputError::InvalidId(text.to_string()))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_fields() {
        assert_eq!(parse_line("title  Team lunch\n"), Ok(Input::Field(FormField::Title, " Team lunch".to_string())));
        assert_eq!(parse_line("date 2025-01-10"), Ok(Input::Field(FormField::Date, "2025-01-10".to_string())));
        assert_eq!(parse_line("SUBMIT"), Ok(Input::Submit));
    }

    #[test]
    fn add_in_one_line() {
        let input = parse_line("add Standup | 2025-01-10 | 09:00 | Work | daily sync").unwrap();
        assert_eq!(input, Input::Command(Command::Add(EventDraft {
            title: "Standup".to_string(),
            date: "2025-01-10".to_string(),
            time: "09:00".to_string(),
            category: "Work".to_string(),
            description: "daily sync".to_string(),
        })));

        match parse_line("add Standup | 2025-01-10").unwrap() {
            Input::Command(Command::Add(draft)) => {
                assert_eq!(draft.time, "");
                assert_eq!(draft.category, crate::config::default_category());
                assert_eq!(draft.is_complete(), false);
            },
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn ids() {
        assert_eq!(parse_line("toggle 1736499600000"), Ok(Input::Command(Command::Toggle(EventId::from(1736499600000)))));
        assert_eq!(parse_line("delete #12"), Ok(Input::Command(Command::Delete(EventId::from(12)))));
        assert_eq!(parse_line("delete"), Err(InputError::MissingArgument("event id")));
        assert_eq!(parse_line("toggle abc"), Err(InputError::InvalidId("abc".to_string())));
    }

    #[test]
    fn search_keeps_its_text() {
        assert_eq!(parse_line("search"), Ok(Input::Command(Command::Filter(String::new()))));
        assert_eq!(parse_line("search team lunch"), Ok(Input::Command(Command::Filter("team lunch".to_string()))));
    }

    #[test]
    fn navigation() {
        assert_eq!(parse_line("nav calendar"), Ok(Input::Command(Command::Navigate(Section::Calendar))));
        assert_eq!(parse_line("nav"), Err(InputError::MissingArgument("section")));
        assert_eq!(parse_line("nav agenda"), Err(InputError::UnknownSection("agenda".to_string())));
    }

    #[test]
    fn misc() {
        assert_eq!(parse_line("   "), Err(InputError::Empty));
        assert_eq!(parse_line("theme"), Ok(Input::Command(Command::ToggleTheme)));
        assert_eq!(parse_line("quit"), Ok(Input::Quit));
        assert_eq!(parse_line("frobnicate now"), Err(InputError::UnknownCommand("frobnicate".to_string())));
    }
}
