//! Turns events into something that can be displayed
//!
//! The renderer does not draw anything by itself: it produces a [`Listing`] of [`Card`]s, that hosts display the way they want
//! (both implement `Display`, for text hosts).

use std::fmt::{Display, Formatter};

use chrono::{Datelike, NaiveDate};

use crate::event::{Event, EventId};

/// Shown instead of the list when there is no event to display
pub const EMPTY_PLACEHOLDER: &str = "No events yet. Add one on the left.";
/// Shown for events without a description
pub const NO_DESCRIPTION: &str = "No description provided.";
/// Shown for dates that cannot be parsed
pub const NO_DATE: &str = "--";
/// Shown for events without a time
pub const NO_TIME: &str = "--:--";

// Short month names of the fixed en-IN locale
const MONTHS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec"];
const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];


/// The rendered list of events
#[derive(Clone, Debug, PartialEq)]
pub enum Listing {
    /// There is nothing to show, only an informational message
    Empty(&'static str),
    Cards(Vec<Card>),
}

impl Listing {
    pub fn cards(&self) -> &[Card] {
        match self {
            Listing::Empty(_) => &[],
            Listing::Cards(cards) => cards,
        }
    }
}

impl Display for Listing {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Listing::Empty(text) => writeln!(f, "{}", text),
            Listing::Cards(cards) => {
                for card in cards {
                    write!(f, "{}", card)?;
                }
                Ok(())
            },
        }
    }
}


/// The visual representation of an event
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    /// Actions triggered from this card refer to this id
    pub id: EventId,
    pub title: String,
    /// Formatted date and raw time, e.g. `10 Jan 2025 • 09:00`
    pub when: String,
    pub category: String,
    pub description: String,
    pub toggle_label: &'static str,
    pub delete_label: &'static str,
    /// Completed cards are displayed as "attended"
    pub completed: bool,
}

impl Card {
    pub fn new(event: &Event) -> Self {
        let time = match event.time().trim().is_empty() {
            true => NO_TIME,
            false => event.time(),
        };

        Self {
            id: event.id(),
            title: event.title().to_string(),
            when: format!("{} • {}", format_date(event.date()), time),
            category: event.category().to_string(),
            description: event.description().unwrap_or(NO_DESCRIPTION).to_string(),
            toggle_label: if event.completed() { "Mark Pending" } else { "Mark Completed" },
            delete_label: "Delete",
            completed: event.completed(),
        }
    }

    /// Write the text layout of this card, with `title` in place of the plain title (e.g. a colored one)
    pub fn write_with<W: std::fmt::Write>(&self, w: &mut W, title: &str) -> Result<(), std::fmt::Error> {
        let completion = if self.completed { "✓" } else { " " };
        writeln!(w, "[{}] {}\t(#{})", completion, title, self.id)?;
        writeln!(w, "    {}  [{}]", self.when, self.category)?;
        writeln!(w, "    {}", self.description)?;
        writeln!(w, "    <{}> <{}>", self.toggle_label, self.delete_label)
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        self.write_with(f, &self.title)
    }
}


/// Render a (possibly filtered) collection, sorted by date and time.
///
/// The source collection is left untouched. Events whose date or time cannot be parsed come first.
pub fn render(events: &[Event]) -> Listing {
    if events.is_empty() {
        return Listing::Empty(EMPTY_PLACEHOLDER);
    }

    let mut sorted: Vec<&Event> = events.iter().collect();
    sorted.sort_by_key(|ev| ev.starts_at());

    Listing::Cards(sorted.into_iter().map(Card::new).collect())
}

/// Format a `YYYY-MM-DD` date as `DD Mon YYYY`, or return a placeholder if it cannot be parsed
pub fn format_date(date: &str) -> String {
    match crate::event::parse_date(date) {
        None => NO_DATE.to_string(),
        Some(date) => format!("{:02} {} {}", date.day(), MONTHS[date.month0() as usize], date.year()),
    }
}

/// The "today" label, e.g. `Sat, 17 Oct 2026`
pub fn today_label(today: NaiveDate) -> String {
    format!("{}, {:02} {} {}",
        WEEKDAYS[today.weekday().num_days_from_monday() as usize],
        today.day(),
        MONTHS[today.month0() as usize],
        today.year())
}


#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: u64, date: &str, time: &str) -> Event {
        serde_json::from_value(serde_json::json!({
            "id": id, "title": format!("event {}", id), "date": date, "time": time, "category": "Work",
        })).unwrap()
    }

    #[test]
    fn empty_listing() {
        let listing = render(&[]);
        assert_eq!(listing, Listing::Empty(EMPTY_PLACEHOLDER));
        assert!(listing.cards().is_empty());
        assert_eq!(listing.to_string(), format!("{}\n", EMPTY_PLACEHOLDER));
    }

    #[test]
    fn sorted_by_date_and_time() {
        let events = vec![
            sample(1, "2025-03-01", "10:00"),
            sample(2, "2025-01-10", "09:30"),
            sample(3, "2025-01-10", "09:00"),
            sample(4, "2025-03-01", "10:00"),
        ];
        let ids: Vec<u64> = render(&events).cards().iter().map(|c| c.id.as_u64()).collect();
        assert_eq!(ids, vec![3, 2, 1, 4]);

        // the source is not reordered
        assert_eq!(events[0].id(), EventId::from(1));
    }

    #[test]
    fn unparseable_events_come_first_in_insertion_order() {
        let events = vec![
            sample(1, "2025-01-10", "09:00"),
            sample(2, "", "10:00"),
            sample(3, "2024-12-31", "23:00"),
            sample(4, "2025-01-10", ""),
            sample(5, "2025-02-30", "08:00"),
            sample(6, "2025-01-10", "25:99"),
        ];
        let ids: Vec<u64> = render(&events).cards().iter().map(|c| c.id.as_u64()).collect();
        assert_eq!(ids, vec![2, 4, 5, 6, 3, 1]);
    }

    #[test]
    fn colored_title() {
        let card = Card::new(&sample(1, "2025-01-10", "09:00"));
        let mut text = String::new();
        card.write_with(&mut text, "*event 1*").unwrap();
        assert!(text.starts_with("[ ] *event 1*\t(#1)\n"));
        assert_eq!(text.replace("*event 1*", "event 1"), card.to_string());
    }

    #[test]
    fn card_content() {
        let mut ev = sample(1, "2025-01-10", "09:00");
        let card = Card::new(&ev);
        assert_eq!(card.when, "10 Jan 2025 • 09:00");
        assert_eq!(card.description, NO_DESCRIPTION);
        assert_eq!(card.toggle_label, "Mark Completed");
        assert_eq!(card.completed, false);

        ev.toggle_completion();
        let card = Card::new(&ev);
        assert_eq!(card.toggle_label, "Mark Pending");
        assert!(card.completed);
        assert!(card.to_string().starts_with("[✓] event 1"));
    }

    #[test]
    fn missing_values_degrade() {
        let card = Card::new(&sample(1, "2025-13-45", ""));
        assert_eq!(card.when, "-- • --:--");
    }

    #[test]
    fn dates() {
        assert_eq!(format_date("2025-09-05"), "05 Sept 2025");
        assert_eq!(format_date("not a date"), NO_DATE);
        assert_eq!(format_date(""), NO_DATE);
        assert_eq!(today_label(NaiveDate::from_ymd(2026, 10, 17)), "Sat, 17 Oct 2026");
    }
}
