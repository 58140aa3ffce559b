//! Aggregate counters shown on the dashboard

use chrono::NaiveDateTime;

use crate::event::Event;


#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub upcoming: usize,
    pub completed: usize,
}

impl Stats {
    /// Compute the counters of a collection, at a given (local) time
    pub fn compute(events: &[Event], now: NaiveDateTime) -> Self {
        Self {
            total: events.len(),
            upcoming: events.iter().filter(|ev| ev.is_upcoming(now)).count(),
            completed: events.iter().filter(|ev| ev.completed()).count(),
        }
    }

    pub fn pending(&self) -> usize {
        self.total - self.completed
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;
    use crate::event::{EventDraft, EventId};

    fn sample(id: u64, date: &str, time: &str, completed: bool) -> Event {
        let mut ev: Event = serde_json::from_value(serde_json::json!({
            "id": id, "title": "t", "date": date, "time": time, "category": "Work",
        })).unwrap();
        if completed {
            ev.toggle_completion();
        }
        ev
    }

    #[test]
    fn counters() {
        let now = NaiveDate::from_ymd(2025, 1, 10).and_hms(9, 0, 0);
        let events = vec![
            sample(1, "2025-01-10", "09:00", false),  // upcoming: exactly now
            sample(2, "2025-01-10", "08:59", false),  // past
            sample(3, "2025-02-01", "10:00", true),   // future but completed
            sample(4, "2026-01-01", "", false),       // no time
            sample(5, "", "10:00", false),            // no date
            sample(6, "2031-12-31", "23:59", false),  // upcoming
        ];

        let stats = Stats::compute(&events, now);
        assert_eq!(stats, Stats { total: 6, upcoming: 2, completed: 1 });
        assert_eq!(stats.pending(), 5);
        assert!(stats.upcoming <= stats.total - stats.completed);
    }

    #[test]
    fn empty() {
        let now = NaiveDate::from_ymd(2025, 1, 10).and_hms(9, 0, 0);
        assert_eq!(Stats::compute(&[], now), Stats::default());

        let draft = EventDraft { title: "a".into(), date: "2025-01-10".into(), time: "09:00".into(), ..EventDraft::default() };
        let one = Event::new(EventId::from(1), draft).unwrap();
        assert_eq!(Stats::compute(&[one], now).upcoming, 1);
    }
}
