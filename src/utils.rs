//! Some utility functions for text hosts

use std::time::Instant;

use crate::notify::{Toast, ToastPhase};
use crate::render::Listing;
use crate::stats::Stats;
use crate::theme::{Palette, ANSI_RESET};


/// Pretty-prints the counters of the dashboard
pub fn format_stats(stats: &Stats) -> String {
    format!("Total: {}   Upcoming: {}   Completed: {}", stats.total, stats.upcoming, stats.completed)
}

/// Pretty-prints a listing, with titles in the accent color (if any)
pub fn print_listing(listing: &Listing, palette: Option<&Palette>) {
    match (listing, palette) {
        (Listing::Cards(cards), Some(palette)) => {
            for card in cards {
                let mut text = String::new();
                if card.write_with(&mut text, &palette.accented(&card.title)).is_ok() {
                    print!("{}", text);
                }
            }
        },
        _ => print!("{}", listing),
    }
}

/// Pretty-prints the toasts that are still displayed
pub fn print_toasts(toasts: &[Toast], now: Instant) {
    for toast in toasts {
        match toast.phase(now) {
            ToastPhase::Visible => println!("  >> {}", toast),
            // dimmed while leaving
            ToastPhase::Leaving => println!("\x1b[2m  >> {}{}", toast, ANSI_RESET),
            ToastPhase::Expired => continue,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_line() {
        let stats = Stats { total: 3, upcoming: 1, completed: 2 };
        assert_eq!(format_stats(&stats), "Total: 3   Upcoming: 1   Completed: 2");
    }
}
