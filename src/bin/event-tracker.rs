//! A terminal front-end for the event tracker.
//!
//! Events are stored in `$EVENT_TRACKER_DIR` (or `~/.local/share/event-tracker`).
//! Set the RUST_LOG environment variable to display more info about what happens.

use std::time::{Duration, Instant};

use chrono::Local;
use tokio::io::{AsyncBufReadExt, BufReader};

use event_tracker::config;
use event_tracker::input::{parse_line, Input, HELP};
use event_tracker::render::today_label;
use event_tracker::section::Section;
use event_tracker::storage::FolderStorage;
use event_tracker::traits::KeyValueStorage;
use event_tracker::utils::{format_stats, print_listing, print_toasts};
use event_tracker::{Store, Tracker};

const TICK_PERIOD: Duration = Duration::from_millis(100);


#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let folder = config::data_folder();
    log::info!("Using data folder {:?}", folder);
    let mut tracker = Tracker::open(Store::new(FolderStorage::new(&folder)));

    println!("Today: {}", today_label(Local::now().date_naive()));
    println!("Type \"help\" for a list of commands.");
    show(&tracker);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(TICK_PERIOD);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => break,
                    Err(err) => {
                        log::error!("Unable to read input: {}", err);
                        break;
                    },
                };
                if handle_line(&mut tracker, &line) == false {
                    break;
                }
            }
            _ = ticker.tick() => {
                tracker.tick(Instant::now());
            }
        }
    }
}

/// Returns false when the user wants to leave
fn handle_line<S: KeyValueStorage>(tracker: &mut Tracker<S>, line: &str) -> bool {
    let now = Instant::now();
    let input = match parse_line(line) {
        Ok(input) => input,
        Err(err) => {
            println!("{}", err);
            return true;
        },
    };

    match input {
        Input::Quit => return false,
        Input::Help => {
            println!("{}", HELP);
            return true;
        },
        Input::Show => {},
        Input::Field(field, value) => {
            tracker.form_mut().set(field, &value);
            println!("{}: {}", field, tracker.form().get(field));
            return true;
        },
        Input::Submit => {
            tracker.submit_form(now);
            if tracker.form_reset_requested() {
                println!("(form cleared)");
            }
        },
        Input::Command(command) => {
            tracker.dispatch(command, now);
        },
    }

    show(tracker);
    true
}

fn show<S: KeyValueStorage>(tracker: &Tracker<S>) {
    let palette = match tracker.theme().palette() {
        Ok(palette) => Some(palette),
        Err(err) => {
            log::warn!("Invalid palette for the {} theme: {}", tracker.theme(), err);
            None
        },
    };

    let (title, subtitle) = tracker.heading();
    println!();
    match &palette {
        Some(palette) => println!("{}", palette.accented(&format!("== {} ==", title))),
        None => println!("== {} ==", title),
    }
    println!("{}", subtitle);

    match tracker.section() {
        Section::Events => {
            println!("{}", format_stats(&tracker.stats(Local::now().naive_local())));
            if tracker.state().query().trim().is_empty() == false {
                println!("Search: {:?}", tracker.state().query());
            }
            println!();
            print_listing(&tracker.listing(), palette.as_ref());
        },
        Section::Calendar => println!("(nothing here yet)"),
        Section::Settings => {
            println!("Theme: {} (type \"theme\" to switch)", tracker.theme());
            println!("Categories: {}", config::categories().join(", "));
            println!("Data folder: {:?}", config::data_folder());
        },
    }

    print_toasts(tracker.toasts(), Instant::now());
}
