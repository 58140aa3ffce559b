//! Short-lived notifications ("toasts") for user feedback

use std::fmt::{Display, Error, Formatter};
use std::time::Instant;

use crate::config::{TOAST_DISPLAY, TOAST_EXIT};


/// The flavour of a toast
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl Default for ToastKind {
    fn default() -> Self {
        Self::Info
    }
}

impl Display for ToastKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            ToastKind::Info => write!(f, "info"),
            ToastKind::Success => write!(f, "success"),
            ToastKind::Error => write!(f, "error"),
        }
    }
}

/// Where a toast is in its life
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    /// Fully displayed
    Visible,
    /// Playing its exit animation
    Leaving,
    /// Should not be displayed anymore
    Expired,
}


#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    id: u64,
    message: String,
    kind: ToastKind,
    shown_at: Instant,
}

impl Toast {
    pub fn id(&self) -> u64            { self.id       }
    pub fn message(&self) -> &str      { &self.message }
    pub fn kind(&self) -> ToastKind    { self.kind     }
    pub fn shown_at(&self) -> Instant  { self.shown_at }

    pub fn phase(&self, now: Instant) -> ToastPhase {
        let age = now.saturating_duration_since(self.shown_at);
        if age < TOAST_DISPLAY {
            ToastPhase::Visible
        } else if age < TOAST_DISPLAY + TOAST_EXIT {
            ToastPhase::Leaving
        } else {
            ToastPhase::Expired
        }
    }
}

impl Display for Toast {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}


/// A stack of toasts, each of them with its own lifetime.
///
/// Time is never read from the system clock here: hosts pass the current instant, and call [`Notifier::tick`] to drop expired toasts.
#[derive(Debug, Default)]
pub struct Notifier {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a new toast. This never blocks.
    pub fn notify(&mut self, message: &str, kind: ToastKind, now: Instant) -> u64 {
        match kind {
            ToastKind::Error => log::warn!("{}", message),
            _ => log::info!("{}", message),
        }

        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.to_string(),
            kind,
            shown_at: now,
        });
        id
    }

    /// Remove the toasts that have finished their exit animation. Returns how many were removed.
    pub fn tick(&mut self, now: Instant) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.phase(now) != ToastPhase::Expired);
        let removed = before - self.toasts.len();
        if removed > 0 {
            log::trace!("{} toasts expired", removed);
        }
        removed
    }

    /// The current toasts, oldest first
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn lifetime() {
        let start = Instant::now();
        let mut notifier = Notifier::new();
        notifier.notify("Event added.", ToastKind::Success, start);

        let toast = &notifier.toasts()[0];
        assert_eq!(toast.to_string(), "[success] Event added.");
        assert_eq!(toast.phase(start), ToastPhase::Visible);
        assert_eq!(toast.phase(start + Duration::from_millis(2399)), ToastPhase::Visible);
        assert_eq!(toast.phase(start + Duration::from_millis(2400)), ToastPhase::Leaving);
        assert_eq!(toast.phase(start + Duration::from_millis(2600)), ToastPhase::Expired);

        assert_eq!(notifier.tick(start + Duration::from_millis(2500)), 0);
        assert_eq!(notifier.tick(start + Duration::from_millis(2600)), 1);
        assert!(notifier.toasts().is_empty());
    }

    #[test]
    fn independent_timers() {
        let start = Instant::now();
        let mut notifier = Notifier::new();
        let first = notifier.notify("one", ToastKind::Info, start);
        let second = notifier.notify("two", ToastKind::Error, start + Duration::from_millis(1000));
        assert_ne!(first, second);
        assert_eq!(notifier.toasts().len(), 2);

        notifier.tick(start + Duration::from_millis(3000));
        assert_eq!(notifier.toasts().len(), 1);
        assert_eq!(notifier.toasts()[0].message(), "two");

        notifier.tick(start + Duration::from_millis(3600));
        assert!(notifier.toasts().is_empty());
    }
}
