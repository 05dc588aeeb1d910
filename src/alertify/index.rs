//! # Reminder addressing
//!
//! Reminders can be addressed two ways:
//!
//! - **By id**: the UUID assigned at creation. Stable for the lifetime of the
//!   reminder and the only identity written to disk.
//! - **By sequence number**: the 1-based position a listing shows next to each
//!   reminder. Completed reminders are skipped, so the numbers always run
//!   contiguously from 1 over the reminders that are actually displayed.
//!
//! Sequence numbers are recomputed every time and are only meaningful until
//! the collection changes; an archiving list that sweeps completed reminders
//! shifts them. Both modes resolve against the same ordered collection so the
//! commands above this module never care which one the user typed.

use crate::error::AlertifyError;
use crate::model::Reminder;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A user-supplied reference to a single reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReminderRef {
    ById(Uuid),
    BySequence(usize),
}

impl fmt::Display for ReminderRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReminderRef::ById(id) => write!(f, "ID {}", id),
            ReminderRef::BySequence(n) => write!(f, "serial number {}", n),
        }
    }
}

impl ReminderRef {
    /// The reference as the user would type it: `3` or the bare UUID.
    pub fn label(&self) -> String {
        match self {
            ReminderRef::ById(id) => id.to_string(),
            ReminderRef::BySequence(n) => n.to_string(),
        }
    }
}

impl FromStr for ReminderRef {
    type Err = AlertifyError;

    /// Digits are a sequence number (including `0`, which simply never
    /// resolves); anything else must be a UUID.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<usize>() {
            return Ok(ReminderRef::BySequence(n));
        }
        Uuid::parse_str(s)
            .map(ReminderRef::ById)
            .map_err(|_| AlertifyError::InvalidRef(s.to_string()))
    }
}

/// A reminder paired with the sequence number it is displayed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayReminder {
    pub reminder: Reminder,
    pub sequence: usize,
    pub overdue: bool,
}

/// Numbers every non-completed reminder in collection order, starting at 1.
pub fn index_reminders(reminders: &[Reminder]) -> Vec<DisplayReminder> {
    reminders
        .iter()
        .filter(|r| !r.is_completed())
        .enumerate()
        .map(|(i, r)| DisplayReminder {
            reminder: r.clone(),
            sequence: i + 1,
            overdue: r.displays_overdue(),
        })
        .collect()
}

/// Resolves a reference to a position in `reminders`.
pub fn resolve_position(reminders: &[Reminder], target: &ReminderRef) -> Option<usize> {
    match target {
        ReminderRef::ById(id) => reminders.iter().position(|r| r.id == *id),
        ReminderRef::BySequence(0) => None,
        ReminderRef::BySequence(n) => reminders
            .iter()
            .enumerate()
            .filter(|(_, r)| !r.is_completed())
            .nth(n - 1)
            .map(|(pos, _)| pos),
    }
}
