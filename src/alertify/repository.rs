//! In-memory operations over a loaded reminder collection.
//!
//! `Reminders` owns the ordered list between a load and a save. Nothing here
//! touches storage; the command layer wraps each mutation in a load/save pair.

use crate::due::Due;
use crate::error::{AlertifyError, Result};
use crate::index::{index_reminders, resolve_position, DisplayReminder, ReminderRef};
use crate::model::{Priority, Reminder, Status};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reminders {
    items: Vec<Reminder>,
}

impl Reminders {
    pub fn new(items: Vec<Reminder>) -> Self {
        Self { items }
    }

    pub fn as_slice(&self) -> &[Reminder] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a new pending reminder and returns a copy of it.
    pub fn add(&mut self, text: &str, due: Due, priority: Priority) -> Result<Reminder> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AlertifyError::EmptyText);
        }
        let reminder = Reminder::new(text.to_string(), due, priority);
        self.items.push(reminder.clone());
        Ok(reminder)
    }

    pub fn find(&self, target: &ReminderRef) -> Option<&Reminder> {
        resolve_position(&self.items, target).map(|pos| &self.items[pos])
    }

    pub fn find_mut(&mut self, target: &ReminderRef) -> Result<&mut Reminder> {
        let pos = resolve_position(&self.items, target).ok_or(AlertifyError::NotFound(*target))?;
        Ok(&mut self.items[pos])
    }

    /// Overwrites the fields that are `Some`; the rest stay as they are.
    pub fn update(
        &mut self,
        target: &ReminderRef,
        due: Option<Due>,
        priority: Option<Priority>,
    ) -> Result<Reminder> {
        let reminder = self.find_mut(target)?;
        if let Some(due) = due {
            reminder.due = due;
        }
        if let Some(priority) = priority {
            reminder.priority = priority;
        }
        Ok(reminder.clone())
    }

    pub fn set_status(&mut self, target: &ReminderRef, status: Status) -> Result<Reminder> {
        let reminder = self.find_mut(target)?;
        reminder.status = status;
        Ok(reminder.clone())
    }

    pub fn remove(&mut self, target: &ReminderRef) -> Result<Reminder> {
        let pos = resolve_position(&self.items, target).ok_or(AlertifyError::NotFound(*target))?;
        Ok(self.items.remove(pos))
    }

    /// Sequence-numbered view of everything that is not completed.
    pub fn display(&self) -> Vec<DisplayReminder> {
        index_reminders(&self.items)
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|r| r.is_completed()).count()
    }

    /// Drops every completed reminder, keeping the relative order of the rest.
    /// Returns what was removed.
    pub fn sweep_completed(&mut self) -> Vec<Reminder> {
        let (completed, kept): (Vec<_>, Vec<_>) =
            self.items.drain(..).partition(|r| r.is_completed());
        self.items = kept;
        completed
    }
}
