use crate::index::DisplayReminder;
use crate::model::Reminder;

pub mod add;
pub mod backup;
pub mod helpers;
pub mod list;
pub mod remove;
pub mod reset;
pub mod status;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Reminders created or changed by the command.
    pub affected_reminders: Vec<Reminder>,
    /// Sequence-numbered reminders for display.
    pub listed_reminders: Vec<DisplayReminder>,
    /// Completed reminders swept out by an archiving list.
    pub archived_reminders: Vec<Reminder>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_reminders(mut self, reminders: Vec<Reminder>) -> Self {
        self.affected_reminders = reminders;
        self
    }

    pub fn with_listed_reminders(mut self, reminders: Vec<DisplayReminder>) -> Self {
        self.listed_reminders = reminders;
        self
    }

    pub fn with_archived_reminders(mut self, reminders: Vec<Reminder>) -> Self {
        self.archived_reminders = reminders;
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}
