use crate::index::ReminderRef;
use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum AlertifyError {
    #[error("No reminder found with {0}")]
    NotFound(ReminderRef),

    #[error("Invalid reminder reference: {0} (expected a serial number or an ID)")]
    InvalidRef(String),

    #[error("Invalid status: {0} (expected Pending, Completed or Overdue)")]
    InvalidStatus(String),

    #[error("Invalid priority: {0} (expected Low, Medium or High)")]
    InvalidPriority(String),

    #[error("Invalid due date: {0} (expected YYYY-MM-DD or N/A)")]
    InvalidDate(String),

    #[error("Reminder text cannot be empty")]
    EmptyText,

    #[error("Backup error: {0}")]
    Backup(String),

    #[error("Error loading reminders from {}: {source}", .path.display())]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Error loading reminders from {}: duplicate id {id}", .path.display())]
    DuplicateId { path: PathBuf, id: Uuid },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AlertifyError {
    /// Errors the CLI reports without failing the process.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AlertifyError::NotFound(_)
                | AlertifyError::InvalidRef(_)
                | AlertifyError::InvalidStatus(_)
                | AlertifyError::InvalidPriority(_)
                | AlertifyError::InvalidDate(_)
                | AlertifyError::EmptyText
                | AlertifyError::Backup(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AlertifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_failures_are_recoverable() {
        assert!(AlertifyError::NotFound(ReminderRef::BySequence(3)).is_recoverable());
        assert!(AlertifyError::InvalidStatus("Done".into()).is_recoverable());
        assert!(AlertifyError::Backup("missing".into()).is_recoverable());
    }

    #[test]
    fn corrupt_store_is_fatal() {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = AlertifyError::CorruptStore {
            path: PathBuf::from("reminders.json"),
            source,
        };
        assert!(!err.is_recoverable());
        assert!(err.to_string().contains("reminders.json"));
    }

    #[test]
    fn duplicate_id_is_fatal() {
        let err = AlertifyError::DuplicateId {
            path: PathBuf::from("reminders.json"),
            id: Uuid::nil(),
        };
        assert!(!err.is_recoverable());
        assert!(err.to_string().starts_with("Error loading reminders from reminders.json"));
    }
}
