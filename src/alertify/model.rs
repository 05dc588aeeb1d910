use crate::due::Due;
use crate::error::AlertifyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        };
        f.write_str(name)
    }
}

impl FromStr for Priority {
    type Err = AlertifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(AlertifyError::InvalidPriority(s.to_string())),
        }
    }
}

/// Stored lifecycle state. `Completed` is one-shot: the next archiving list
/// removes the reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Pending,
    Completed,
    Overdue,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Pending => "Pending",
            Status::Completed => "Completed",
            Status::Overdue => "Overdue",
        };
        f.write_str(name)
    }
}

impl FromStr for Status {
    type Err = AlertifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Status::Pending),
            "completed" => Ok(Status::Completed),
            "overdue" => Ok(Status::Overdue),
            _ => Err(AlertifyError::InvalidStatus(s.to_string())),
        }
    }
}

// Field order is the on-disk key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: Uuid,
    #[serde(rename = "reminder", alias = "text")]
    pub text: String,
    #[serde(default)]
    pub due: Due,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: Status,
}

impl Reminder {
    pub fn new(text: String, due: Due, priority: Priority) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            due,
            priority,
            status: Status::Pending,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == Status::Completed
    }

    /// Whether the reminder should be shown as overdue right now: either it
    /// was explicitly marked so, or it is still pending past its due date.
    pub fn displays_overdue(&self) -> bool {
        match self.status {
            Status::Overdue => true,
            Status::Pending => self.due.is_overdue(),
            Status::Completed => false,
        }
    }
}
