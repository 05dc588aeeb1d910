use super::DataStore;
use crate::error::Result;
use crate::model::Reminder;

/// In-memory storage for testing. Does NOT persist data.
///
/// Counts saves so tests can assert whether a command wrote at all.
#[derive(Default)]
pub struct InMemoryStore {
    reminders: Vec<Reminder>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&mut self) -> Result<Vec<Reminder>> {
        Ok(self.reminders.clone())
    }

    fn save(&mut self, reminders: &[Reminder]) -> Result<()> {
        self.reminders = reminders.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::due::Due;
    use crate::model::{Priority, Status};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        fn push(mut self, reminder: Reminder) -> Self {
            self.store.reminders.push(reminder);
            self
        }

        pub fn with_reminders(mut self, count: usize) -> Self {
            for i in 0..count {
                self = self.push(Reminder::new(
                    format!("Reminder {}", i + 1),
                    Due::None,
                    Priority::Medium,
                ));
            }
            self
        }

        pub fn with_pending(self, text: &str) -> Self {
            self.push(Reminder::new(text.to_string(), Due::None, Priority::Medium))
        }

        pub fn with_completed(self, text: &str) -> Self {
            let mut reminder = Reminder::new(text.to_string(), Due::None, Priority::Medium);
            reminder.status = Status::Completed;
            self.push(reminder)
        }

        pub fn with_due(self, text: &str, due: &str) -> Self {
            let due: Due = due.parse().expect("fixture date");
            self.push(Reminder::new(text.to_string(), due, Priority::Medium))
        }
    }
}
