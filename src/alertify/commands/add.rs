use crate::commands::{CmdMessage, CmdResult};
use crate::due::Due;
use crate::error::Result;
use crate::model::Priority;
use crate::store::DataStore;
use log::debug;

use super::helpers::{load_reminders, save_reminders};

pub fn run<S: DataStore>(
    store: &mut S,
    text: &str,
    due: Option<Due>,
    priority: Option<Priority>,
) -> Result<CmdResult> {
    let mut reminders = load_reminders(store)?;
    let reminder = reminders.add(text, due.unwrap_or_default(), priority.unwrap_or_default())?;
    save_reminders(store, &reminders)?;
    debug!("Added reminder {}", reminder.id);

    let message = CmdMessage::success(format!("Reminder added: {}", reminder.text));
    Ok(CmdResult::default()
        .with_affected_reminders(vec![reminder])
        .with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AlertifyError;
    use crate::model::Status;
    use crate::store::memory::InMemoryStore;
    use std::collections::HashSet;

    #[test]
    fn applies_defaults() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "Water plants", None, None).unwrap();

        let created = &result.affected_reminders[0];
        assert_eq!(created.due, Due::None);
        assert_eq!(created.priority, Priority::Medium);
        assert_eq!(created.status, Status::Pending);
        assert_eq!(store.reminders(), &[created.clone()]);
    }

    #[test]
    fn keeps_supplied_fields() {
        let mut store = InMemoryStore::new();
        let due: Due = "2024-01-01".parse().unwrap();
        run(&mut store, "Pay rent", Some(due), Some(Priority::High)).unwrap();

        let r = &store.reminders()[0];
        assert_eq!(r.text, "Pay rent");
        assert_eq!(r.due, due);
        assert_eq!(r.priority, Priority::High);
    }

    #[test]
    fn n_adds_give_n_distinct_ids_in_order() {
        let mut store = InMemoryStore::new();
        for i in 0..20 {
            run(&mut store, &format!("R{}", i), None, None).unwrap();
        }
        let reminders = store.reminders();
        assert_eq!(reminders.len(), 20);
        let ids: HashSet<_> = reminders.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), 20);
        assert_eq!(reminders[0].text, "R0");
        assert_eq!(reminders[19].text, "R19");
    }

    #[test]
    fn empty_text_is_rejected_without_saving() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, "", None, None).unwrap_err();
        assert!(matches!(err, AlertifyError::EmptyText));
        assert_eq!(store.save_count(), 0);
    }
}
