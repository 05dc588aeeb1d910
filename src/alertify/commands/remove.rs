use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::ReminderRef;
use crate::store::DataStore;

use super::helpers::{load_reminders, save_reminders};

pub fn run<S: DataStore>(store: &mut S, target: &ReminderRef) -> Result<CmdResult> {
    let mut reminders = load_reminders(store)?;
    let removed = reminders.remove(target)?;
    save_reminders(store, &reminders)?;

    let message = CmdMessage::success(format!(
        "Reminder {} deleted: {}",
        target.label(),
        removed.text
    ));
    Ok(CmdResult::default()
        .with_affected_reminders(vec![removed])
        .with_message(message))
}
