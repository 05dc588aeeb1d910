use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::ReminderRef;
use crate::model::Status;
use crate::store::DataStore;

use super::helpers::{load_reminders, save_reminders};

pub fn run<S: DataStore>(store: &mut S, target: &ReminderRef, status: Status) -> Result<CmdResult> {
    let mut reminders = load_reminders(store)?;
    let updated = reminders.set_status(target, status)?;
    save_reminders(store, &reminders)?;

    let message = CmdMessage::success(format!(
        "Status of reminder {} set to {}.",
        target.label(),
        status
    ));
    Ok(CmdResult::default()
        .with_affected_reminders(vec![updated])
        .with_message(message))
}
