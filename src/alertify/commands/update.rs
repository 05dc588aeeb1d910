use crate::commands::{CmdMessage, CmdResult};
use crate::due::Due;
use crate::error::Result;
use crate::index::ReminderRef;
use crate::model::Priority;
use crate::store::DataStore;

use super::helpers::{load_reminders, save_reminders};

/// Overwrites the supplied fields. A missing target is an error and nothing
/// is written; a found target is always saved, even if nothing changed.
pub fn run<S: DataStore>(
    store: &mut S,
    target: &ReminderRef,
    due: Option<Due>,
    priority: Option<Priority>,
) -> Result<CmdResult> {
    let mut reminders = load_reminders(store)?;
    let nothing_to_change = due.is_none() && priority.is_none();
    let updated = reminders.update(target, due, priority)?;
    save_reminders(store, &reminders)?;

    let mut result = CmdResult::default();
    if nothing_to_change {
        result.add_message(CmdMessage::warning(
            "Nothing to update: pass a due date and/or a priority.",
        ));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Reminder {} updated.",
            target.label()
        )));
    }
    Ok(result.with_affected_reminders(vec![updated]))
}
