//! Listing.
//!
//! [`run`] is the archiving list: completed reminders are left out of the
//! listing and permanently removed from the store in the same call. [`peek`]
//! shows the same numbered listing and never changes existing reminders. The
//! one write it can cause is the store's own bootstrap of a missing or empty
//! file to `[]`.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use log::info;

use super::helpers::{load_reminders, save_reminders};

pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let mut reminders = load_reminders(store)?;
    let listed = reminders.display();
    let archived = reminders.sweep_completed();

    if !archived.is_empty() {
        save_reminders(store, &reminders)?;
        info!("Archived {} completed reminder(s)", archived.len());
    }

    Ok(CmdResult::default()
        .with_listed_reminders(listed)
        .with_archived_reminders(archived))
}

pub fn peek<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let reminders = load_reminders(store)?;
    let mut result = CmdResult::default().with_listed_reminders(reminders.display());

    let pending_archive = reminders.completed_count();
    if pending_archive > 0 {
        result.add_message(CmdMessage::info(format!(
            "{} completed reminder(s) will be archived on the next list.",
            pending_archive
        )));
    }
    Ok(result)
}
