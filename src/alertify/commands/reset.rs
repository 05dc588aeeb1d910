use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use log::warn;

/// Truncates the store to an empty collection without looking at what is in
/// it, so this also clears a store that no longer parses.
pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    store.save(&[])?;
    warn!("Reminders file reset");
    Ok(CmdResult::default().with_message(CmdMessage::success(
        "Reminders file reset successfully.",
    )))
}
