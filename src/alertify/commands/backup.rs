use crate::backup::BackupManager;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn backup(manager: &BackupManager) -> Result<CmdResult> {
    manager.backup()?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Backup successful: {}",
        manager.backup_path().display()
    ))))
}

pub fn restore(manager: &BackupManager) -> Result<CmdResult> {
    manager.restore()?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Restore successful: {}",
        manager.live_path().display()
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, list};
    use crate::store::fs::FileStore;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn backup_restore_cycle_round_trips_store() {
        let dir = tempdir().unwrap();
        let live = dir.path().join("reminders.json");
        let manager = BackupManager::new(&live, dir.path().join("reminders_backup.json"));
        let mut store = FileStore::new(&live);

        add::run(&mut store, "Keep me", None, None).unwrap();
        let snapshot = fs::read_to_string(&live).unwrap();

        backup(&manager).unwrap();
        // With the live file moved away, a list bootstraps an empty store.
        assert!(list::run(&mut store).unwrap().listed_reminders.is_empty());

        fs::remove_file(&live).unwrap();
        restore(&manager).unwrap();
        assert_eq!(fs::read_to_string(&live).unwrap(), snapshot);
        assert_eq!(list::run(&mut store).unwrap().listed_reminders.len(), 1);
    }
}
