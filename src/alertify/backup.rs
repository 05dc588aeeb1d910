//! Rename-based snapshot and restore of the store file.
//!
//! A backup moves the live file aside rather than copying it, so right after a
//! backup there is no live store (the next load bootstraps an empty one), and
//! right after a restore there is no backup.

use crate::error::{AlertifyError, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct BackupManager {
    live: PathBuf,
    backup: PathBuf,
}

impl BackupManager {
    pub fn new(live: impl Into<PathBuf>, backup: impl Into<PathBuf>) -> Self {
        Self {
            live: live.into(),
            backup: backup.into(),
        }
    }

    pub fn live_path(&self) -> &Path {
        &self.live
    }

    pub fn backup_path(&self) -> &Path {
        &self.backup
    }

    pub fn backup(&self) -> Result<()> {
        if !self.live.exists() {
            return Err(AlertifyError::Backup(format!(
                "no reminders file at {}",
                self.live.display()
            )));
        }
        move_file(&self.live, &self.backup)?;
        info!(
            "Moved {} to {}",
            self.live.display(),
            self.backup.display()
        );
        Ok(())
    }

    pub fn restore(&self) -> Result<()> {
        if !self.backup.exists() {
            return Err(AlertifyError::Backup(format!(
                "no backup file at {}",
                self.backup.display()
            )));
        }
        move_file(&self.backup, &self.live)?;
        info!(
            "Moved {} to {}",
            self.backup.display(),
            self.live.display()
        );
        Ok(())
    }
}

/// `<stem>_backup.<ext>` next to `live`.
pub fn default_backup_path(live: &Path) -> PathBuf {
    let stem = live
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "reminders".to_string());
    let name = match live.extension() {
        Some(ext) => format!("{}_backup.{}", stem, ext.to_string_lossy()),
        None => format!("{}_backup", stem),
    };
    live.with_file_name(name)
}

fn move_file(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to).map_err(|e| {
        AlertifyError::Backup(format!(
            "could not move {} to {}: {}",
            from.display(),
            to.display(),
            e
        ))
    })
}
