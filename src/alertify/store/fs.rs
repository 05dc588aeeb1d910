use super::DataStore;
use crate::error::{AlertifyError, Result};
use crate::model::Reminder;
use log::{debug, info};
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const DEFAULT_STORE_FILE: &str = "reminders.json";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(AlertifyError::Io)?;
            }
        }
        Ok(())
    }

    fn write_atomic(&self, content: &str) -> Result<()> {
        self.ensure_parent()?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let tmp_file = dir.join(format!(".reminders-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(AlertifyError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(AlertifyError::Io(e));
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&mut self) -> Result<Vec<Reminder>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(e) => return Err(AlertifyError::Io(e)),
        };

        if content.trim().is_empty() {
            info!(
                "No reminders at {}, starting an empty list",
                self.path.display()
            );
            self.save(&[])?;
            return Ok(Vec::new());
        }

        let reminders: Vec<Reminder> =
            serde_json::from_str(&content).map_err(|source| AlertifyError::CorruptStore {
                path: self.path.clone(),
                source,
            })?;

        let mut seen = HashSet::with_capacity(reminders.len());
        if let Some(dup) = reminders.iter().find(|r| !seen.insert(r.id)) {
            return Err(AlertifyError::DuplicateId {
                path: self.path.clone(),
                id: dup.id,
            });
        }
        debug!(
            "Loaded {} reminder(s) from {}",
            reminders.len(),
            self.path.display()
        );
        Ok(reminders)
    }

    fn save(&mut self, reminders: &[Reminder]) -> Result<()> {
        let content =
            serde_json::to_string_pretty(reminders).map_err(AlertifyError::Serialization)?;
        self.write_atomic(&content)?;
        debug!(
            "Saved {} reminder(s) to {}",
            reminders.len(),
            self.path.display()
        );
        Ok(())
    }
}
