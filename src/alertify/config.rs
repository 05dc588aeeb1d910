use crate::backup::default_backup_path;
use crate::error::{AlertifyError, Result};
use crate::store::fs::DEFAULT_STORE_FILE;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "alertify.json";

/// Configuration for alertify, read from `alertify.json` in the working
/// directory. Relative paths are resolved against that directory.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AlertifyConfig {
    /// The reminders file.
    #[serde(default = "default_store_file")]
    pub store_file: PathBuf,

    /// Where `backup` moves the reminders file. Defaults to a
    /// `<stem>_backup.<ext>` sibling of `store_file`.
    #[serde(default)]
    pub backup_file: Option<PathBuf>,
}

fn default_store_file() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_FILE)
}

impl Default for AlertifyConfig {
    fn default() -> Self {
        Self {
            store_file: default_store_file(),
            backup_file: None,
        }
    }
}

impl AlertifyConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AlertifyError::Io)?;
        serde_json::from_str(&content).map_err(|e| {
            AlertifyError::Config(format!("{}: {}", config_path.display(), e))
        })
    }

    pub fn with_store_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_file = path.into();
        self
    }

    pub fn with_backup_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.backup_file = Some(path.into());
        self
    }

    /// Store and backup paths, anchored at `base` when relative.
    pub fn resolve_paths(&self, base: &Path) -> AlertifyPaths {
        let store = base.join(&self.store_file);
        let backup = match &self.backup_file {
            Some(path) => base.join(path),
            None => default_backup_path(&store),
        };
        AlertifyPaths { store, backup }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertifyPaths {
    pub store: PathBuf,
    pub backup: PathBuf,
}
