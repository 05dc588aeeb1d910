//! # API Facade
//!
//! The single entry point for every alertify operation, whatever the UI.
//!
//! The facade:
//! - **Normalizes inputs**: user-typed references, dates, priorities and
//!   statuses arrive as strings and are parsed here
//! - **Dispatches** to the matching command in `commands/*.rs`
//! - **Returns** structured `Result<CmdResult>` values, never text
//!
//! `AlertifyApi<S: DataStore>` is generic over storage: `FileStore` in
//! production, `InMemoryStore` in tests.
//!
//! Listing comes in two flavors because the ordinary list has a side effect:
//! [`AlertifyApi::list_and_archive`] deletes completed reminders as it lists
//! them, while [`AlertifyApi::peek`] is read-only.

use crate::backup::BackupManager;
use crate::commands;
use crate::due::Due;
use crate::error::Result;
use crate::index::ReminderRef;
use crate::model::{Priority, Status};
use crate::store::DataStore;
use std::str::FromStr;

pub struct AlertifyApi<S: DataStore> {
    store: S,
    backups: BackupManager,
}

impl<S: DataStore> AlertifyApi<S> {
    pub fn new(store: S, backups: BackupManager) -> Self {
        Self { store, backups }
    }

    pub fn add_reminder(
        &mut self,
        text: &str,
        due: Option<&str>,
        priority: Option<&str>,
    ) -> Result<commands::CmdResult> {
        let due: Option<Due> = parse_optional(due)?;
        let priority: Option<Priority> = parse_optional(priority)?;
        commands::add::run(&mut self.store, text, due, priority)
    }

    /// Lists reminders and permanently removes the completed ones.
    pub fn list_and_archive(&mut self) -> Result<commands::CmdResult> {
        commands::list::run(&mut self.store)
    }

    /// Lists reminders without modifying the store.
    pub fn peek(&mut self) -> Result<commands::CmdResult> {
        commands::list::peek(&mut self.store)
    }

    pub fn update_reminder(
        &mut self,
        reference: &str,
        due: Option<&str>,
        priority: Option<&str>,
    ) -> Result<commands::CmdResult> {
        let target = parse_ref(reference)?;
        let due: Option<Due> = parse_optional(due)?;
        let priority: Option<Priority> = parse_optional(priority)?;
        commands::update::run(&mut self.store, &target, due, priority)
    }

    pub fn set_status(&mut self, reference: &str, status: &str) -> Result<commands::CmdResult> {
        let target = parse_ref(reference)?;
        let status = Status::from_str(status)?;
        commands::status::run(&mut self.store, &target, status)
    }

    pub fn remove_reminder(&mut self, reference: &str) -> Result<commands::CmdResult> {
        let target = parse_ref(reference)?;
        commands::remove::run(&mut self.store, &target)
    }

    pub fn reset(&mut self) -> Result<commands::CmdResult> {
        commands::reset::run(&mut self.store)
    }

    pub fn backup(&self) -> Result<commands::CmdResult> {
        commands::backup::backup(&self.backups)
    }

    pub fn restore(&self) -> Result<commands::CmdResult> {
        commands::backup::restore(&self.backups)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn parse_ref(input: &str) -> Result<ReminderRef> {
    ReminderRef::from_str(input)
}

fn parse_optional<T>(input: Option<&str>) -> Result<Option<T>>
where
    T: FromStr<Err = crate::error::AlertifyError>,
{
    input.map(T::from_str).transpose()
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
