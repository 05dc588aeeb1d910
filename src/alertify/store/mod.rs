//! # Storage Layer
//!
//! The [`DataStore`] trait is the whole-collection persistence boundary. Every
//! command loads the full ordered list, mutates it in memory, and hands the
//! full list back; there are no partial writes or appends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single pretty-printed JSON array on disk
//!   (`reminders.json` by default). A missing or empty file bootstraps to an
//!   empty array; anything else that fails to parse is reported as corrupt and
//!   never overwritten.
//! - [`memory::InMemoryStore`]: in-memory storage for tests.
//!
//! ## Storage Format
//!
//! ```text
//! [
//!     {
//!         "id": "5b0c8f7e-3c0a-4a53-9d57-2f2f6a0c1d11",
//!         "reminder": "Pay rent",
//!         "due": "2024-01-01",
//!         "priority": "High",
//!         "status": "Pending"
//!     }
//! ]
//! ```

use crate::error::Result;
use crate::model::Reminder;

pub mod fs;
pub mod memory;

/// Abstract interface for reminder storage.
pub trait DataStore {
    /// Load the full collection, bootstrapping an empty one if none exists yet.
    fn load(&mut self) -> Result<Vec<Reminder>>;

    /// Replace the stored collection with `reminders`.
    fn save(&mut self, reminders: &[Reminder]) -> Result<()>;
}
