//! # Alertify Architecture
//!
//! Alertify keeps a single user's reminders in one JSON file. The library does
//! all of the work; the `alertify` binary is a thin client over it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, colors output, picks exit codes        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Parses references, dates, priorities, statuses           │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One load → mutate → save cycle per command               │
//! │  - Mutation itself lives in repository.rs                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, backup.rs)                          │
//! │  - DataStore trait: whole-collection load/save              │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//!
//! Every reminder has a stable UUID, which is what the file stores. Listings
//! also number reminders 1, 2, 3... and those numbers work as references too,
//! until the next change to the collection. See [`index`].
//!
//! ## Completed reminders
//!
//! `Completed` is not a resting state. The ordinary list
//! ([`api::AlertifyApi::list_and_archive`]) drops completed reminders from the
//! file as it lists. Use [`api::AlertifyApi::peek`] to look without deleting.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`repository`]: In-memory collection operations
//! - [`index`]: Reference parsing and sequence numbering
//! - [`store`]: Storage abstraction and implementations
//! - [`backup`]: Rename-based backup and restore
//! - [`model`]: `Reminder`, `Priority`, `Status`
//! - [`due`]: Due dates and the overdue rule
//! - [`config`]: Store and backup path configuration
//! - [`error`]: Error types

pub mod api;
pub mod backup;
pub mod commands;
pub mod config;
pub mod due;
pub mod error;
pub mod index;
pub mod model;
pub mod repository;
pub mod store;
