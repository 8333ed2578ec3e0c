//! Infrastructure layer - Persistence, configuration and logging

pub mod config;
pub mod logging;
pub mod migrations;
pub mod repository;
pub mod store;

pub use config::Config;
pub use repository::{FileSystemRepository, JournalRepository};
pub use store::{EntryStore, SqliteEntryStore};
